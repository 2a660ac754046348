//! Routing of extracted meta tags into namespaces.

use crate::attributes::AttributeTag;
use crate::constants::{DESCRIPTION_KEYS, DISCARDED_KEYS, OPEN_GRAPH_PREFIX, TWITTER_PREFIX};
use crate::document::{TagInfo, TagMap};

/// Where a meta tag's value belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// One of the description keys, feeding the top-level description.
    Description,
    Twitter,
    OpenGraph,
    /// No recognised namespace.
    Generic,
    /// Carries nothing a card can show (`viewport`, `X-UA-Compatible`).
    Discard,
}

/// Decide the bucket for an identifying key.
pub fn classify(key: &str) -> Bucket {
    if DESCRIPTION_KEYS.contains(&key) {
        Bucket::Description
    } else if DISCARDED_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key)) {
        Bucket::Discard
    } else if key.starts_with(TWITTER_PREFIX) {
        Bucket::Twitter
    } else if key.starts_with(OPEN_GRAPH_PREFIX) {
        Bucket::OpenGraph
    } else {
        Bucket::Generic
    }
}

/// Meta tags sorted into buckets, fed in document order.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    /// Every description-bearing tag, oldest first.
    pub descriptions: Vec<TagInfo>,
    pub twitter: TagMap,
    pub open_graph: TagMap,
    pub meta: TagMap,
}

impl Classified {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one tag. `keep_unknown` decides whether generic keys are kept.
    pub fn push(&mut self, attr: AttributeTag, html: &str, keep_unknown: bool) -> Bucket {
        let bucket = classify(&attr.key);
        let info = TagInfo::new(attr.content, html);

        match bucket {
            Bucket::Description => self.descriptions.push(info),
            Bucket::Twitter => {
                self.twitter.insert(attr.key, info);
            }
            Bucket::OpenGraph => {
                self.open_graph.insert(attr.key, info);
            }
            Bucket::Generic if keep_unknown => {
                self.meta.insert(attr.key, info);
            }
            Bucket::Generic | Bucket::Discard => {}
        }

        bucket
    }

    /// Total number of stored entries across all buckets.
    pub fn len(&self) -> usize {
        self.descriptions.len() + self.twitter.len() + self.open_graph.len() + self.meta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
