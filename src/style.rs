//! Stylesheet loading for rendered cards.

use crate::constants::DEFAULT_STYLES_DIR;
use crate::error::{MetacardError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of named CSS resources.
pub trait LoadStyle {
    /// Contents of the stylesheet called `name`.
    fn load_style(&self, name: &str) -> Result<String>;
}

/// Stylesheets read from a directory on disk.
#[derive(Debug, Clone)]
pub struct StyleSheets {
    dir: PathBuf,
}

impl StyleSheets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for StyleSheets {
    fn default() -> Self {
        Self::new(DEFAULT_STYLES_DIR)
    }
}

impl LoadStyle for StyleSheets {
    fn load_style(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|source| {
            tracing::debug!(path = %path.display(), error = %source, "stylesheet not readable");
            MetacardError::MissingStyle {
                name: name.to_string(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped() -> StyleSheets {
        StyleSheets::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("card-styles"))
    }

    #[test]
    fn test_loads_shipped_base_stylesheet() {
        let css = shipped().load_style("base.css").unwrap();
        assert!(css.contains(".card-link"));
    }

    #[test]
    fn test_missing_stylesheet() {
        let err = shipped().load_style("nope.css").unwrap_err();
        match err {
            MetacardError::MissingStyle { name, source } => {
                assert_eq!(name, "nope.css");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
