//! Content loader - reads post files from the content directory
//!
//! The directory holds one subdirectory per post slug, each containing one
//! `<language>.md` file per translation:
//!
//! ```text
//! content/blog/
//! ├── my-first-post/
//! │   ├── en.md
//! │   └── es.md
//! └── another-post/
//!     └── en.md
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::source::validate_slug;
use super::{ContentSource, ContentUnit, Language};
use crate::error::{Error, Result};

/// Content source backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source reading from `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn unit_path(&self, slug: &str, language: Language) -> Result<PathBuf> {
        let slug = validate_slug(slug)?;
        Ok(self.root.join(slug).join(language.file_name()))
    }

    fn read_unit(path: &Path, slug: &str, language: Language) -> Result<ContentUnit> {
        let raw_text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(ContentUnit::new(slug, language, raw_text))
    }
}

impl ContentSource for FsSource {
    fn is_available(&self) -> bool {
        let available = self.root.is_dir();
        if !available {
            tracing::warn!(root = ?self.root, "Content store unavailable: directory not found");
        }
        available
    }

    fn list_units(&self, language: Language) -> Vec<ContentUnit> {
        if !self.is_available() {
            return Vec::new();
        }

        let file_name = language.file_name();
        let mut units = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(2)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable content entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.file_name() != file_name.as_str() {
                continue;
            }

            let path = entry.path();
            let Some(slug) = path
                .parent()
                .and_then(|dir| dir.file_name())
                .and_then(|name| name.to_str())
            else {
                tracing::warn!(path = ?path, "Skipping post with a non UTF-8 directory name");
                continue;
            };

            match Self::read_unit(path, slug, language) {
                Ok(unit) => units.push(unit),
                Err(e) => tracing::warn!(slug, "Failed to load post: {}", e),
            }
        }

        tracing::debug!(%language, count = units.len(), "Listed content units");
        units
    }

    fn exists(&self, slug: &str, language: Language) -> bool {
        match self.unit_path(slug, language) {
            Ok(path) => path.is_file(),
            Err(e) => {
                tracing::debug!("{}", e);
                false
            }
        }
    }

    fn fetch(&self, slug: &str, language: Language) -> Option<ContentUnit> {
        let path = match self.unit_path(slug, language) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("{}", e);
                return None;
            }
        };

        if !path.is_file() {
            return None;
        }

        match Self::read_unit(&path, slug, language) {
            Ok(unit) => Some(unit),
            Err(e) => {
                tracing::warn!(slug, "Failed to load post: {}", e);
                None
            }
        }
    }
}
