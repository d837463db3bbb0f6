//! folio: content resolution for a multilingual portfolio blog
//!
//! Posts live in a directory tree, one folder per slug with one markdown
//! file per language (`<slug>/<lang>.md`). This crate finds those files,
//! parses their front-matter with forgiving defaults, and answers the
//! queries the site's pages need: all posts, recent posts, a single post
//! with language fallback, and the translations available for a post.
//!
//! ```no_run
//! use folio::{content::Language, Folio};
//!
//! let site = Folio::new(".")?;
//! let resolver = site.resolver();
//! for post in resolver.get_recent_posts(None, Language::Es) {
//!     println!("{} - {}", post.date, post.title);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

#[cfg(test)]
mod test_util;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use content::{ContentResolver, FsSource};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A site on disk
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Content directory holding one folder per post
    pub content_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> anyhow::Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            content_dir,
        })
    }

    /// Build a resolver reading posts from the content directory
    pub fn resolver(&self) -> ContentResolver<FsSource> {
        ContentResolver::from_config(FsSource::new(&self.content_dir), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::Language;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let site = Folio::new(dir.path()).unwrap();
        assert_eq!(site.content_dir, dir.path().join("content/blog"));
        assert_eq!(site.config.author, config::DEFAULT_AUTHOR);

        // No content directory yet: everything is empty, nothing fails
        let resolver = site.resolver();
        assert!(resolver.get_all_posts(Language::En).is_empty());
        assert!(resolver.get_post_by_slug("anything", Language::Es).is_none());
        assert!(resolver.get_available_languages_for_post("anything").is_empty());
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), CONFIG_FILE, "language: [oops");
        assert!(Folio::new(dir.path()).is_err());
    }

    #[test]
    fn test_site_end_to_end() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(
            root,
            CONFIG_FILE,
            "author: Site Owner\ncontent_dir: posts\nlanguage: en\n",
        );
        write(
            root,
            "posts/my-first-post/en.md",
            "---\ndate: 2024-03-05\ntags:\n  - go\n  - rust\n---\n# Hello\n\nFirst post.\n",
        );
        write(
            root,
            "posts/my-first-post/es.md",
            "---\ntitle: Mi primer post\ndate: 2024-03-05\n---\nPrimer post.\n",
        );
        write(
            root,
            "posts/second/en.md",
            "---\ntitle: Second\ndate: '2024-04-01'\nauthor: Guest\n---\nMore.\n",
        );

        let site = Folio::new(root).unwrap();
        let resolver = site.resolver();

        let posts = resolver.get_all_posts(Language::En);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Second");
        assert_eq!(posts[0].author, "Guest");
        assert_eq!(posts[1].title, "My First Post");
        assert_eq!(posts[1].author, "Site Owner");
        assert_eq!(posts[1].tags, ["go", "rust"]);
        assert_eq!(posts[1].excerpt, "First post.");

        let spanish = resolver.get_post_by_slug("my-first-post", Language::Es).unwrap();
        assert_eq!(spanish.title, "Mi primer post");

        let fallback = resolver.get_post_by_slug("second", Language::Da).unwrap();
        assert_eq!(fallback.language, Language::En);

        assert_eq!(
            resolver.get_available_languages_for_post("my-first-post"),
            [Language::En, Language::Es]
        );
        assert_eq!(resolver.get_recent_posts(Some(5), Language::Es).len(), 1);
    }
}
