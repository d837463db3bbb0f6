//! Post model and parser

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentUnit, FrontMatter, Language};
use crate::config::{SiteConfig, DEFAULT_AUTHOR};
use crate::helpers::{humanize_slug, now_iso, paragraphs, parse_timestamp, truncate_with_ellipsis};

/// Excerpt used when a post has no usable paragraph
pub const NO_EXCERPT: &str = "No excerpt available";

/// Content used when a post has an empty body
pub const NO_CONTENT: &str = "No content available";

/// Default excerpt length, in characters
pub const EXCERPT_LENGTH: usize = 150;

/// A blog post, fully populated.
///
/// Built fresh from a [`ContentUnit`] on every lookup and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Same as the slug; kept separately for consumers that key on `id`
    pub id: String,

    /// Directory name of the post, shared by all its languages
    pub slug: String,

    /// Language the content was read from
    pub language: Language,

    pub title: String,

    pub author: String,

    /// ISO 8601 timestamp
    pub date: String,

    pub excerpt: String,

    /// Markdown body, without the front-matter block
    pub content: String,

    pub tags: Vec<String>,
}

impl Post {
    /// Publication time, or `None` if `date` is not a valid timestamp
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }
}

/// Turns raw content files into [`Post`]s.
///
/// Parsing happens in two steps: [`FrontMatter::parse`] collects whatever
/// fields the file provides, then a single defaulting pass produces the
/// final record. Parsing never fails.
#[derive(Debug, Clone)]
pub struct PostParser {
    default_author: String,
    excerpt_length: usize,
}

impl Default for PostParser {
    fn default() -> Self {
        Self {
            default_author: DEFAULT_AUTHOR.to_string(),
            excerpt_length: EXCERPT_LENGTH,
        }
    }
}

impl PostParser {
    /// Create a parser using `default_author` for posts without an author
    pub fn new(default_author: impl Into<String>) -> Self {
        Self {
            default_author: default_author.into(),
            ..Default::default()
        }
    }

    /// Create a parser from the site configuration
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.author.clone()).with_excerpt_length(config.excerpt_length)
    }

    /// Set the maximum length of derived excerpts
    pub fn with_excerpt_length(mut self, excerpt_length: usize) -> Self {
        self.excerpt_length = excerpt_length;
        self
    }

    /// Parse a content unit
    pub fn parse(&self, unit: &ContentUnit) -> Post {
        self.parse_text(&unit.raw_text, &unit.slug, unit.language)
    }

    /// Parse raw file text, using `slug` as the post's identifier
    pub fn parse_text(&self, raw: &str, slug: &str, language: Language) -> Post {
        let (fm, body) = FrontMatter::parse(raw, slug);
        self.fill_defaults(fm, body, slug, language)
    }

    fn fill_defaults(&self, fm: FrontMatter, body: &str, slug: &str, language: Language) -> Post {
        let excerpt = fm
            .excerpt
            .or_else(|| derive_excerpt(body, self.excerpt_length))
            .unwrap_or_else(|| NO_EXCERPT.to_string());

        let content = if body.trim().is_empty() {
            NO_CONTENT.to_string()
        } else {
            body.to_string()
        };

        Post {
            id: slug.to_string(),
            slug: slug.to_string(),
            language,
            title: fm.title.unwrap_or_else(|| humanize_slug(slug)),
            author: fm.author.unwrap_or_else(|| self.default_author.clone()),
            date: fm.date.unwrap_or_else(now_iso),
            excerpt,
            content,
            tags: fm.tags.unwrap_or_default(),
        }
    }
}

/// First paragraph of the body that isn't a heading, cut to `max_chars`
fn derive_excerpt(body: &str, max_chars: usize) -> Option<String> {
    paragraphs(body)
        .into_iter()
        .find(|p| !p.starts_with('#'))
        .map(|p| truncate_with_ellipsis(&p, max_chars))
}
