//! Post queries over a content source

use std::cmp::Ordering;

use super::{ContentSource, Language, Post, PostParser};
use crate::config::SiteConfig;

/// Number of posts returned by [`ContentResolver::get_recent_posts`] when no
/// count is given
pub const DEFAULT_RECENT_COUNT: usize = 3;

/// Answers post queries by reading and parsing a [`ContentSource`].
///
/// Nothing is cached: every call reads the source again and builds new
/// [`Post`]s. Calls don't fail either; a missing store gives empty lists and
/// `None`, and the problem is logged.
#[derive(Debug, Clone)]
pub struct ContentResolver<S> {
    source: S,
    parser: PostParser,
    fallback: Language,
}

impl<S: ContentSource> ContentResolver<S> {
    /// Create a resolver with the default parser and fallback language
    pub fn new(source: S) -> Self {
        Self {
            source,
            parser: PostParser::default(),
            fallback: Language::DEFAULT,
        }
    }

    /// Create a resolver using the site's author and language settings
    pub fn from_config(source: S, config: &SiteConfig) -> Self {
        Self {
            source,
            parser: PostParser::from_config(config),
            fallback: config.language,
        }
    }

    /// Replace the post parser
    pub fn with_parser(mut self, parser: PostParser) -> Self {
        self.parser = parser;
        self
    }

    /// The underlying content source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Language used when a post is missing in the requested one
    pub fn fallback_language(&self) -> Language {
        self.fallback
    }

    /// All posts written in `language`, newest first.
    ///
    /// Posts whose date can't be parsed come last. Posts missing in
    /// `language` are not filled in from the fallback language.
    pub fn get_all_posts(&self, language: Language) -> Vec<Post> {
        let mut posts: Vec<(Post, _)> = self
            .source
            .list_units(language)
            .iter()
            .map(|unit| {
                let post = self.parser.parse(unit);
                let timestamp = post.timestamp();
                (post, timestamp)
            })
            .collect();

        // Stable sort, so equal or invalid dates keep source order
        posts.sort_by(|(_, a), (_, b)| match (a, b) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        tracing::debug!(%language, count = posts.len(), "Loaded posts");
        posts.into_iter().map(|(post, _)| post).collect()
    }

    /// Find a post by slug.
    ///
    /// If the post isn't written in `language`, its fallback-language
    /// version is returned instead. `None` when neither exists, or when the
    /// requested translation exists but can't be read.
    pub fn get_post_by_slug(&self, slug: &str, language: Language) -> Option<Post> {
        if !self.source.is_available() {
            return None;
        }

        if self.source.exists(slug, language) {
            let Some(unit) = self.source.fetch(slug, language) else {
                tracing::warn!(slug, %language, "Post exists but could not be read");
                return None;
            };
            return Some(self.parser.parse(&unit));
        }

        if language == self.fallback {
            tracing::debug!(slug, %language, "Post not found");
            return None;
        }

        match self.source.fetch(slug, self.fallback) {
            Some(unit) => {
                tracing::debug!(slug, %language, fallback = %self.fallback, "Using fallback language");
                Some(self.parser.parse(&unit))
            }
            None => {
                tracing::debug!(slug, %language, "Post not found in any language");
                None
            }
        }
    }

    /// The newest `count` posts in `language` (default
    /// [`DEFAULT_RECENT_COUNT`]); fewer if there aren't that many
    pub fn get_recent_posts(&self, count: Option<usize>, language: Language) -> Vec<Post> {
        let mut posts = self.get_all_posts(language);
        posts.truncate(count.unwrap_or(DEFAULT_RECENT_COUNT));
        posts
    }

    /// Languages `slug` is written in, in canonical order
    pub fn get_available_languages_for_post(&self, slug: &str) -> Vec<Language> {
        self.source.available_languages(slug)
    }
}
