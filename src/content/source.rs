//! Content sources: where raw post files come from

use std::collections::BTreeMap;

use super::Language;
use crate::error::{Error, Result};

/// One raw post file, identified by slug and language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUnit {
    pub slug: String,
    pub language: Language,
    pub raw_text: String,
}

impl ContentUnit {
    pub fn new(slug: impl Into<String>, language: Language, raw_text: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            language,
            raw_text: raw_text.into(),
        }
    }
}

/// A store of post files keyed by `(slug, language)`.
///
/// Implementations hold at most one unit per key. None of the methods fail:
/// a store that cannot be read behaves like an empty one, and implementations
/// log the reason.
pub trait ContentSource {
    /// Whether the store can be read at all.
    ///
    /// Implementations log a warning each time this returns `false`, so
    /// callers check it once per operation.
    fn is_available(&self) -> bool {
        true
    }

    /// All units written in `language`
    fn list_units(&self, language: Language) -> Vec<ContentUnit>;

    /// Whether a unit exists for `slug` in `language`
    fn exists(&self, slug: &str, language: Language) -> bool;

    /// Read a single unit.
    ///
    /// The default implementation scans [`list_units`](Self::list_units);
    /// stores that can address a unit directly should override it.
    fn fetch(&self, slug: &str, language: Language) -> Option<ContentUnit> {
        self.list_units(language)
            .into_iter()
            .find(|unit| unit.slug == slug)
    }

    /// Languages `slug` is written in, in [`Language::ALL`] order
    fn available_languages(&self, slug: &str) -> Vec<Language> {
        if !self.is_available() {
            return Vec::new();
        }
        Language::ALL
            .into_iter()
            .filter(|&language| self.exists(slug, language))
            .collect()
    }
}

/// Check that a slug is a single, plain path segment
pub fn validate_slug(slug: &str) -> Result<&str> {
    let invalid = slug.is_empty()
        || slug == "."
        || slug == ".."
        || slug.contains(['/', '\\', '\0']);
    if invalid {
        return Err(Error::InvalidSlug(slug.to_string()));
    }
    Ok(slug)
}

/// In-memory content source, mostly useful in tests.
///
/// # Examples
/// ```
/// use folio::content::{ContentSource, Language, MemorySource};
///
/// let source = MemorySource::with_units([
///     ("hello-world", Language::En, "---\ntitle: Hello\n---\nHi!"),
/// ]);
/// assert!(source.exists("hello-world", Language::En));
/// assert_eq!(source.available_languages("hello-world"), [Language::En]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    units: BTreeMap<(String, Language), String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source pre-populated with `(slug, language, text)` entries.
    /// Later entries replace earlier ones with the same key.
    pub fn with_units<S, T>(units: impl IntoIterator<Item = (S, Language, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        let mut source = Self::new();
        for (slug, language, text) in units {
            source.insert(slug, language, text);
        }
        source
    }

    /// Add or replace a unit
    pub fn insert(&mut self, slug: impl Into<String>, language: Language, text: impl Into<String>) {
        self.units.insert((slug.into(), language), text.into());
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl ContentSource for MemorySource {
    fn list_units(&self, language: Language) -> Vec<ContentUnit> {
        self.units
            .iter()
            .filter(|((_, lang), _)| *lang == language)
            .map(|((slug, lang), text)| ContentUnit::new(slug.as_str(), *lang, text.as_str()))
            .collect()
    }

    fn exists(&self, slug: &str, language: Language) -> bool {
        self.units.contains_key(&(slug.to_string(), language))
    }

    fn fetch(&self, slug: &str, language: Language) -> Option<ContentUnit> {
        self.units
            .get(&(slug.to_string(), language))
            .map(|text| ContentUnit::new(slug, language, text.as_str()))
    }
}
