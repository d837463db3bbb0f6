//! Supported content languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A language a post can be written in.
///
/// The set is closed: a content file is only picked up when its name is
/// `<code>.md` for one of these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Da,
}

impl Language {
    /// Every supported language, in canonical order
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Da];

    /// Language used when a post is missing in the requested one
    pub const DEFAULT: Language = Language::En;

    /// Two-letter code, also the content file stem
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Da => "da",
        }
    }

    /// File name holding this language's variant of a post
    pub fn file_name(self) -> String {
        format!("{}.md", self.code())
    }

    /// Recognize a content file name such as `es.md`
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".md")?;
        Self::ALL.into_iter().find(|lang| lang.code() == stem)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" DA ".parse::<Language>().unwrap(), Language::Da);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(Error::UnknownLanguage(code)) if code == "fr"
        ));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Language::Es.file_name(), "es.md");
        assert_eq!(Language::from_file_name("da.md"), Some(Language::Da));
        assert_eq!(Language::from_file_name("fr.md"), None);
        assert_eq!(Language::from_file_name("en.markdown"), None);
        assert_eq!(Language::from_file_name("en"), None);
    }

    #[test]
    fn test_canonical_order() {
        let codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["en", "es", "da"]);
        assert_eq!(Language::default(), Language::En);
    }
}
