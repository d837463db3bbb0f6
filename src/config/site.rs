//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::{Language, EXCERPT_LENGTH};
use crate::error::{Error, Result};

/// Author credited on posts that don't name one
pub const DEFAULT_AUTHOR: &str = "Juan Herreros";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub author: String,
    /// Fallback language for posts missing a translation
    pub language: Language,

    // Directory
    pub content_dir: String,

    // Writing
    pub excerpt_length: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            language: Language::DEFAULT,

            content_dir: "content/blog".to_string(),

            excerpt_length: EXCERPT_LENGTH,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }
}
