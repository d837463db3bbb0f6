//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the fallible parts of the crate.
///
/// The query layer never returns these to its callers; they are logged and
/// mapped to empty or absent results.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
