//! Content loading errors.

use std::path::PathBuf;

use thiserror::Error;

use storefront_core::DomainError;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
