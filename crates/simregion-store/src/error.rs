//! Store error types.

use std::path::PathBuf;

/// Errors raised while reading or writing region files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("region store I/O on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse region file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize region settings: {0}")]
    Serialize(#[source] ron::Error),
}
