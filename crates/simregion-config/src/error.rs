//! Configuration error types.

/// Errors that can occur when loading, saving, or resolving tool configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read `config.ron` from disk.
    #[error("failed to read tool config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write `config.ron` to disk.
    #[error("failed to write tool config: {0}")]
    WriteError(#[source] std::io::Error),

    /// `config.ron` is not valid RON for [`ToolConfig`](crate::ToolConfig).
    #[error("failed to parse tool config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize the config to RON.
    #[error("failed to serialize tool config: {0}")]
    SerializeError(#[source] ron::Error),

    /// No data directory configured and the OS does not provide one.
    #[error("no region data directory configured and none provided by the OS")]
    NoDataDir,
}
