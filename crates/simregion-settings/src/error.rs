//! Region settings error types.

/// Boxed error returned by save observers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by [`RegionSettings`](crate::RegionSettings) operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A spawn point index was outside `[0, len)`.
    #[error("spawn point index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A save observer failed; observers registered after it were not notified.
    #[error("save observer #{index} failed: {source}")]
    Observer {
        index: usize,
        #[source]
        source: BoxError,
    },
}
