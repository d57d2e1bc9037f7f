//! Errors reported by `regionctl`.

use simregion_config::ConfigError;
use simregion_settings::SettingsError;
use simregion_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("spawn point index out of range: {index} (region has {len} spawn points)")]
    SpawnIndexOutOfRange { index: usize, len: usize },

    #[error("terrain texture slot must be 1 to 4, got {0}")]
    InvalidTextureSlot(u8),

    #[error("failed to save region settings: {0}")]
    Save(#[source] SettingsError),

    #[error("no config directory given and none provided by the OS")]
    NoConfigDir,

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<SettingsError> for CliError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::IndexOutOfRange { index, len } => {
                CliError::SpawnIndexOutOfRange { index, len }
            }
            other => CliError::Save(other),
        }
    }
}
