//! Configuration for the region settings tools.
//!
//! Settings persist to disk as a RON file with every section optional, and
//! can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command, SpawnCommand, TelehubCommand};
pub use config::{DebugConfig, StorageConfig, TelehubConfig, ToolConfig};
pub use error::ConfigError;
