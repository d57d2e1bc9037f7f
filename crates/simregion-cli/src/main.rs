//! `regionctl`: inspect and edit stored region settings.

mod commands;
mod error;

use clap::Parser;
use simregion_config::{CliArgs, ToolConfig};
use simregion_store::RegionStore;

use crate::commands::Context;
use crate::error::CliError;

fn run(args: CliArgs) -> Result<(), CliError> {
    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => ToolConfig::default_dir().ok_or(CliError::NoConfigDir)?,
    };
    let config_path = ToolConfig::file_path(&config_dir);
    let existed = config_path.exists();
    let mut config = ToolConfig::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    simregion_log::init_logging(config.debug.log_dir.as_deref(), Some(&config));
    if existed {
        tracing::info!(path = %config_path.display(), "loaded tool config");
    } else {
        tracing::info!(path = %config_path.display(), "created default tool config");
    }

    let ctx = Context {
        store: RegionStore::new(config.storage.resolve_data_dir()?, config.storage.pretty),
        rotation_fallback: config.telehub.rotation_fallback,
    };
    tracing::debug!(data_dir = %ctx.store.dir().display(), "using region store");
    let stdout = std::io::stdout();
    commands::execute(&ctx, &args.command, &mut stdout.lock())
}

fn main() {
    if let Err(e) = run(CliArgs::parse()) {
        eprintln!("regionctl: {e}");
        std::process::exit(1);
    }
}
