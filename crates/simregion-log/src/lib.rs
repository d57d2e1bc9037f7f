//! Structured logging for the region settings tools.
//!
//! Console output goes to stderr so command output on stdout stays clean.
//! Optionally a JSON log file is written as well. The filter comes from
//! `RUST_LOG` when set, otherwise from the tool config's log level.

use std::path::Path;

use simregion_config::ToolConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn,simregion_store=info";
const LOG_FILE: &str = "regionctl.log";

/// Filter string for the given config, falling back to [`DEFAULT_FILTER`].
pub fn filter_directive(config: Option<&ToolConfig>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// `log_dir` enables an additional JSON file layer; if the directory or file
/// cannot be created the console layer is installed alone.
///
/// ```no_run
/// use simregion_config::ToolConfig;
/// use simregion_log::init_logging;
///
/// let config = ToolConfig::default();
/// init_logging(config.debug.log_dir.as_deref(), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, config: Option<&ToolConfig>) {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}
