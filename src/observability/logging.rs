//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber
//! - Pick the log level from `RUST_LOG`, falling back to configuration
//! - Route output to stdout or to `<log_dir>/<app_name>.log`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for machine parsing, text format for development
//! - `debug = true` in the app config lowers the crate's own level to `debug`
//! - The log file is opened in append mode and created with its directory

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::{AppConfig, LogFormat, ObservabilityConfig};

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &ObservabilityConfig, debug: bool) -> String {
    let level = config.log_level.to_ascii_lowercase();
    if debug {
        format!("{level},blog_router=debug,tower_http=debug")
    } else {
        format!("{level},tower_http=info")
    }
}

/// Log file for `app_name` under `log_dir`.
pub fn log_file_path(log_dir: &Path, app_name: &str) -> PathBuf {
    log_dir.join(format!("{app_name}.log"))
}

/// Install the global subscriber. Returns `Ok(false)` if one was already set.
pub fn init_tracing(config: &AppConfig) -> io::Result<bool> {
    let observability = &config.observability;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(observability, config.debug)));

    let (writer, ansi) = match &observability.log_dir {
        Some(dir) => {
            let file = open_log_file(dir, &config.app_name)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stdout), true),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(observability.log_format, writer, ansi))
        .try_init()
        .is_ok();
    Ok(installed)
}

fn fmt_layer<S>(
    format: LogFormat,
    writer: BoxMakeWriter,
    ansi: bool,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi);
    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn open_log_file(log_dir: &Path, app_name: &str) -> io::Result<fs::File> {
    fs::create_dir_all(log_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(log_dir, app_name))
}
