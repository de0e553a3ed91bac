//! Tracing setup for the CLI and the TUI.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Dispatch;
use tracing::subscriber::NoSubscriber;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Directives used when `RUST_LOG` is unset for stderr logging.
const STDERR_LOG_DEFAULT: &str = "info";
/// Directives used when `RUST_LOG` is unset for file logging.
const FILE_LOG_DEFAULT: &str = "info,tally_core=debug,tally=debug";

/// Filter from `directives` when they are present and parse, else `default`.
fn build_filter(directives: Option<&str>, default: &str) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

fn env_filter(default: &str) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(directives.as_deref(), default)
}

/// Install the global stderr subscriber for non-interactive commands.
pub fn install_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_LOG_DEFAULT))
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

/// Dispatcher used while the TUI owns the terminal.
///
/// Without a log file every event is discarded.
pub fn tui_dispatch(log_file: Option<&Path>) -> Result<Dispatch> {
    let Some(path) = log_file else {
        return Ok(Dispatch::new(NoSubscriber::default()));
    };

    let file = open_log_file(path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_LOG_DEFAULT))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_span_events(FmtSpan::NONE)
        .finish();
    Ok(Dispatch::new(subscriber))
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
