//! Diagnostic logging to disk.
//!
//! The terminal itself belongs to the UI, so tracing output goes to a daily
//! log file named `reachout_<date>.log` in the configured log directory
//! (default: `~/.local/share/reachout/logs/`). Settlement outcomes and
//! transport causes are recorded here; the user only ever sees the toast.

use crate::config::model::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = log_dir.join(format!("reachout_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("reachout=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn expand_log_dir(log_dir: &str) -> PathBuf {
    if log_dir.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(log_dir.trim_start_matches("~/"));
        }
    }
    PathBuf::from(log_dir)
}
