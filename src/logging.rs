use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config;

pub fn log_path() -> PathBuf {
    config::data_dir().join("logs").join("yay.log")
}

/// Route `tracing` output to the log file. The terminal belongs to the editor,
/// so nothing is written to stdout or stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) -> Result<PathBuf> {
    let path = log_path();
    init_at(&path, default_filter)?;
    Ok(path)
}

fn init_at(path: &Path, default_filter: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
