//! File logging
//!
//! The terminal is owned by the UI, so log records go to
//! `<config dir>/soarca-gui.log`. `RUST_LOG` overrides the default `info` level.
//! Records emitted through the `log` facade (the core crate) are bridged in.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::config_dir;

const LOG_FILE: &str = "soarca-gui.log";

pub fn init_logging() -> Result<()> {
    let dir = config_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("Failed to install the log subscriber")?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(())
}
