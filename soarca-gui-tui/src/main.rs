//! SOARCA terminal dashboard
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: events as data (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input translation (`event/`)
//! - **Backend**: services over soarca-gui-core (`backend/`)
//!
//! Startup: logging, config (`config.json`, `SOARCA_URI`), tokio runtime for
//! background work, terminal setup, main loop, terminal restore.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::time::Duration;

use anyhow::{Context, Result};

use backend::{ConfigService, CoreService, FileConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // Logging is best-effort; the dashboard still runs without a log file
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e:#}");
    }

    let config = FileConfigService::new().load()?;
    if config.soarca_uri.is_none() {
        log::warn!("SOARCA_URI is not set; login and health checks will fail");
    }
    view::theme::set_theme(config.theme);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let backend = CoreService::new(&config, runtime.handle().clone())
        .context("Failed to set up the SOARCA client")?;
    let _health = backend.start_health_monitor(Duration::from_secs(config.health_interval_secs.max(1)));
    let mut app = model::App::new(backend);

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // Restore the terminal whether or not the loop failed
    restore_terminal(&mut terminal)?;

    log::info!("Exiting");
    result
}
