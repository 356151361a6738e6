//! HTTP server for the SpaceX launch records dashboard.
//!
//! Data flow:
//! 1. `run` loads the launch CSV once; a missing or malformed file aborts
//!    startup with the path in the error.
//! 2. The layout is built and the page rendered once, then shared with
//!    every request through `Arc`.
//! 3. Control changes arrive as `POST /_dash-update-component`; the
//!    registered handler for the requested output recomputes its figure.

pub mod config;
pub mod server;

use anyhow::Context;
use config::Cli;
use spacex_launch::{Dashboard, LaunchTable};
use std::sync::Arc;

pub use server::{build_router, AppState};

/// Load the dataset, build the dashboard and serve it until Ctrl-C.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let dashboard = load_dashboard(&cli)?;
    server::serve(&cli.bind_addr(), dashboard).await
}

pub fn load_dashboard(cli: &Cli) -> anyhow::Result<Arc<Dashboard>> {
    let table = LaunchTable::from_path(&cli.data).context("cannot start dashboard")?;
    let dashboard = Dashboard::new(Arc::new(table));
    log::info!(
        "dashboard ready: {} sites, {} callbacks",
        dashboard.layout().site_dropdown.options.len() - 1,
        dashboard.registry().len()
    );
    Ok(Arc::new(dashboard))
}
