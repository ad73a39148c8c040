//! Server lifecycle: load resources, serve, shut down.

use anyhow::{Context, Result};
use log::info;

use crate::app::shutdown_signal;
use crate::config::Config;
use crate::initialization::{init_region_table, init_visitor_tally};
use crate::server::{spawn_server, AppState, ServerHandle};

/// Loads the region table, creates an empty visitor tally and starts the
/// server in the background.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the region table cannot
/// be loaded, or the address cannot be bound.
pub async fn start(config: &Config) -> Result<ServerHandle> {
    config.validate().context("Invalid configuration")?;

    let regions = init_region_table(config.regions.as_deref())
        .context("Failed to load region table")?;
    let visitors = init_visitor_tally();
    let state = AppState::new(regions, visitors);

    let handle = spawn_server(&config.bind_address(), state)
        .await
        .context("Failed to start server")?;

    Ok(handle)
}

/// Runs the server until Ctrl+C or SIGTERM, then shuts down gracefully.
///
/// # Example
///
/// ```no_run
/// use nik_parse::{run_server, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// run_server(Config::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_server(config: Config) -> Result<()> {
    let handle = start(&config).await?;
    let address = handle.local_addr();

    shutdown_signal().await;

    handle.shutdown().await?;
    info!("Server on {} stopped", address);

    Ok(())
}
