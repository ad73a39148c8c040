//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `nik_parse` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use nik_parse::config::Opt;
use nik_parse::initialization::init_logger_with;
use nik_parse::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG and friends may live in a .env file; a missing file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("nik_parse error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
