//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `recscan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Interrupt handling and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use recscan::app::render_banner;
use recscan::initialization::{init_logger_with, init_resolver};
use recscan::{run, Config, HickoryClient, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("{}", format!("Error: {e}").red());
        process::exit(1);
    }

    if config.show_banner {
        render_banner(&mut io::stdout()).context("Failed to print banner")?;
    }

    let resolver = init_resolver(Duration::from_secs(config.timeout_seconds));
    let client = HickoryClient::new(resolver);

    tokio::select! {
        result = run(&config, &client) => match result {
            Ok(summary) => {
                log::debug!("Run finished: {summary:?}");
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e:#}").red());
                process::exit(1)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            // In-flight lookups are dropped; nothing partial is written
            println!("\nExiting RecScan. Bye!");
            process::exit(0)
        }
    }
}
