use anyhow::{Context, Result};
use clap::Parser;

mod api;
mod app;
mod logging;
mod screen;

use app::App;
use logging::LogLevel;

/// Terminal client for looking up Yu-Gi-Oh! cards on ygocdb.com.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Write a log file under `logs/` at this level. No logging when omitted.
    #[arg(long, value_enum, ignore_case = true)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(level) = args.log_level {
        logging::init(level).context("failed to set up logging")?;
        log::info!("ygocdb-tui started with log level {level}");
    }

    let result = App::new()?.run().await;

    match &result {
        Ok(()) => log::info!("ygocdb-tui exited normally"),
        Err(error) => log::error!("ygocdb-tui exited with error: {error:#}"),
    }

    result
}
