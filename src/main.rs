use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use quotes_scrap::{info_time, process::run, Result, ScrapeConfig, DEFAULT_OUTPUT};

/// Scrapes every quote off the paginated quotes site into a CSV file.
#[derive(Parser)]
#[command(name = "quotes-scrap", version)]
struct Cli {
    /// Where to write the CSV (created or truncated)
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let start_time = Local::now();
    run(&ScrapeConfig::default(), &cli.output).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
