use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use cityplist::cli::Cli;
use cityplist::config::Config;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    info!("cityplist starting");

    let summary = cityplist::update(&config).await?;
    println!(
        "{} Wrote {} cities to {}",
        "✓".green(),
        summary.records,
        summary.output.display().to_string().cyan()
    );

    Ok(())
}
