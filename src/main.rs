use anyhow::{Context, Result};
use clap::Parser;
use profile_analyzer::cli::{handle_command, Cli};
use profile_analyzer::core::ConfigManager;
use std::fs::OpenOptions;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", console::style("✗").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ConfigManager::load()?;

    // Logs go to a file so the rendered dashboard owns stdout
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&config.logging.log_path)
        .with_context(|| {
            format!(
                "Failed to open log file: {}",
                config.logging.log_path.display()
            )
        })?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive("info".parse().context("Invalid log directive")?),
        )
        .init();

    tracing::info!("Starting HIRESENSE profile analyzer");
    tracing::info!("Analysis service: {}", config.service.analysis_api_url);
    tracing::info!("Log file: {}", config.logging.log_path.display());

    handle_command(cli, &config).await
}
