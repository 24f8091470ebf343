mod admin;
mod api_client;
mod chatbot;
mod commands;
mod config;
mod errors;
mod listing;
mod matching;
mod models;
mod state;
mod submission;
mod upload;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::Cli;
use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("cvmatch v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Endpoints: candidates={} jobs={} matches={}",
        config.candidates_url, config.jobs_url, config.job_matches_url
    );

    let state = AppState::new(config);

    if let Err(err) = commands::run(cli, state).await {
        error!("{} ({})", err, err.code());
        eprintln!("{}", err.user_message());
        std::process::exit(err.exit_code());
    }

    Ok(())
}
