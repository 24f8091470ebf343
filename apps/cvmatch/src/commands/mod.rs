//! Command-line surface. `run` dispatches each subcommand to its handler, the way
//! a router maps paths to handlers.

pub mod admin;
pub mod chat;
pub mod jobs;
pub mod offline;
pub mod upload;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "cvmatch", version, about = "Upload a CV and find matching jobs")]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a CV with candidate details and show the matched jobs
    Upload(upload::UploadArgs),
    /// Estimate the best job locally, without contacting the server
    Match(offline::MatchArgs),
    /// List job postings, optionally scored against an uploaded résumé
    Jobs(jobs::JobsArgs),
    /// Ask the assistant a question, or start a conversation when no message is given
    Chat(chat::ChatArgs),
    /// Manage jobs, candidates and stored matches
    Admin {
        #[command(subcommand)]
        section: admin::AdminCommand,
    },
}

pub async fn run(cli: Cli, state: AppState) -> Result<(), AppError> {
    let json = cli.json;
    match cli.command {
        Command::Upload(args) => upload::handle_upload(&state, args, json).await,
        Command::Match(args) => offline::handle_match(&state, args, json),
        Command::Jobs(args) => jobs::handle_jobs(&state, args, json).await,
        Command::Chat(args) => chat::handle_chat(&state, args, json).await,
        Command::Admin { section } => {
            state.require_admin()?;
            admin::handle_admin(&state, section, json).await
        }
    }
}

/// Writes `value` to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{text}");
    Ok(())
}
