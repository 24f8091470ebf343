use clap::Args;

use crate::errors::AppError;
use crate::listing::load_job_board;
use crate::state::AppState;
use crate::view;

#[derive(Debug, Args)]
pub struct JobsArgs {
    /// Score postings against this uploaded résumé
    #[arg(long)]
    pub resume_id: Option<String>,
}

pub async fn handle_jobs(state: &AppState, args: JobsArgs, json: bool) -> Result<(), AppError> {
    let jobs = load_job_board(&state.api, args.resume_id.as_deref()).await?;
    if json {
        crate::commands::print_json(&jobs)
    } else {
        print!("{}", view::job_board(&jobs));
        Ok(())
    }
}
