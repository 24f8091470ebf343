use clap::Args;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::MatchResult;
use crate::state::AppState;
use crate::submission::skills::{clean_skills, form_skills};
use crate::view;

#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Comma separated, e.g. "Java, Python"
    #[arg(long)]
    pub skills: String,

    /// Years of experience
    #[arg(long, default_value_t = 0)]
    pub experience: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OfflineMatch {
    skills: Vec<String>,
    experience: u32,
    top_match: Option<MatchResult>,
    jobs: Vec<MatchResult>,
}

pub fn handle_match(state: &AppState, args: MatchArgs, json: bool) -> Result<(), AppError> {
    let skills = clean_skills(&form_skills(&args.skills));
    if skills.is_empty() {
        return Err(AppError::Invalid("Please list at least one skill".to_string()));
    }

    let result = OfflineMatch {
        top_match: state.matcher.best_match(&skills, args.experience),
        jobs: state.matcher.rank(&skills, args.experience),
        skills,
        experience: args.experience,
    };

    if json {
        return crate::commands::print_json(&result);
    }
    match &result.top_match {
        Some(top) => println!("Best match: {}", view::match_line(top)),
        None => println!("No matching jobs found."),
    }
    for job in result.jobs.iter().filter(|j| Some(*j) != result.top_match.as_ref()) {
        println!("Also: {}", view::match_line(job));
    }
    Ok(())
}
