use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use tracing::info;

use crate::admin::candidates::filter_candidates;
use crate::admin::jobs::{save_job, JobDraft};
use crate::admin::matches::{MatchTable, SortDirection};
use crate::errors::AppError;
use crate::state::AppState;
use crate::view;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Job postings
    Jobs {
        #[command(subcommand)]
        action: JobAction,
    },
    /// Registered candidates
    Candidates {
        #[command(subcommand)]
        action: CandidateAction,
    },
    /// Stored candidate/job matches
    Matches {
        #[command(subcommand)]
        action: MatchAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum JobAction {
    List,
    Create(JobFields),
    /// Only the given fields change
    Update {
        id: i64,
        #[command(flatten)]
        fields: JobFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum CandidateAction {
    List {
        /// Matches name, email or phone
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        skill: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum MatchAction {
    List {
        /// Matches candidate name, email or job title
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        company: String,
        /// Only matches stored for this candidate id
        #[arg(long)]
        candidate: Option<String>,
        /// Lowest percentage first
        #[arg(long)]
        asc: bool,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Default, Args)]
pub struct JobFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Repeat for each required skill; replaces the existing list
    #[arg(long = "skill")]
    pub skills: Vec<String>,
    #[arg(long)]
    pub experience: Option<u32>,
    #[arg(long)]
    pub job_type: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub salary_range: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub posted_date: Option<NaiveDate>,
}

impl JobFields {
    fn apply(self, draft: &mut JobDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if !self.skills.is_empty() {
            draft.required_skills.clear();
            for skill in &self.skills {
                draft.add_skill(skill);
            }
        }
        if let Some(experience) = self.experience {
            draft.experience_required = experience;
        }
        if let Some(job_type) = self.job_type {
            draft.job_type = job_type;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(salary_range) = self.salary_range {
            draft.salary_range = salary_range;
        }
        if let Some(posted_date) = self.posted_date {
            draft.posted_date = posted_date;
        }
    }
}

pub async fn handle_admin(state: &AppState, section: AdminCommand, json: bool) -> Result<(), AppError> {
    match section {
        AdminCommand::Jobs { action } => handle_jobs(state, action, json).await,
        AdminCommand::Candidates { action } => handle_candidates(state, action, json).await,
        AdminCommand::Matches { action } => handle_matches(state, action, json).await,
    }
}

async fn handle_jobs(state: &AppState, action: JobAction, json: bool) -> Result<(), AppError> {
    let today = Local::now().date_naive();
    match action {
        JobAction::List => {
            let jobs = state.api.list_jobs().await?.jobs;
            if json {
                return crate::commands::print_json(&jobs);
            }
            print!("{}", view::job_board(&jobs));
        }
        JobAction::Create(fields) => {
            let mut draft = JobDraft::new(today);
            fields.apply(&mut draft);
            let saved = save_job(&state.api, &draft).await?;
            println!("Created job #{}", saved.id);
        }
        JobAction::Update { id, fields } => {
            let jobs = state.api.list_jobs().await?.jobs;
            let existing = jobs
                .iter()
                .find(|job| job.id == id)
                .ok_or_else(|| AppError::Invalid(format!("No job with id {id}")))?;
            let mut draft = JobDraft::from_posting(existing, today);
            fields.apply(&mut draft);
            let saved = save_job(&state.api, &draft).await?;
            println!("Updated job #{}", saved.id);
        }
        JobAction::Delete { id } => {
            state.api.delete_job(id).await?;
            info!("Job {id} deleted");
            println!("Deleted job #{id}");
        }
    }
    Ok(())
}

async fn handle_candidates(
    state: &AppState,
    action: CandidateAction,
    json: bool,
) -> Result<(), AppError> {
    match action {
        CandidateAction::List { search, skill } => {
            let candidates = state.api.list_candidates().await?;
            let rows = filter_candidates(&candidates, &search, &skill);
            if json {
                return crate::commands::print_json(&rows);
            }
            print!("{}", view::candidates(&rows));
        }
        CandidateAction::Delete { id } => {
            state.api.delete_candidate(id).await?;
            info!("Candidate {id} deleted");
            println!("Deleted candidate #{id}");
        }
    }
    Ok(())
}

async fn handle_matches(state: &AppState, action: MatchAction, json: bool) -> Result<(), AppError> {
    match action {
        MatchAction::List {
            search,
            company,
            candidate,
            asc,
        } => {
            let (records, jobs, candidates) = tokio::try_join!(
                state.api.list_job_matches(candidate.as_deref()),
                state.api.list_jobs(),
                state.api.list_candidates(),
            )?;
            let jobs = jobs.jobs;
            let mut direction = SortDirection::default();
            if asc {
                direction = direction.toggle();
            }

            let table = MatchTable::new(&jobs, &candidates);
            let rows = table.filter(&records, &search, &company, direction);
            if json {
                return crate::commands::print_json(&rows);
            }
            print!("{}", view::job_matches(&table, &rows));
        }
        MatchAction::Delete { id } => {
            state.api.delete_job_match(id).await?;
            info!("Match {id} deleted");
            println!("Deleted match #{id}");
        }
    }
    Ok(())
}
