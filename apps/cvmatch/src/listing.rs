use std::collections::HashMap;

use tracing::{debug, warn};

use crate::api_client::ApiClient;
use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::job_match::ResumeMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            80.. => MatchBand::Strong,
            50..=79 => MatchBand::Moderate,
            _ => MatchBand::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchBand::Strong => "strong",
            MatchBand::Moderate => "moderate",
            MatchBand::Weak => "weak",
        }
    }
}

/// Copies résumé scores onto postings by id, then orders by score (unscored count as 0).
/// Without any scores the server order is kept.
pub fn merge_scores(mut jobs: Vec<JobPosting>, scores: &[ResumeMatch]) -> Vec<JobPosting> {
    if scores.is_empty() {
        return jobs;
    }

    let by_id: HashMap<i64, u32> = scores.iter().map(|s| (s.job_id, s.match_score)).collect();
    for job in &mut jobs {
        job.match_score = by_id.get(&job.id).copied();
    }
    jobs.sort_by_key(|job| std::cmp::Reverse(job.match_score.unwrap_or(0)));
    jobs
}

/// Fetches the job board, scored against `resume_id` when given.
/// A failed score lookup degrades to the unscored list.
pub async fn load_job_board(
    api: &ApiClient,
    resume_id: Option<&str>,
) -> Result<Vec<JobPosting>, AppError> {
    let response = api.list_jobs().await?;
    debug!(
        "Loaded {} job(s), status {:?}",
        response.jobs.len(),
        response.status
    );
    let jobs = response.jobs;

    let Some(resume_id) = resume_id else {
        return Ok(jobs);
    };
    match api.resume_matches(resume_id).await {
        Ok(scores) => Ok(merge_scores(jobs, &scores)),
        Err(e) => {
            warn!("Could not load match scores for {resume_id}: {e}");
            Ok(jobs)
        }
    }
}
