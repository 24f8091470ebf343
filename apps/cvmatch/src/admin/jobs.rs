use chrono::NaiveDate;
use tracing::info;

use crate::api_client::ApiClient;
use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRequest};

pub const DEFAULT_JOB_TYPE: &str = "Full-time";

/// A job posting being created or edited.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    /// `None` until the backend has assigned one.
    pub id: Option<i64>,
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub experience_required: u32,
    pub job_type: String,
    pub location: String,
    pub salary_range: String,
    pub posted_date: NaiveDate,
}

impl JobDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            id: None,
            title: String::new(),
            company: String::new(),
            description: String::new(),
            required_skills: Vec::new(),
            experience_required: 0,
            job_type: DEFAULT_JOB_TYPE.to_string(),
            location: String::new(),
            salary_range: String::new(),
            posted_date: today,
        }
    }

    pub fn from_posting(job: &JobPosting, today: NaiveDate) -> Self {
        Self {
            id: Some(job.id),
            title: job.title.clone(),
            company: job.company.clone(),
            description: job.description.clone().unwrap_or_default(),
            required_skills: job.required_skills.clone(),
            experience_required: job.experience_required,
            job_type: job
                .job_type
                .clone()
                .unwrap_or_else(|| DEFAULT_JOB_TYPE.to_string()),
            location: job.location.clone().unwrap_or_default(),
            salary_range: job.salary_range.clone().unwrap_or_default(),
            posted_date: job.posted_date.unwrap_or(today),
        }
    }

    /// Adds a trimmed skill; blanks and exact duplicates are ignored.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.required_skills.iter().any(|s| s == skill) {
            return false;
        }
        self.required_skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, index: usize) -> Option<String> {
        (index < self.required_skills.len()).then(|| self.required_skills.remove(index))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let missing = if self.title.trim().is_empty() {
            Some("Title is required")
        } else if self.company.trim().is_empty() {
            Some("Company is required")
        } else if self.description.trim().is_empty() {
            Some("Description is required")
        } else if self.required_skills.is_empty() {
            Some("At least one required skill is needed")
        } else {
            None
        };

        match missing {
            Some(message) => Err(AppError::Invalid(message.to_string())),
            None => Ok(()),
        }
    }

    pub fn to_request(&self) -> JobRequest {
        JobRequest {
            title: self.title.clone(),
            company: self.company.clone(),
            description: self.description.clone(),
            required_skills: self.required_skills.join(","),
            preferred_skills: None,
            experience_required: self.experience_required,
            job_type: self.job_type.clone(),
            location: self.location.clone(),
            salary_range: self.salary_range.clone(),
            posted_date: self.posted_date,
        }
    }
}

/// Validates the draft, then creates or updates it depending on whether it has an id.
pub async fn save_job(api: &ApiClient, draft: &JobDraft) -> Result<JobPosting, AppError> {
    draft.validate()?;
    let request = draft.to_request();

    let saved = match draft.id {
        Some(id) => api.update_job(id, &request).await?,
        None => api.create_job(&request).await?,
    };
    info!(
        "Job {} {}",
        saved.id,
        if draft.id.is_some() { "updated" } else { "created" }
    );
    Ok(saved)
}
