use reqwest::{Method, Url};

use crate::api_client::{ApiClient, ApiError};
use crate::models::job::{JobPosting, JobRequest, JobsResponse};
use crate::models::job_match::ResumeMatch;

impl ApiClient {
    /// GET {jobs}
    pub async fn list_jobs(&self) -> Result<JobsResponse, ApiError> {
        self.get_json(&self.jobs_url).await
    }

    /// GET {jobs}/matches/{resume_id}, with the id as a single encoded path segment.
    pub async fn resume_matches(&self, resume_id: &str) -> Result<Vec<ResumeMatch>, ApiError> {
        let mut url = Url::parse(&self.jobs_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.jobs_url)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.jobs_url.clone()))?
            .push("matches")
            .push(resume_id);
        self.get_json(url.as_str()).await
    }

    /// POST {jobs}
    pub async fn create_job(&self, job: &JobRequest) -> Result<JobPosting, ApiError> {
        self.send_json(Method::POST, &self.jobs_url, job).await
    }

    /// PUT {jobs}/{id}
    pub async fn update_job(&self, id: i64, job: &JobRequest) -> Result<JobPosting, ApiError> {
        self.send_json(Method::PUT, &format!("{}/{}", self.jobs_url, id), job)
            .await
    }

    /// DELETE {jobs}/{id}
    pub async fn delete_job(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", self.jobs_url, id)).await
    }
}
