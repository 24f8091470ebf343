/// API client: the single point of entry for all calls to the CV-matching backend.
///
/// Every endpoint the binary talks to is a method on `ApiClient`; the per-area
/// files (`upload`, `jobs`, `candidates`, `job_matches`, `chatbot`) only add
/// methods. No other module builds requests.
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::upload::ErrorBody;

pub mod candidates;
pub mod chatbot;
pub mod job_matches;
pub mod jobs;
pub mod upload;

#[cfg(test)]
pub mod testing;

pub use upload::{CvUploader, ProgressSink};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, reset…).
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Status {
        status: u16,
        message: String,
        body: Option<ErrorBody>,
    },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Could not read CV file: {0}")]
    File(#[from] std::io::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl ApiError {
    /// HTTP status in the browser convention: 0 when no response arrived.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Network(_) => Some(0),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Decode(_) | ApiError::InvalidUrl(_) | ApiError::File(_) => None,
        }
    }

    /// The parsed error payload of a non-2xx response, if it had one.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

/// HTTP client for the candidates, jobs and job-matches services.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    candidates_url: String,
    jobs_url: String,
    job_matches_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            candidates_url: config.candidates_url.clone(),
            jobs_url: config.jobs_url.clone(),
            job_matches_url: config.job_matches_url.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        decode_json(response).await
    }

    async fn send_json<B, T>(&self, method: Method, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("{method} {url}");
        let response = self.client.request(method, url).json(body).send().await?;
        let response = check_status(response).await?;
        decode_json(response).await
    }

    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        debug!("DELETE {url}");
        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into `ApiError::Status`, keeping whatever error body it had.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    warn!("Backend returned {}: {}", status, text);

    let body = serde_json::from_str::<ErrorBody>(&text).ok();
    let message = body
        .as_ref()
        .and_then(|b| b.message.clone())
        .unwrap_or_else(|| {
            if text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            } else {
                text
            }
        });

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
        body,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
