use thiserror::Error;

use crate::api_client::ApiError;
use crate::submission::FieldError;
use crate::upload::UploadFailure;

/// Application-level error type.
/// `user_message` is what the terminal shows; details go to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(FieldError),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Upload failed: {0}")]
    Upload(UploadFailure),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Validation(err)
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::Invalid(_) => "VALIDATION_ERROR",
            AppError::Forbidden => "FORBIDDEN",
            AppError::Upload(_) => "UPLOAD_FAILED",
            AppError::Api(ApiError::Network(_)) => "NETWORK_ERROR",
            AppError::Api(_) => "API_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Invalid(msg) => msg.clone(),
            AppError::Forbidden => "Access denied: admin commands are disabled".to_string(),
            AppError::Upload(failure) => failure.message.clone(),
            AppError::Api(ApiError::Network(detail)) => {
                tracing::error!("Network error: {detail}");
                "Could not reach the server. Please check your internet connection.".to_string()
            }
            AppError::Api(ApiError::Status {
                status, message, ..
            }) => {
                tracing::error!("Backend error {status}: {message}");
                if *status >= 500 {
                    "Server error. Please try again later.".to_string()
                } else {
                    message.clone()
                }
            }
            AppError::Api(err) => {
                tracing::error!("API error: {err}");
                "The server sent an unexpected response.".to_string()
            }
            AppError::Io(err) => err.to_string(),
        }
    }

    /// Process exit status for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::Invalid(_) => 2,
            AppError::Forbidden => 3,
            _ => 1,
        }
    }
}
