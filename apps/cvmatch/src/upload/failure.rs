//! Turns upload errors into the single human-readable message shown to the user.

use std::fmt;

use crate::api_client::ApiError;
use crate::models::upload::ErrorBody;
use crate::submission::Field;

pub const NETWORK_MESSAGE: &str = "Network error. Please check your internet connection.";
pub const SERVER_MESSAGE: &str = "Server error. Please try again later.";
pub const CV_ANALYSIS_MESSAGE: &str =
    "CV analysis failed. Please try a different file or contact support.";
pub const REJECTED_MESSAGE: &str = "Upload failed. Please try again.";
pub const GENERIC_MESSAGE: &str = "Failed to upload CV";
pub const INCOMPLETE_MESSAGE: &str = "Server response incomplete - missing candidate ID";

/// Marker the backend puts in 5xx messages when résumé analysis broke.
const AI_PROCESSING_MARKER: &str = "AI processing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response at all (status 0).
    Network,
    /// 422, or a 2xx body with `success: false`.
    ServerValidation,
    ServerFault,
    CvAnalysis,
    /// 2xx, `success: true`, but no candidate id.
    Incomplete,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for UploadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl UploadFailure {
    fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn from_api_error(err: &ApiError) -> Self {
        match err {
            ApiError::Network(_) => Self::new(FailureKind::Network, NETWORK_MESSAGE),
            ApiError::Status { status: 422, body, .. } => Self::new(
                FailureKind::ServerValidation,
                format_error_body(body.as_ref()),
            ),
            ApiError::Status {
                status, message, ..
            } if *status >= 500 => {
                if message.contains(AI_PROCESSING_MARKER) {
                    Self::new(FailureKind::CvAnalysis, CV_ANALYSIS_MESSAGE)
                } else {
                    Self::new(FailureKind::ServerFault, SERVER_MESSAGE)
                }
            }
            ApiError::Status { .. } => Self::new(
                FailureKind::Other,
                err.body()
                    .and_then(|b| b.message.clone())
                    .unwrap_or_else(|| GENERIC_MESSAGE.to_string()),
            ),
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => {
                Self::new(FailureKind::Other, GENERIC_MESSAGE)
            }
            ApiError::File(e) => Self::new(FailureKind::Other, format!("Could not read CV file: {e}")),
        }
    }

    /// A 2xx reply whose body says `success: false`.
    pub fn rejected(body: &ErrorBody) -> Self {
        Self::new(FailureKind::ServerValidation, format_error_body(Some(body)))
    }

    pub fn incomplete() -> Self {
        Self::new(FailureKind::Incomplete, INCOMPLETE_MESSAGE)
    }

    /// Server-side breakage forces the user to pick the file again.
    pub fn clears_file(&self) -> bool {
        matches!(self.kind, FailureKind::ServerFault | FailureKind::CvAnalysis)
    }
}

/// `"<Label>: m1, m2; <Label>: m3"` from field errors, else the body message.
pub fn format_error_body(body: Option<&ErrorBody>) -> String {
    let Some(body) = body else {
        return REJECTED_MESSAGE.to_string();
    };

    if let Some(errors) = &body.errors {
        return errors
            .entries()
            .into_iter()
            .map(|(field, messages)| format!("{}: {}", field_label(&field), messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");
    }

    body.message
        .clone()
        .unwrap_or_else(|| REJECTED_MESSAGE.to_string())
}

/// Display label for a server field name; unknown names are shown as-is.
pub fn field_label(field: &str) -> &str {
    Field::from_form_name(field)
        .map(Field::label)
        .unwrap_or(field)
}
