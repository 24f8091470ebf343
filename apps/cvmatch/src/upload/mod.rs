//! The CV upload flow: validate → submit with progress → interpret → hand off to results.
//!
//! States: `Idle → Validating → Submitting(progress) → Success | Failed`.
//! A validation failure drops back to `Idle` with the field error recorded.
//! `Failed` is left by submitting again; there is no automatic retry.

pub mod failure;
pub mod outcome;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::api_client::{CvUploader, ProgressSink};
use crate::errors::AppError;
use crate::matching::JobMatcher;
use crate::submission::validation::validate_cv;
use crate::submission::{validate_submission, CandidateForm, CvFile, Field, FieldError};

pub use failure::UploadFailure;
pub use outcome::{interpret_response, MatchSource, ResultsHandoff};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Validating,
    Submitting { progress: u8 },
    Success { candidate_id: i64 },
    Failed(UploadFailure),
}

/// Results waiting to be shown once the completion pause has elapsed.
#[derive(Debug)]
pub struct Navigation {
    handoff: ResultsHandoff,
    deadline: Instant,
}

impl Navigation {
    fn schedule(handoff: ResultsHandoff, delay: Duration) -> Self {
        Self {
            handoff,
            deadline: Instant::now() + delay,
        }
    }

    pub fn handoff(&self) -> &ResultsHandoff {
        &self.handoff
    }

    /// Waits out the pause, then yields the payload for the results view.
    pub async fn arrive(self) -> ResultsHandoff {
        tokio::time::sleep_until(self.deadline).await;
        self.handoff
    }
}

pub struct UploadFlow {
    uploader: Arc<dyn CvUploader>,
    matcher: Arc<dyn JobMatcher>,
    navigation_delay: Duration,
    state: Arc<watch::Sender<UploadState>>,
    cv: Option<CvFile>,
    field_error: Option<FieldError>,
}

impl UploadFlow {
    pub fn new(
        uploader: Arc<dyn CvUploader>,
        matcher: Arc<dyn JobMatcher>,
        navigation_delay: Duration,
    ) -> Self {
        let (state, _) = watch::channel(UploadState::Idle);
        Self {
            uploader,
            matcher,
            navigation_delay,
            state: Arc::new(state),
            cv: None,
            field_error: None,
        }
    }

    /// Observe state changes, including upload progress.
    pub fn subscribe(&self) -> watch::Receiver<UploadState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    /// The message to show next to the offending input, if any.
    #[allow(dead_code)] // read by interactive front-ends; the CLI reports the returned error
    pub fn field_error(&self) -> Option<&FieldError> {
        self.field_error.as_ref()
    }

    pub fn selected_file(&self) -> Option<&CvFile> {
        self.cv.as_ref()
    }

    /// Accepts a file only if its type and size are allowed; a rejected file leaves
    /// the previous selection in place.
    pub fn select_file(&mut self, cv: CvFile) -> Result<(), FieldError> {
        match validate_cv(Some(&cv)) {
            Ok(()) => {
                debug!("Selected {} ({} bytes)", cv.name(), cv.size());
                self.cv = Some(cv);
                self.field_error = None;
                Ok(())
            }
            Err(err) => {
                self.field_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn remove_file(&mut self) {
        self.cv = None;
        self.field_error = None;
    }

    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.remove_file();
        self.set(UploadState::Idle);
    }

    /// Runs one submission. On success the returned `Navigation` carries the results.
    pub async fn submit(&mut self, form: &CandidateForm) -> Result<Navigation, AppError> {
        self.field_error = None;
        self.set(UploadState::Validating);

        if let Err(err) = validate_submission(form, self.cv.as_ref()) {
            debug!("Submission rejected: {err}");
            self.field_error = Some(err.clone());
            self.set(UploadState::Idle);
            return Err(AppError::Validation(err));
        }
        let cv = self
            .cv
            .clone()
            .ok_or_else(|| FieldError::new(Field::Cv, "Please upload your CV"))?;

        self.set(UploadState::Submitting { progress: 0 });
        let state = self.state.clone();
        let progress: ProgressSink = Arc::new(move |progress| {
            debug!("Upload progress: {progress}%");
            state.send_replace(UploadState::Submitting { progress });
        });

        let response = match self.uploader.upload_cv(form, &cv, progress).await {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    "Upload of {} failed (status {:?}): {err}",
                    cv.name(),
                    err.status_code()
                );
                return Err(self.fail(UploadFailure::from_api_error(&err)));
            }
        };

        match interpret_response(response, form, self.matcher.as_ref(), Utc::now()) {
            Ok(handoff) => {
                info!(
                    "Candidate {} uploaded; {} job(s) from {:?}",
                    handoff.candidate_id,
                    handoff.jobs.len(),
                    handoff.source
                );
                self.set(UploadState::Success {
                    candidate_id: handoff.candidate_id,
                });
                Ok(Navigation::schedule(handoff, self.navigation_delay))
            }
            Err(failure) => Err(self.fail(failure)),
        }
    }

    fn fail(&mut self, failure: UploadFailure) -> AppError {
        error!("Upload error: {}", failure.message);
        if failure.clears_file() {
            self.cv = None;
        }
        self.set(UploadState::Failed(failure.clone()));
        AppError::Upload(failure)
    }

    fn set(&self, state: UploadState) {
        self.state.send_replace(state);
    }
}
