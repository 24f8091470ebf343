use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::state::AppState;
use crate::submission::{validate_submission, CandidateForm, CvFile};
use crate::upload::{UploadFlow, UploadState};
use crate::view;

#[derive(Debug, Args)]
pub struct UploadArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    /// 8 to 15 digits
    #[arg(long)]
    pub phone: String,

    /// Comma separated, e.g. "Java, Python"
    #[arg(long)]
    pub skills: String,

    /// PDF, DOC or DOCX, at most 5MB
    #[arg(long)]
    pub cv: PathBuf,
}

impl UploadArgs {
    fn form(&self) -> CandidateForm {
        CandidateForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skills: self.skills.clone(),
        }
    }
}

pub async fn handle_upload(state: &AppState, args: UploadArgs, json: bool) -> Result<(), AppError> {
    let cv = CvFile::open(&args.cv).await?;
    // Errors are reported in form order; the file comes last.
    let form = args.form();
    validate_submission(&form, Some(&cv))?;

    let mut flow = UploadFlow::new(
        state.api.clone(),
        state.matcher.clone(),
        state.config.navigation_delay,
    );
    flow.select_file(cv)?;

    let mut states = flow.subscribe();
    let reporter = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let current = states.borrow_and_update().clone();
            if let UploadState::Submitting { progress } = current {
                eprint!("\rUploading... {progress}%");
            }
        }
    });

    if let Some(cv) = flow.selected_file() {
        info!("Submitting {} ({} bytes)", cv.name(), cv.size());
    }
    let submitted = flow.submit(&form).await;
    reporter.abort();
    eprintln!();
    debug!("Upload flow finished in state {:?}", flow.state());
    let navigation = submitted?;

    eprintln!("Upload successful! Redirecting to results...");
    debug!(
        "Results for candidate {} ready in {:?}",
        navigation.handoff().candidate_id,
        state.config.navigation_delay
    );
    let handoff = navigation.arrive().await;
    info!("Showing results for candidate {}", handoff.candidate_id);

    if json {
        crate::commands::print_json(&handoff)
    } else {
        print!("{}", view::results(&handoff));
        Ok(())
    }
}
