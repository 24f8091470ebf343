//! Interprets a successful upload reply into the payload handed to the results view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::matching::JobMatcher;
use crate::models::job::MatchResult;
use crate::models::upload::UploadResponse;
use crate::submission::skills::{clean_skills, form_skills};
use crate::submission::CandidateForm;
use crate::upload::UploadFailure;

/// Where the listed matches came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Server,
    Client,
}

/// Transient results state; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsHandoff {
    pub candidate_id: i64,
    pub jobs: Vec<MatchResult>,
    pub top_match: Option<MatchResult>,
    pub skills: Vec<String>,
    pub experience: u32,
    pub match_date: DateTime<Utc>,
    pub source: MatchSource,
}

pub fn interpret_response(
    response: UploadResponse,
    form: &CandidateForm,
    matcher: &dyn JobMatcher,
    match_date: DateTime<Utc>,
) -> Result<ResultsHandoff, UploadFailure> {
    if !response.success {
        return Err(UploadFailure::rejected(&response.error));
    }
    let candidate_id = response.candidate_id.ok_or_else(UploadFailure::incomplete)?;

    let skills = match &response.skills {
        Some(skills) => clean_skills(skills),
        None => clean_skills(&form_skills(&form.skills)),
    };
    let experience = response.experience.unwrap_or(0);

    let server_jobs = response.job_matches.filter(|jobs| !jobs.is_empty());

    let (jobs, top_match, source) = match server_jobs {
        Some(jobs) => {
            let top_match = response
                .top_match
                .or_else(|| matcher.best_match(&skills, experience));
            (jobs, top_match, MatchSource::Server)
        }
        None => match matcher.best_match(&skills, experience) {
            Some(best) => (vec![best.clone()], Some(best), MatchSource::Client),
            None => (Vec::new(), response.top_match, MatchSource::Client),
        },
    };

    Ok(ResultsHandoff {
        candidate_id,
        jobs,
        top_match,
        skills,
        experience,
        match_date,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::FallbackMatcher;
    use crate::models::job::JobSummary;
    use crate::upload::failure::{FailureKind, INCOMPLETE_MESSAGE};

    fn form(skills: &str) -> CandidateForm {
        CandidateForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0612345678".to_string(),
            skills: skills.to_string(),
        }
    }

    fn server_match(id: i64, score: u32) -> MatchResult {
        MatchResult {
            job: JobSummary {
                id,
                title: format!("Job {id}"),
                company: "Backend Co".to_string(),
                required_skills: vec!["rust".to_string()],
                experience_required: 0,
            },
            matching_skills: vec!["rust".to_string()],
            match_score: score,
        }
    }

    fn success(candidate_id: i64) -> UploadResponse {
        UploadResponse {
            success: true,
            candidate_id: Some(candidate_id),
            ..Default::default()
        }
    }

    #[test]
    fn test_server_matches_are_used_verbatim() {
        let response = UploadResponse {
            skills: Some(vec!["Rust".to_string(), "rust ".to_string()]),
            experience: Some(5),
            job_matches: Some(vec![server_match(10, 90), server_match(11, 70)]),
            top_match: Some(server_match(10, 90)),
            ..success(3)
        };
        let handoff =
            interpret_response(response, &form("Go"), &FallbackMatcher::default(), Utc::now())
                .unwrap();
        assert_eq!(handoff.source, MatchSource::Server);
        assert_eq!(handoff.jobs.len(), 2);
        assert_eq!(handoff.top_match.unwrap().job.id, 10);
        assert_eq!(handoff.skills, vec!["rust"]);
        assert_eq!(handoff.experience, 5);
    }

    #[test]
    fn test_server_matches_without_top_match_fall_back_for_top() {
        let response = UploadResponse {
            skills: Some(vec!["python".to_string(), "java".to_string()]),
            experience: Some(3),
            job_matches: Some(vec![server_match(10, 90)]),
            ..success(3)
        };
        let handoff =
            interpret_response(response, &form("x"), &FallbackMatcher::default(), Utc::now())
                .unwrap();
        assert_eq!(handoff.source, MatchSource::Server);
        assert_eq!(handoff.jobs[0].job.id, 10);
        assert_eq!(handoff.top_match.unwrap().job.id, 1);
    }

    #[test]
    fn test_no_server_matches_uses_fallback_for_list_and_top() {
        let response = UploadResponse {
            skills: Some(vec!["Python".to_string(), "Java".to_string()]),
            experience: Some(3),
            job_matches: Some(vec![]),
            ..success(8)
        };
        let handoff =
            interpret_response(response, &form("x"), &FallbackMatcher::default(), Utc::now())
                .unwrap();
        assert_eq!(handoff.source, MatchSource::Client);
        assert_eq!(handoff.jobs.len(), 1);
        assert_eq!(handoff.jobs[0].job.title, "Software Developer");
        assert_eq!(handoff.top_match.as_ref(), handoff.jobs.first());
    }

    #[test]
    fn test_form_skills_used_when_server_sends_none() {
        let handoff = interpret_response(
            success(4),
            &form("SQL, Data Analysis,  Python "),
            &FallbackMatcher::default(),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(handoff.skills, vec!["sql", "data analysis", "python"]);
        assert_eq!(handoff.experience, 0);
        // 3/3 coverage, no bonus (0 < 1)
        assert_eq!(handoff.top_match.unwrap().match_score, 100);
    }

    #[test]
    fn test_nothing_matches_leaves_empty_list() {
        let handoff = interpret_response(
            success(4),
            &form("sql"),
            &FallbackMatcher::default(),
            Utc::now(),
        )
        .unwrap();
        assert!(handoff.jobs.is_empty());
        assert!(handoff.top_match.is_none());
        assert_eq!(handoff.source, MatchSource::Client);
    }

    #[test]
    fn test_missing_candidate_id_is_a_failure() {
        let response = UploadResponse {
            success: true,
            ..Default::default()
        };
        let failure =
            interpret_response(response, &form("x"), &FallbackMatcher::default(), Utc::now())
                .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Incomplete);
        assert_eq!(failure.message, INCOMPLETE_MESSAGE);
    }

    #[test]
    fn test_success_false_is_a_failure() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"success": false, "errors": {"email": ["invalid"]}}"#)
                .unwrap();
        let failure =
            interpret_response(response, &form("x"), &FallbackMatcher::default(), Utc::now())
                .unwrap_err();
        assert_eq!(failure.message, "Email: invalid");
    }

    #[test]
    fn test_handoff_serializes_like_navigation_state() {
        let handoff = interpret_response(
            success(4),
            &form("python, java"),
            &FallbackMatcher::default(),
            Utc::now(),
        )
        .unwrap();
        let value = serde_json::to_value(&handoff).unwrap();
        assert_eq!(value["candidateId"], 4);
        assert_eq!(value["source"], "client");
        assert_eq!(value["topMatch"]["title"], "Software Developer");
        assert!(value["matchDate"].is_string());
    }
}
