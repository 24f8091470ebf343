use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// The job fields carried inside a match result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_required: u32,
}

/// A job scored against a candidate. Serialized flat, job fields alongside the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: JobSummary,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    pub match_score: u32,
}

/// A job posting as served by the jobs API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "skills_field")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "skills_field")]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub experience_required: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub posted_date: Option<NaiveDate>,
    /// Filled in client-side from the résumé match endpoint.
    #[serde(skip)]
    pub match_score: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of the admin create/update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    /// Comma separated.
    pub required_skills: String,
    pub preferred_skills: Option<String>,
    pub experience_required: u32,
    pub job_type: String,
    pub location: String,
    pub salary_range: String,
    pub posted_date: NaiveDate,
}

/// Splits a comma separated skill string, dropping blanks.
pub fn split_skills(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parses the backend's text encoding of a skill set, e.g. `{"rust","sql"}` or `rust, sql`.
pub fn parse_skill_text(text: &str) -> Vec<String> {
    let text = text.trim();
    let text = text.strip_prefix('{').unwrap_or(text);
    let text = text.strip_suffix('}').unwrap_or(text);
    split_skills(&text.replace('"', ""))
}

fn skills_field<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSkills {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<RawSkills>::deserialize(deserializer)? {
        Some(RawSkills::List(items)) => items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(RawSkills::Text(text)) => parse_skill_text(&text),
        None => Vec::new(),
    })
}
