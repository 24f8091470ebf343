use serde::{Deserialize, Deserializer, Serialize};

/// A persisted candidate/job match record (admin view).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminJobMatch {
    pub id: i64,
    /// The backend keys candidates by email here.
    pub candidate_id: String,
    pub job_id: i64,
    pub match_percentage: f64,
    /// Kept verbatim; the backend's timestamp format is not pinned down.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A score for one posting against an uploaded résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMatch {
    pub job_id: i64,
    /// Sent as a float by some backends; rounded to a whole percentage.
    #[serde(deserialize_with = "rounded_score")]
    pub match_score: u32,
}

fn rounded_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let score = f64::deserialize(deserializer)?;
    Ok(score.round().clamp(0.0, 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fractional_resume_score_is_rounded() {
        let scores: Vec<ResumeMatch> = serde_json::from_value(json!([
            {"job_id": 1, "match_score": 72.6},
            {"job_id": 2, "match_score": 40},
            {"job_id": 3, "match_score": 49.4}
        ]))
        .unwrap();
        let rounded: Vec<u32> = scores.iter().map(|s| s.match_score).collect();
        assert_eq!(rounded, vec![73, 40, 49]);
    }
}
