//! Fallback matcher: substring skill overlap plus an experience bonus against a
//! small static catalog.
//!
//! Algorithm, per job:
//! 1. matching = required skills contained (case-insensitively) in some candidate skill
//! 2. score = min(100, matching / required × 100 + (experience ≥ required ? 20 : 0)), rounded
//! 3. scores ≤ 40 are discarded; the highest survivor wins, ties go to the earlier job

use crate::matching::JobMatcher;
use crate::models::job::{JobSummary, MatchResult};

pub const EXPERIENCE_BONUS: f64 = 20.0;
/// Scores at or below this are not worth showing.
pub const MIN_SCORE: u32 = 40;

pub struct FallbackMatcher {
    catalog: Vec<JobSummary>,
}

impl FallbackMatcher {
    pub fn new(catalog: Vec<JobSummary>) -> Self {
        Self { catalog }
    }
}

impl Default for FallbackMatcher {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl JobMatcher for FallbackMatcher {
    /// Scores every catalog job, keeping the ones above the threshold, in catalog order.
    fn rank(&self, skills: &[String], experience: u32) -> Vec<MatchResult> {
        let skills: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        self.catalog
            .iter()
            .filter_map(|job| score_job(job, &skills, experience))
            .filter(|m| m.match_score > MIN_SCORE)
            .collect()
    }
}

/// The built-in jobs the fallback scores against.
pub fn default_catalog() -> Vec<JobSummary> {
    vec![
        JobSummary {
            id: 1,
            title: "Software Developer".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            required_skills: vec![
                "python".to_string(),
                "java".to_string(),
                "javascript".to_string(),
            ],
            experience_required: 2,
        },
        JobSummary {
            id: 2,
            title: "Data Analyst".to_string(),
            company: "Data Insights LLC".to_string(),
            required_skills: vec![
                "python".to_string(),
                "sql".to_string(),
                "data analysis".to_string(),
            ],
            experience_required: 1,
        },
    ]
}

/// `skills` must already be lower-cased. Jobs without required skills cannot be scored.
fn score_job(job: &JobSummary, skills: &[String], experience: u32) -> Option<MatchResult> {
    if job.required_skills.is_empty() {
        return None;
    }

    let matching_skills: Vec<String> = job
        .required_skills
        .iter()
        .filter(|required| {
            let required = required.to_lowercase();
            skills.iter().any(|skill| skill.contains(&required))
        })
        .cloned()
        .collect();

    let coverage = matching_skills.len() as f64 / job.required_skills.len() as f64 * 100.0;
    let bonus = if experience >= job.experience_required {
        EXPERIENCE_BONUS
    } else {
        0.0
    };
    let match_score = (coverage + bonus).min(100.0).round() as u32;

    Some(MatchResult {
        job: job.clone(),
        matching_skills,
        match_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_java_picks_software_developer() {
        let matcher = FallbackMatcher::default();
        let best = matcher.best_match(&skills(&["python", "java"]), 3).unwrap();
        assert_eq!(best.job.id, 1);
        assert_eq!(best.job.title, "Software Developer");
        assert_eq!(best.matching_skills, vec!["python", "java"]);
        // 2/3 coverage plus the experience bonus
        assert_eq!(best.match_score, 87);
    }

    #[test]
    fn test_sql_alone_is_below_threshold() {
        let matcher = FallbackMatcher::default();
        assert!(matcher.rank(&skills(&["sql"]), 0).is_empty());
        assert!(matcher.best_match(&skills(&["sql"]), 0).is_none());
    }

    #[test]
    fn test_substring_match_counts() {
        let matcher = FallbackMatcher::default();
        let ranked = matcher.rank(&skills(&["advanced data analysis", "postgresql", "python3"]), 0);
        let analyst = ranked.iter().find(|m| m.job.id == 2).unwrap();
        assert_eq!(analyst.matching_skills, vec!["python", "sql", "data analysis"]);
        assert_eq!(analyst.match_score, 100);
    }

    #[test]
    fn test_score_capped_at_100() {
        let matcher = FallbackMatcher::default();
        let best = matcher
            .best_match(&skills(&["python", "java", "javascript"]), 10)
            .unwrap();
        assert_eq!(best.match_score, 100);
    }

    #[test]
    fn test_candidate_skills_compared_case_insensitively() {
        let matcher = FallbackMatcher::default();
        let best = matcher.best_match(&skills(&["PYTHON", "Java"]), 3).unwrap();
        assert_eq!(best.matching_skills, vec!["python", "java"]);
    }

    #[test]
    fn test_tie_goes_to_first_catalog_entry() {
        // python only: 33 + 20 for both jobs → 53 each
        let matcher = FallbackMatcher::default();
        let ranked = matcher.rank(&skills(&["python"]), 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].match_score, ranked[1].match_score);
        assert_eq!(matcher.best_match(&skills(&["python"]), 5).unwrap().job.id, 1);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let catalog = vec![JobSummary {
            id: 9,
            title: "Edge".to_string(),
            company: "Boundary Co".to_string(),
            required_skills: skills(&["a", "b", "c", "d", "e"]),
            experience_required: 50,
        }];
        let matcher = FallbackMatcher::new(catalog);
        // 2/5 → exactly 40, discarded
        assert!(matcher.best_match(&skills(&["a", "b"]), 0).is_none());
        // 3/5 → 60, kept
        assert_eq!(matcher.best_match(&skills(&["a", "b", "c"]), 0).unwrap().match_score, 60);
    }

    #[test]
    fn test_experience_below_requirement_gets_no_bonus() {
        let matcher = FallbackMatcher::default();
        let ranked = matcher.rank(&skills(&["python", "java", "javascript"]), 1);
        let developer = ranked.iter().find(|m| m.job.id == 1).unwrap();
        assert_eq!(developer.match_score, 100);
        let analyst = ranked.iter().find(|m| m.job.id == 2);
        // 33 + 20 (1 ≥ 1)
        assert_eq!(analyst.unwrap().match_score, 53);
    }

    #[test]
    fn test_deterministic() {
        let matcher = FallbackMatcher::default();
        let input = skills(&["python", "sql"]);
        let first = matcher.best_match(&input, 2);
        for _ in 0..10 {
            assert_eq!(matcher.best_match(&input, 2), first);
        }
    }

    #[test]
    fn test_empty_skills_no_match() {
        // experience bonus alone (20) never clears the threshold
        assert!(FallbackMatcher::default().best_match(&[], 10).is_none());
    }
}
