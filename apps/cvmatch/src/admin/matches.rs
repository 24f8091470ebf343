use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::candidate::AdminCandidate;
use crate::models::job::JobPosting;
use crate::models::job_match::AdminJobMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Match records joined with the job and candidate tables they point at.
pub struct MatchTable<'a> {
    jobs: HashMap<i64, &'a JobPosting>,
    candidates: HashMap<&'a str, &'a AdminCandidate>,
}

impl<'a> MatchTable<'a> {
    pub fn new(jobs: &'a [JobPosting], candidates: &'a [AdminCandidate]) -> Self {
        Self {
            jobs: jobs.iter().map(|j| (j.id, j)).collect(),
            // Match records reference candidates by email.
            candidates: candidates.iter().map(|c| (c.email.as_str(), c)).collect(),
        }
    }

    pub fn job(&self, record: &AdminJobMatch) -> Option<&'a JobPosting> {
        self.jobs.get(&record.job_id).copied()
    }

    pub fn candidate(&self, record: &AdminJobMatch) -> Option<&'a AdminCandidate> {
        self.candidates.get(record.candidate_id.as_str()).copied()
    }

    /// Filters case-insensitively and sorts by match percentage.
    pub fn filter<'m>(
        &self,
        matches: &'m [AdminJobMatch],
        term: &str,
        company: &str,
        direction: SortDirection,
    ) -> Vec<&'m AdminJobMatch> {
        let term = term.trim().to_lowercase();
        let company = company.trim().to_lowercase();

        let mut found: Vec<&AdminJobMatch> = matches
            .iter()
            .filter(|m| term.is_empty() || self.matches_term(m, &term))
            .filter(|m| {
                company.is_empty()
                    || self
                        .job(m)
                        .is_some_and(|job| job.company.to_lowercase().contains(&company))
            })
            .collect();

        found.sort_by(|a, b| {
            let order = a
                .match_percentage
                .partial_cmp(&b.match_percentage)
                .unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => order,
                SortDirection::Desc => order.reverse(),
            }
        });
        found
    }

    fn matches_term(&self, record: &AdminJobMatch, term: &str) -> bool {
        let candidate_hit = match self.candidate(record) {
            Some(c) => {
                c.full_name().to_lowercase().contains(term)
                    || c.email.to_lowercase().contains(term)
            }
            None => record.candidate_id.to_lowercase().contains(term),
        };
        candidate_hit
            || self
                .job(record)
                .is_some_and(|job| job.title.to_lowercase().contains(term))
    }
}
