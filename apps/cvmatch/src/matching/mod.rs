//! Client-side job matching, used when the backend returns no match data.
//!
//! `AppState` carries an `Arc<dyn JobMatcher>`; the default is `FallbackMatcher`
//! over the built-in catalog.

pub mod fallback;

use crate::models::job::MatchResult;

pub use fallback::FallbackMatcher;

/// Scores jobs for a candidate. Implementations must be pure: the same inputs
/// always yield the same answer.
pub trait JobMatcher: Send + Sync {
    /// Jobs worth showing, in the matcher's own order.
    fn rank(&self, skills: &[String], experience: u32) -> Vec<MatchResult>;

    /// The highest score wins; ties go to the job ranked first.
    fn best_match(&self, skills: &[String], experience: u32) -> Option<MatchResult> {
        self.rank(skills, experience)
            .into_iter()
            .reduce(|best, current| {
                if current.match_score > best.match_score {
                    current
                } else {
                    best
                }
            })
    }
}
