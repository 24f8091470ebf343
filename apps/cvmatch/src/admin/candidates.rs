use crate::models::candidate::AdminCandidate;

/// Case-insensitive filter over the candidate table.
/// `term` matches full name, email or phone; `skill` matches any listed skill.
pub fn filter_candidates<'a>(
    candidates: &'a [AdminCandidate],
    term: &str,
    skill: &str,
) -> Vec<&'a AdminCandidate> {
    let term = term.trim().to_lowercase();
    let skill = skill.trim().to_lowercase();

    candidates
        .iter()
        .filter(|c| term.is_empty() || matches_term(c, &term))
        .filter(|c| {
            skill.is_empty()
                || c
                    .skill_list()
                    .iter()
                    .any(|s| s.to_lowercase().contains(&skill))
        })
        .collect()
}

fn matches_term(candidate: &AdminCandidate, term: &str) -> bool {
    candidate.full_name().to_lowercase().contains(term)
        || candidate.email.to_lowercase().contains(term)
        || candidate
            .phone
            .as_deref()
            .is_some_and(|phone| phone.contains(term))
}
