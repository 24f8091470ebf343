use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalises a skill list: lower-cased, whitespace collapsed, blanks and duplicates dropped.
/// First occurrence wins, so the order of the input is kept.
pub fn clean_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = WHITESPACE_RE
            .replace_all(&skill.as_ref().to_lowercase(), " ")
            .trim()
            .to_string();
        if !skill.is_empty() && !cleaned.contains(&skill) {
            cleaned.push(skill);
        }
    }
    cleaned
}

/// Skills as typed in the form: split on commas, trimmed, blanks dropped.
pub fn form_skills(raw: &str) -> Vec<String> {
    crate::models::job::split_skills(raw)
}
