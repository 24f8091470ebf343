use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationErrors};

use crate::submission::{
    skills::form_skills, CandidateForm, CvFile, Field, FieldError, ACCEPTED_EXTENSIONS,
    MAX_CV_BYTES,
};

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,15}$").expect("valid regex"));
static SKILLS_DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9, ]").expect("valid regex"));

pub const SKILLS_FORMAT_MESSAGE: &str = r#"Use commas to separate skills (e.g. "Java, Python")"#;

/// Checks the form and the selected file, returning the first failing field in form order.
pub fn validate_submission(form: &CandidateForm, cv: Option<&CvFile>) -> Result<(), FieldError> {
    if let Err(errors) = form.validate() {
        for field in [Field::FirstName, Field::LastName, Field::Email] {
            if let Some(message) = first_message(&errors, field) {
                return Err(FieldError::new(field, message));
            }
        }
    }

    validate_phone(&form.phone)?;
    validate_skills(&form.skills)?;
    validate_cv(cv)
}

pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(FieldError::new(
            Field::Phone,
            "Phone number must be 8 to 15 digits",
        ))
    }
}

pub fn validate_skills(skills: &str) -> Result<(), FieldError> {
    if skills.trim().is_empty() {
        return Err(FieldError::new(Field::Skills, "Please list at least one skill"));
    }
    if SKILLS_DISALLOWED_RE.is_match(skills) {
        return Err(FieldError::new(Field::Skills, SKILLS_FORMAT_MESSAGE));
    }
    if form_skills(skills).is_empty() {
        return Err(FieldError::new(Field::Skills, "Please list at least one skill"));
    }
    Ok(())
}

pub fn validate_cv(cv: Option<&CvFile>) -> Result<(), FieldError> {
    let cv = cv.ok_or_else(|| FieldError::new(Field::Cv, "Please upload your CV"))?;

    let accepted = cv
        .extension()
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));
    if !accepted {
        return Err(FieldError::new(
            Field::Cv,
            "Only PDF, DOC, and DOCX files are accepted",
        ));
    }

    if cv.size() > MAX_CV_BYTES {
        return Err(FieldError::new(
            Field::Cv,
            format!("File size exceeds {}MB limit", MAX_CV_BYTES / 1024 / 1024),
        ));
    }

    Ok(())
}

fn first_message(errors: &ValidationErrors, field: Field) -> Option<String> {
    errors.field_errors().into_iter().find_map(|(name, field_errors)| {
        let name: &str = name.as_ref();
        if name != field.struct_name() {
            return None;
        }
        let message = field_errors
            .first()
            .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| format!("{} is invalid", field.label()));
        Some(message)
    })
}
