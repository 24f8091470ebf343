//! Candidate submission: the form, the selected CV file, and the rules both must pass
//! before anything is sent to the backend.

pub mod skills;
pub mod validation;

use std::fmt;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use validation::validate_submission;

/// Upload limit enforced client-side.
pub const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// The text fields of the upload form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CandidateForm {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    pub phone: String,
    /// Comma separated, as typed.
    pub skills: String,
}

/// Form fields in the order they appear, which is also the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Skills,
    Cv,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Skills,
        Field::Cv,
    ];

    /// Multipart / JSON name of the field.
    pub fn form_name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Skills => "skills",
            Field::Cv => "cv",
        }
    }

    /// Name of the corresponding `CandidateForm` struct field.
    pub fn struct_name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Skills => "skills",
            Field::Cv => "cv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Skills => "Skills",
            Field::Cv => "CV File",
        }
    }

    pub fn from_form_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.form_name() == name)
    }
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

#[derive(Debug, Clone)]
enum CvSource {
    Path(PathBuf),
    Memory(Bytes),
}

/// The résumé selected for upload. Only metadata is read until the upload starts.
#[derive(Debug, Clone)]
pub struct CvFile {
    name: String,
    size: u64,
    source: CvSource,
}

impl CvFile {
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            ));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name,
            size: metadata.len(),
            source: CvSource::Path(path.to_path_buf()),
        })
    }

    #[allow(dead_code)] // for callers that already hold the file in memory
    pub fn from_bytes(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size: content.len() as u64,
            source: CvSource::Memory(content),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Lower-cased text after the last dot, if any.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
    }

    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }

    pub async fn read(&self) -> std::io::Result<Bytes> {
        match &self.source {
            CvSource::Path(path) => Ok(Bytes::from(tokio::fs::read(path).await?)),
            CvSource::Memory(content) => Ok(content.clone()),
        }
    }
}
