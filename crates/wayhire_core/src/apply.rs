//! Local-only application form and its field validation.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::JobId;

pub const RESUME_CONTENT_TYPE: &str = "application/pdf";
pub const MAX_RESUME_BYTES: u64 = 200 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApplyField {
    Name,
    Email,
    Linkedin,
    Resume,
}

/// Metadata of the file attached as a resume. The contents never leave the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyInput {
    Name(String),
    Email(String),
    Linkedin(String),
    Resume(Option<ResumeFile>),
}

pub type FieldErrors = BTreeMap<ApplyField, &'static str>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyForm {
    job_id: JobId,
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub resume: Option<ResumeFile>,
    errors: FieldErrors,
}

impl ApplyForm {
    pub fn new(job_id: impl Into<JobId>) -> Self {
        Self {
            job_id: job_id.into(),
            name: String::new(),
            email: String::new(),
            linkedin: String::new(),
            resume: None,
            errors: FieldErrors::new(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set(&mut self, input: ApplyInput) {
        match input {
            ApplyInput::Name(name) => self.name = name,
            ApplyInput::Email(email) => self.email = email,
            ApplyInput::Linkedin(linkedin) => self.linkedin = linkedin,
            ApplyInput::Resume(resume) => self.resume = resume,
        }
    }

    /// Validates every field and records the field errors on the form.
    pub fn submit(&mut self) -> Result<(), FieldErrors> {
        self.errors = self.validate();
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.clone())
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ApplyField::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert(ApplyField::Email, "Email is required");
        } else if !looks_like_email(&self.email) {
            errors.insert(ApplyField::Email, "Email is invalid");
        }

        if self.linkedin.trim().is_empty() {
            errors.insert(ApplyField::Linkedin, "LinkedIn URL is required");
        } else if !looks_like_http_url(&self.linkedin) {
            errors.insert(ApplyField::Linkedin, "LinkedIn URL is invalid");
        }

        match &self.resume {
            None => {
                errors.insert(ApplyField::Resume, "Resume is required");
            }
            Some(file) if !file.content_type.eq_ignore_ascii_case(RESUME_CONTENT_TYPE) => {
                errors.insert(ApplyField::Resume, "Only PDF files are allowed.");
            }
            Some(file) if file.size_bytes > MAX_RESUME_BYTES => {
                errors.insert(ApplyField::Resume, "File size cannot exceed 200KB.");
            }
            Some(_) => {}
        }

        errors
    }
}

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));
static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s$.?#].[^\s]*$").expect("url pattern"));

fn looks_like_email(raw: &str) -> bool {
    EMAIL.is_match(raw)
}

/// http(s) scheme, a host that does not open with `.`, `?`, `#` or `$`, no whitespace.
fn looks_like_http_url(raw: &str) -> bool {
    HTTP_URL.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("  ada@mail.example.org "));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@.com"));
        assert!(!looks_like_email("ada.example.com"));
    }

    #[test]
    fn url_shapes() {
        assert!(looks_like_http_url("https://www.linkedin.com/in/ada"));
        assert!(looks_like_http_url("http://linkedin.com"));
        assert!(!looks_like_http_url("linkedin.com/in/ada"));
        assert!(!looks_like_http_url("ftp://linkedin.com"));
        assert!(!looks_like_http_url("https://linked in.com"));
        assert!(!looks_like_http_url("https://.com"));
        assert!(!looks_like_http_url("https://?q=1"));
        assert!(!looks_like_http_url("https://"));
        assert!(looks_like_http_url("http://localhost:99999"));
        assert!(!looks_like_http_url("HTTPS://linkedin.com"));
    }
}
