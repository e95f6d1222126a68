use chrono::{DateTime, Utc};

use crate::{ApplyField, FilterTag, JobId, ListingPhase};

pub const EMPTY_FAILED: &str = "Failed to load jobs.";
pub const EMPTY_NO_JOBS: &str = "No jobs found.";
pub const EMPTY_FILTERED: &str = "No jobs match the selected filters.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_input: String,
    pub query: String,
    pub phase: ListingPhase,
    pub page: u32,
    pub has_more: bool,
    /// Jobs held by the session, before filtering.
    pub total_jobs: usize,
    /// Jobs after filtering, in arrival order.
    pub jobs: Vec<JobRowView>,
    pub active_filters: Vec<FilterTag>,
    pub empty_message: Option<&'static str>,
    pub selected: Option<JobDetailView>,
    pub saved_jobs: Vec<JobRowView>,
    pub applied_count: usize,
    pub apply_form: Option<ApplyFormView>,
    pub notice: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub title: String,
    pub employer: String,
    pub location: String,
    pub salary: String,
    pub salary_period: Option<String>,
    pub employment_type: String,
    pub is_remote: bool,
    pub posted_at: Option<DateTime<Utc>>,
    pub is_selected: bool,
    pub is_saved: bool,
    pub is_applied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailView {
    pub row: JobRowView,
    pub company_type: Option<String>,
    pub description: String,
    pub qualifications: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub apply_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyFormView {
    pub job_id: JobId,
    pub job_title: String,
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub resume_name: Option<String>,
    pub errors: Vec<(ApplyField, &'static str)>,
}

impl ApplyFormView {
    pub fn error(&self, field: ApplyField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, message)| *message)
    }
}
