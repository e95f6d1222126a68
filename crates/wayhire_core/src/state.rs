use std::collections::BTreeSet;

use crate::view_model::{
    AppViewModel, ApplyFormView, JobDetailView, JobRowView, EMPTY_FAILED, EMPTY_FILTERED,
    EMPTY_NO_JOBS,
};
use crate::{
    apply_filters, ApplyForm, AppliedJobIds, FilterTag, JobId, JobPosting, ListingPhase,
    ListingSession, SavedJobSet, ScrollTrigger,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) search_input: String,
    pub(crate) listing: ListingSession,
    pub(crate) trigger: ScrollTrigger,
    pub(crate) filters: BTreeSet<FilterTag>,
    pub(crate) selected: Option<JobId>,
    pub(crate) saved: SavedJobSet,
    pub(crate) applied: AppliedJobIds,
    pub(crate) apply_form: Option<ApplyForm>,
    pub(crate) notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose fetches target `country` and whose trigger uses `threshold`.
    pub fn with_settings(country: &str, threshold: u32) -> Self {
        Self {
            listing: ListingSession::new(country),
            trigger: ScrollTrigger::new(threshold),
            ..Self::default()
        }
    }

    pub fn listing(&self) -> &ListingSession {
        &self.listing
    }

    pub fn saved_jobs(&self) -> &SavedJobSet {
        &self.saved
    }

    pub fn applied_jobs(&self) -> &AppliedJobIds {
        &self.applied
    }

    pub fn active_filters(&self) -> &BTreeSet<FilterTag> {
        &self.filters
    }

    pub fn selected_job_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn apply_form(&self) -> Option<&ApplyForm> {
        self.apply_form.as_ref()
    }

    /// Looks a job up in the current listing first, then in the saved set.
    pub fn find_job(&self, job_id: &str) -> Option<&JobPosting> {
        self.listing.job(job_id).or_else(|| self.saved.get(job_id))
    }

    pub fn visible_jobs(&self) -> Vec<&JobPosting> {
        apply_filters(self.listing.jobs(), &self.filters)
    }

    pub fn view(&self) -> AppViewModel {
        let visible = self.visible_jobs();
        let jobs: Vec<JobRowView> = visible.iter().map(|job| self.row(job)).collect();

        let empty_message = if self.listing.phase() == ListingPhase::Searching {
            None
        } else if self.listing.load_failed() {
            Some(EMPTY_FAILED)
        } else if self.listing.query().is_empty() {
            None
        } else if self.listing.jobs().is_empty() {
            Some(EMPTY_NO_JOBS)
        } else if jobs.is_empty() {
            Some(EMPTY_FILTERED)
        } else {
            None
        };

        let selected = self
            .selected
            .as_deref()
            .and_then(|job_id| self.find_job(job_id))
            .map(|job| self.detail(job));

        let apply_form = self.apply_form.as_ref().map(|form| ApplyFormView {
            job_id: form.job_id().to_string(),
            job_title: self
                .find_job(form.job_id())
                .map(|job| job.title.clone())
                .unwrap_or_default(),
            name: form.name.clone(),
            email: form.email.clone(),
            linkedin: form.linkedin.clone(),
            resume_name: form.resume.as_ref().map(|file| file.file_name.clone()),
            errors: form
                .errors()
                .iter()
                .map(|(field, message)| (*field, *message))
                .collect(),
        });

        AppViewModel {
            search_input: self.search_input.clone(),
            query: self.listing.query().to_string(),
            phase: self.listing.phase(),
            page: self.listing.page(),
            has_more: self.listing.has_more(),
            total_jobs: self.listing.jobs().len(),
            jobs,
            active_filters: self.filters.iter().copied().collect(),
            empty_message,
            selected,
            saved_jobs: self.saved.jobs().iter().map(|job| self.row(job)).collect(),
            applied_count: self.applied.ids().len(),
            apply_form,
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn row(&self, job: &JobPosting) -> JobRowView {
        JobRowView {
            job_id: job.job_id.clone(),
            title: job.title.clone(),
            employer: job.employer_name.clone(),
            location: job.location_label(),
            salary: job.salary_label(),
            salary_period: job.salary_period.clone(),
            employment_type: job.employment_type.clone(),
            is_remote: job.is_remote,
            posted_at: job.posted_at(),
            is_selected: self.selected.as_deref() == Some(job.job_id.as_str()),
            is_saved: self.saved.contains(&job.job_id),
            is_applied: self.applied.contains(&job.job_id),
        }
    }

    fn detail(&self, job: &JobPosting) -> JobDetailView {
        let highlights = job.highlights.clone().unwrap_or_default();
        JobDetailView {
            row: self.row(job),
            company_type: job.employer_company_type.clone(),
            description: job.description.clone(),
            qualifications: highlights.qualifications.unwrap_or_default(),
            responsibilities: highlights.responsibilities.unwrap_or_default(),
            benefits: highlights.benefits.unwrap_or_default(),
            apply_link: job.apply_link.clone(),
        }
    }
}
