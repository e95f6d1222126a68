use std::sync::Arc;

use wayhire_core::{JobId, JobPosting, Msg};
use wayhire_engine::{applied_jobs, saved_jobs, JsonCollection, KeyValueStore};
use wayhire_logging::wayhire_info;

/// Saved jobs and applied ids, each rewritten whole on every change.
pub struct Persistence {
    saved: JsonCollection<JobPosting>,
    applied: JsonCollection<JobId>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            saved: saved_jobs(store.clone()),
            applied: applied_jobs(store),
        }
    }

    /// Messages that seed the core with what earlier runs persisted.
    pub fn restore_msgs(&self) -> Vec<Msg> {
        let saved = self.saved.load();
        let applied = self.applied.load();
        wayhire_info!(
            "Restored {} saved jobs and {} applied jobs",
            saved.len(),
            applied.len()
        );
        vec![Msg::RestoreSavedJobs(saved), Msg::RestoreAppliedJobs(applied)]
    }

    pub fn save_saved_jobs(&self, jobs: &[JobPosting]) {
        if self.saved.save(jobs) {
            wayhire_info!("Persisted {} saved jobs", jobs.len());
        }
    }

    pub fn save_applied_jobs(&self, job_ids: &[JobId]) {
        if self.applied.save(job_ids) {
            wayhire_info!("Persisted {} applied jobs", job_ids.len());
        }
    }
}
