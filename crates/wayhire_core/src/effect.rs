use crate::{FetchRequest, JobId, JobPosting};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchPage(FetchRequest),
    /// Rewrite the whole saved-jobs record.
    PersistSavedJobs { jobs: Vec<JobPosting> },
    /// Rewrite the whole applied-ids record.
    PersistAppliedJobs { job_ids: Vec<JobId> },
}
