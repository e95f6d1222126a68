use crate::{
    ApplyInput, FetchRequest, FilterTag, JobId, JobPosting, ScrollMetrics, SearchResultPage,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search box.
    SearchInputChanged(String),
    /// User submitted the current search box contents.
    SearchSubmitted,
    /// The listing viewport moved.
    Scrolled(ScrollMetrics),
    /// A page fetch finished. `None` is a transport or parse failure.
    PageLoaded {
        request: FetchRequest,
        result: Option<SearchResultPage>,
    },
    /// User picked a job from the listing or the saved list.
    JobSelected { job_id: JobId },
    FilterToggled(FilterTag),
    FiltersCleared,
    /// User clicked save/unsave on a job.
    SaveToggled { job_id: JobId },
    /// Restore saved jobs loaded from persistent storage.
    RestoreSavedJobs(Vec<JobPosting>),
    /// Restore applied job ids loaded from persistent storage.
    RestoreAppliedJobs(Vec<JobId>),
    ApplyOpened { job_id: JobId },
    ApplyInput(ApplyInput),
    ApplySubmitted,
    ApplyCancelled,
    NoticeDismissed,
}
