//! Wayhire core: pure job-listing state machine and view-model helpers.
mod apply;
mod effect;
mod filter;
mod job;
mod msg;
mod saved;
mod scroll;
mod session;
mod state;
mod update;
mod view_model;

pub use apply::{
    ApplyField, ApplyForm, ApplyInput, FieldErrors, ResumeFile, MAX_RESUME_BYTES,
    RESUME_CONTENT_TYPE,
};
pub use effect::Effect;
pub use filter::{apply_filters, FilterTag, UnknownFilterTag};
pub use job::{JobHighlights, JobId, JobPosting, SearchParameters, SearchResultPage, STATUS_OK};
pub use msg::Msg;
pub use saved::{AppliedJobIds, SaveToggle, SavedJobSet};
pub use scroll::{ScrollMetrics, ScrollTrigger, DEFAULT_PROXIMITY_THRESHOLD};
pub use session::{
    FetchKind, FetchOutcome, FetchRequest, ListingPhase, ListingSession, DEFAULT_COUNTRY,
    NOMINAL_PAGE_SIZE,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, ApplyFormView, JobDetailView, JobRowView, EMPTY_FAILED, EMPTY_FILTERED,
    EMPTY_NO_JOBS,
};
