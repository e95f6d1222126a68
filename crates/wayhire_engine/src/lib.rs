//! Wayhire engine: IO for the job board (remote search, local persistence).
mod engine;
mod fetch;
mod persist;
mod store;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{FetchSettings, JobSearch, ReqwestJobSearch, DEFAULT_API_HOST, DEFAULT_BASE_URL};
pub use persist::{ensure_dir, write_atomic, PersistError};
pub use store::{
    applied_jobs, saved_jobs, FileStore, JsonCollection, KeyValueStore, MemoryStore,
    APPLIED_JOBS_KEY, SAVED_JOBS_KEY,
};
pub use types::{EngineEvent, FailureKind, FetchError};
