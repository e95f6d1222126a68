use std::collections::HashSet;

use crate::{JobId, JobPosting, SearchResultPage};

/// Nominal upstream page size. A page shorter than this ends the listing.
pub const NOMINAL_PAGE_SIZE: usize = 10;

pub const DEFAULT_COUNTRY: &str = "us";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingPhase {
    #[default]
    Idle,
    Searching,
    LoadingMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Search,
    LoadMore,
}

/// One outbound page request, tagged with the session generation it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub kind: FetchKind,
    pub query: String,
    pub page: u32,
    pub country: String,
}

/// How a completed fetch changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response belonged to a superseded session or an unexpected page.
    Stale,
    /// The response was applied; `added` records joined the collection.
    Applied { added: usize },
    /// The fetch failed or the upstream reported a non-OK status.
    Failed,
}

/// Working state for one query: accumulated jobs, page cursor and fetch guards.
///
/// Every search starts a new generation. Responses carry the generation they
/// were requested under, so a late page from an older query is dropped instead
/// of leaking into the new collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSession {
    country: String,
    generation: u64,
    query: String,
    page: u32,
    jobs: Vec<JobPosting>,
    seen: HashSet<JobId>,
    has_more: bool,
    phase: ListingPhase,
    load_failed: bool,
}

impl Default for ListingSession {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}

impl ListingSession {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            generation: 0,
            query: String::new(),
            page: 1,
            jobs: Vec::new(),
            seen: HashSet::new(),
            has_more: false,
            phase: ListingPhase::Idle,
            load_failed: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn job(&self, job_id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.job_id == job_id)
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn phase(&self) -> ListingPhase {
        self.phase
    }

    pub fn is_fetching(&self) -> bool {
        self.phase != ListingPhase::Idle
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a fresh session for `query` and returns the page-1 request.
    ///
    /// Returns `None` for a blank query, or when the same query is already
    /// being fetched.
    pub fn begin_search(&mut self, query: &str) -> Option<FetchRequest> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if self.phase == ListingPhase::Searching && self.query == query {
            return None;
        }

        self.generation += 1;
        self.query = query.to_string();
        self.page = 1;
        self.jobs.clear();
        self.seen.clear();
        self.has_more = true;
        self.load_failed = false;
        self.phase = ListingPhase::Searching;

        Some(self.request(FetchKind::Search, 1))
    }

    /// Returns the next-page request if more results exist and nothing is in flight.
    pub fn begin_load_more(&mut self) -> Option<FetchRequest> {
        if !self.has_more || self.is_fetching() || self.query.is_empty() {
            return None;
        }
        self.phase = ListingPhase::LoadingMore;
        Some(self.request(FetchKind::LoadMore, self.page + 1))
    }

    /// Applies a completed fetch. `None` is a transport or parse failure.
    pub fn complete(
        &mut self,
        request: &FetchRequest,
        result: Option<SearchResultPage>,
    ) -> FetchOutcome {
        if !self.is_current(request) {
            return FetchOutcome::Stale;
        }
        self.phase = ListingPhase::Idle;

        let page = match result {
            Some(page) if page.is_ok() => page,
            _ => {
                self.has_more = false;
                if request.kind == FetchKind::Search {
                    self.load_failed = true;
                }
                return FetchOutcome::Failed;
            }
        };

        let raw_len = page.data.len();
        let added = match request.kind {
            FetchKind::Search => {
                self.jobs.clear();
                self.seen.clear();
                self.append_unseen(page.data)
            }
            FetchKind::LoadMore => {
                let added = self.append_unseen(page.data);
                if added > 0 {
                    self.page = request.page;
                } else {
                    // Upstream repeated a page we already hold.
                    self.has_more = false;
                }
                added
            }
        };
        if raw_len < NOMINAL_PAGE_SIZE {
            self.has_more = false;
        }

        FetchOutcome::Applied { added }
    }

    fn is_current(&self, request: &FetchRequest) -> bool {
        if request.generation != self.generation {
            return false;
        }
        match (request.kind, self.phase) {
            (FetchKind::Search, ListingPhase::Searching) => request.page == 1,
            (FetchKind::LoadMore, ListingPhase::LoadingMore) => request.page == self.page + 1,
            _ => false,
        }
    }

    fn append_unseen(&mut self, incoming: Vec<JobPosting>) -> usize {
        let before = self.jobs.len();
        for job in incoming {
            if self.seen.insert(job.job_id.clone()) {
                self.jobs.push(job);
            }
        }
        self.jobs.len() - before
    }

    fn request(&self, kind: FetchKind, page: u32) -> FetchRequest {
        FetchRequest {
            generation: self.generation,
            kind,
            query: self.query.clone(),
            page,
            country: self.country.clone(),
        }
    }
}
