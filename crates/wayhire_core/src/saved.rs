use std::collections::HashSet;

use crate::{JobId, JobPosting};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveToggle {
    Saved,
    Removed,
}

/// Saved jobs, most recently saved first, unique by `job_id`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SavedJobSet {
    jobs: Vec<JobPosting>,
}

impl SavedJobSet {
    /// Builds the set from persisted records, keeping the first record per id.
    pub fn from_persisted(jobs: Vec<JobPosting>) -> Self {
        let mut seen = HashSet::new();
        let jobs = jobs
            .into_iter()
            .filter(|job| seen.insert(job.job_id.clone()))
            .collect();
        Self { jobs }
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.jobs.iter().any(|job| job.job_id == job_id)
    }

    pub fn get(&self, job_id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.job_id == job_id)
    }

    /// Prepends `job`. Returns false if its id is already saved.
    pub fn save(&mut self, job: JobPosting) -> bool {
        if self.contains(&job.job_id) {
            return false;
        }
        self.jobs.insert(0, job);
        true
    }

    pub fn remove(&mut self, job_id: &str) -> Option<JobPosting> {
        let index = self.jobs.iter().position(|job| job.job_id == job_id)?;
        Some(self.jobs.remove(index))
    }

    pub fn toggle(&mut self, job: JobPosting) -> SaveToggle {
        if self.remove(&job.job_id).is_some() {
            SaveToggle::Removed
        } else {
            self.jobs.insert(0, job);
            SaveToggle::Saved
        }
    }
}

/// Ids of jobs the user applied to, in application order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppliedJobIds {
    ids: Vec<JobId>,
}

impl AppliedJobIds {
    pub fn from_persisted(ids: Vec<JobId>) -> Self {
        let mut applied = Self::default();
        for id in ids {
            applied.add(id);
        }
        applied
    }

    pub fn ids(&self) -> &[JobId] {
        &self.ids
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.ids.iter().any(|id| id == job_id)
    }

    /// Appends `job_id`. Returns false if it was already recorded.
    pub fn add(&mut self, job_id: impl Into<JobId>) -> bool {
        let job_id = job_id.into();
        if self.contains(&job_id) {
            return false;
        }
        self.ids.push(job_id);
        true
    }
}
