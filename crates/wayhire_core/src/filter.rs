use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::JobPosting;

/// Named boolean predicate over a job. Active tags compose with logical AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterTag {
    Remote,
    FullTime,
    PartTime,
}

impl FilterTag {
    pub const ALL: [FilterTag; 3] = [FilterTag::Remote, FilterTag::FullTime, FilterTag::PartTime];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterTag::Remote => "remote",
            FilterTag::FullTime => "full-time",
            FilterTag::PartTime => "part-time",
        }
    }

    pub fn matches(self, job: &JobPosting) -> bool {
        match self {
            FilterTag::Remote => job.is_remote,
            FilterTag::FullTime => employment_type_contains(job, &["fulltime", "full-time"]),
            FilterTag::PartTime => employment_type_contains(job, &["parttime", "part-time"]),
        }
    }
}

fn employment_type_contains(job: &JobPosting, needles: &[&str]) -> bool {
    let employment_type = job.employment_type.to_ascii_lowercase();
    needles.iter().any(|needle| employment_type.contains(needle))
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter `{0}`")]
pub struct UnknownFilterTag(pub String);

impl FromStr for FilterTag {
    type Err = UnknownFilterTag;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FilterTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownFilterTag(raw.trim().to_string()))
    }
}

/// Returns the jobs satisfying every active filter, in input order.
pub fn apply_filters<'a>(
    jobs: &'a [JobPosting],
    active: &BTreeSet<FilterTag>,
) -> Vec<&'a JobPosting> {
    jobs.iter()
        .filter(|job| active.iter().all(|tag| tag.matches(job)))
        .collect()
}
