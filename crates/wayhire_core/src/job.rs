use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type JobId = String;

/// Upstream status marker for a successful search.
pub const STATUS_OK: &str = "OK";

/// One job listing as returned by the upstream search API.
///
/// Field names on the wire follow the upstream naming. Records are never edited
/// in place; collections replace or drop whole records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: JobId,
    #[serde(rename = "job_title", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employer_name: String,
    #[serde(default)]
    pub employer_logo: Option<String>,
    #[serde(default)]
    pub employer_website: Option<String>,
    #[serde(default)]
    pub employer_company_type: Option<String>,
    #[serde(rename = "job_publisher", default)]
    pub publisher: Option<String>,
    #[serde(rename = "job_employment_type", default, deserialize_with = "null_as_default")]
    pub employment_type: String,
    #[serde(rename = "job_apply_link", default)]
    pub apply_link: Option<String>,
    #[serde(rename = "job_description", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "job_is_remote", default, deserialize_with = "null_as_default")]
    pub is_remote: bool,
    #[serde(rename = "job_posted_at_datetime_utc", default)]
    pub posted_at_utc: Option<String>,
    #[serde(rename = "job_city", default)]
    pub city: Option<String>,
    #[serde(rename = "job_state", default)]
    pub state: Option<String>,
    #[serde(rename = "job_country", default)]
    pub country: Option<String>,
    #[serde(rename = "job_min_salary", default)]
    pub min_salary: Option<f64>,
    #[serde(rename = "job_max_salary", default)]
    pub max_salary: Option<f64>,
    #[serde(rename = "job_salary_currency", default)]
    pub salary_currency: Option<String>,
    #[serde(rename = "job_salary_period", default)]
    pub salary_period: Option<String>,
    #[serde(rename = "job_highlights", default)]
    pub highlights: Option<JobHighlights>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobHighlights {
    #[serde(rename = "Qualifications", default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<Vec<String>>,
    #[serde(rename = "Responsibilities", default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(rename = "Benefits", default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

impl JobPosting {
    pub fn new(
        job_id: impl Into<JobId>,
        title: impl Into<String>,
        employer_name: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            title: title.into(),
            employer_name: employer_name.into(),
            ..Self::default()
        }
    }

    /// `"{city}, {state}"`, degrading to whatever parts exist.
    pub fn location_label(&self) -> String {
        let parts: Vec<&str> = [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if !parts.is_empty() {
            return parts.join(", ");
        }
        match self.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => country.to_string(),
            _ if self.is_remote => "Remote".to_string(),
            _ => "Location not specified".to_string(),
        }
    }

    /// `"$min - $max"` when both bounds are known, otherwise `"N/A"`.
    pub fn salary_label(&self) -> String {
        match (self.min_salary, self.max_salary) {
            (Some(min), Some(max)) if min > 0.0 && max > 0.0 => {
                format!("${} - ${}", format_amount(min), format_amount(max))
            }
            _ => "N/A".to_string(),
        }
    }

    /// Posting time, if the upstream sent a parseable RFC 3339 timestamp.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.posted_at_utc.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// The upstream sends `null` as freely as it omits a field; both mean "unset".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Echo of the request parameters in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchParameters {
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_pages: u32,
}

/// One page of results for one query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub status: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub parameters: Option<SearchParameters>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<JobPosting>,
}

impl SearchResultPage {
    pub fn ok(data: Vec<JobPosting>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            data,
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}
