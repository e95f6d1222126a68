use std::time::Duration;

use futures_util::StreamExt;
use url::Url;
use wayhire_core::SearchResultPage;
use wayhire_logging::{wayhire_debug, wayhire_warn};

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "https://jsearch.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "jsearch.p.rapidapi.com";

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            api_host: DEFAULT_API_HOST.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// One paginated search request per call. No retries, no caching.
#[async_trait::async_trait]
pub trait JobSearch: Send + Sync {
    async fn search(
        &self,
        query: &str,
        page: u32,
        country: &str,
    ) -> Result<SearchResultPage, FetchError>;

    /// Like [`JobSearch::search`], with every failure logged and collapsed to `None`.
    async fn fetch_page(&self, query: &str, page: u32, country: &str) -> Option<SearchResultPage> {
        match self.search(query, page, country).await {
            Ok(result) => Some(result),
            Err(err) => {
                wayhire_warn!(
                    "Job search failed query={:?} page={} country={}: {}",
                    query,
                    page,
                    country,
                    err
                );
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestJobSearch {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestJobSearch {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn search_url(&self, query: &str, page: u32, country: &str) -> Result<Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/search"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("page", &page.to_string())
            .append_pair("num_pages", "1")
            .append_pair("country", country)
            .append_pair("date_posted", "all");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl JobSearch for ReqwestJobSearch {
    async fn search(
        &self,
        query: &str,
        page: u32,
        country: &str,
    ) -> Result<SearchResultPage, FetchError> {
        let url = self.search_url(query, page, country)?;
        wayhire_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.settings.api_key.as_str())
            .header(API_HOST_HEADER, self.settings.api_host.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }

        let result: SearchResultPage = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        wayhire_debug!(
            "Search page {} for {:?}: status={} records={}",
            page,
            query,
            result.status,
            result.data.len()
        );
        Ok(result)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
