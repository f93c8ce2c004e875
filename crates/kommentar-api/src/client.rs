//! HTTP client for the commentary REST API.
//!
//! One `GET` per call, `Accept: application/json`, no authentication and
//! no retries. The client is cheap to share behind an `Arc`; calls hold
//! no state between them.

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use kommentar_types::{
    Commentary, CommentaryEnvelope, CommentaryPage, DEFAULT_API_BASE_URL,
};

use crate::error::ApiError;
use crate::query::SearchQuery;

const COMMENTARIES: &str = "commentaries";

/// Connection settings for [`CommentaryClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// API root, e.g. `https://onlinekommentar.ch/api`.
    pub base_url: String,
    /// Per-request timeout; `None` waits for as long as the API takes.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            user_agent: concat!("onlinekommentar-mcp/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Read-only client for `/commentaries`.
#[derive(Debug, Clone)]
pub struct CommentaryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CommentaryClient {
    /// Builds a client from `settings`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the base URL cannot carry
    /// path segments, or `ApiError::Client` if the HTTP stack fails to
    /// initialise.
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: settings.base_url.clone(),
            reason,
        };
        let base_url = Url::parse(&settings.base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base_url.scheme())));
        }

        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// `GET /commentaries?<query>`, returning rows in API order.
    ///
    /// # Errors
    ///
    /// `Status` on a non-2xx reply, `Transport` if no reply arrived,
    /// `Decode` if the body is not `{ "data": [...] }`.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Commentary>, ApiError> {
        let url = self.search_url(query);
        let response = self.get(url).await?;
        let page: CommentaryPage = decode(response).await?;
        debug!(count = page.data.len(), "search returned");
        Ok(page.data)
    }

    /// `GET /commentaries/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound` on 404, `UnaddressableId` for an id that cannot form
    /// a path segment, otherwise as [`search`](Self::search).
    pub async fn fetch(&self, id: &str) -> Result<Commentary, ApiError> {
        let url = self.commentary_url(id)?;
        let response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(id, "commentary not found");
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        let envelope: CommentaryEnvelope = decode(response).await?;
        Ok(envelope.data)
    }

    /// URL of the search endpoint with `query` encoded.
    pub fn search_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint(&[COMMENTARIES]);
        let pairs = query.pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    /// URL of a single commentary; `id` is encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::UnaddressableId` for `.` and `..`. URL parsing
    /// resolves those (and their `%2E` spellings) against the parent, so
    /// no request could name them.
    pub fn commentary_url(&self, id: &str) -> Result<Url, ApiError> {
        if matches!(id, "." | "..") {
            return Err(ApiError::UnaddressableId { id: id.to_string() });
        }
        Ok(self.endpoint(&[COMMENTARIES, id]))
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get(&self, url: Url) -> Result<Response, ApiError> {
        debug!(%url, "GET");
        self.http
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "commentary API unreachable");
                ApiError::transport(&e)
            })
    }
}

/// Rejects non-2xx replies, then parses the body as `T`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), url = %response.url(), "commentary API error status");
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await.map_err(|e| ApiError::transport(&e))?;
    Ok(serde_json::from_slice(&body)?)
}
