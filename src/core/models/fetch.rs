//! Fetch installed models from an Ollama server (`GET /api/tags`).

use crate::core::util;

use super::error::ListError;
use super::info::{DisplayPair, TagsResponse};
use super::report::ErrorReporter;

/// Versioned API prefix that OpenAI-compatible base URLs carry (`http://host:11434/v1`).
const VERSION_SEGMENT: &str = "/v1";

const TAGS_PATH: &str = "/api/tags";

/// Strip a `/v1` path segment and everything after it, then trailing slashes.
///
/// Only a whole segment counts: `/v1`, `/v1/...`, `/v1?...`. Hosts like
/// `v1.example.com` and paths like `/v10` are left alone.
pub fn normalize_base_url(base_url: &str) -> &str {
    let mut url = base_url.trim();
    let mut from = 0;
    while let Some(pos) = url[from..].find(VERSION_SEGMENT) {
        let start = from + pos;
        let rest = &url[start + VERSION_SEGMENT.len()..];
        if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
            url = &url[..start];
            break;
        }
        from = start + VERSION_SEGMENT.len();
    }
    url.trim_end_matches('/')
}

/// Client for one Ollama server. Holds no state beyond the HTTP client.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (proxies, custom timeouts).
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url).to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tags_url(&self) -> String {
        format!("{}{}", self.base_url, TAGS_PATH)
    }

    /// One GET to `/api/tags`. Non-2xx is an error; no retries.
    pub async fn fetch_tags(&self) -> Result<TagsResponse, ListError> {
        let url = self.tags_url();
        log::debug!("GET {}", url);

        let response = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(source) => return Err(ListError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ListError::Status { url, status });
        }

        let body = match response.bytes().await {
            Ok(b) => b,
            Err(source) => return Err(ListError::Transport { url, source }),
        };
        serde_json::from_slice(&body).map_err(|source| ListError::Decode { url, source })
    }

    /// Installed models as `("name (size)", "name")` pairs, in server order.
    pub async fn list_models(&self) -> Result<Vec<DisplayPair>, ListError> {
        let tags = self.fetch_tags().await?;
        let pairs: Vec<DisplayPair> = tags.models.into_iter().map(DisplayPair::from).collect();
        log::info!("{} model(s) available at {}", pairs.len(), self.base_url);
        Ok(pairs)
    }
}

/// Fetch the display pairs for `base_url`.
pub async fn list_models(base_url: &str) -> Result<Vec<DisplayPair>, ListError> {
    OllamaClient::new(base_url).list_models().await
}

/// Like [`OllamaClient::list_models`], but never fails: errors go to `reporter`
/// and an empty list comes back, ready to drop into a selection widget.
pub async fn list_models_or_empty(
    client: &OllamaClient,
    reporter: &dyn ErrorReporter,
) -> Vec<DisplayPair> {
    match client.list_models().await {
        Ok(pairs) => pairs,
        Err(e) => {
            reporter.report(&e);
            Vec::new()
        }
    }
}

/// Filter pairs by query (case-insensitive match on label or value).
pub fn filter_pairs<'a>(pairs: &'a [DisplayPair], query: &str) -> Vec<&'a DisplayPair> {
    util::filter_by_query(pairs, query, |p| (p.label.as_str(), p.value.as_str()))
}
