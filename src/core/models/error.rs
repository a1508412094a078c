//! Errors from fetching the model list.

/// Why a call to `/api/tags` produced no list.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// Connection refused, DNS failure, timeout, or a request that could not be built.
    #[error("Could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// The server answered 2xx but the body is not a tags listing.
    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ListError {
    /// Transport and HTTP status failures, as opposed to a bad payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, ListError::Transport { .. } | ListError::Status { .. })
    }
}
