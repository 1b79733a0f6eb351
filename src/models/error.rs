use thiserror::Error;

/// Failures of the two Places endpoints.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    RequestFailure { endpoint: &'static str, status: u16 },

    #[error("{endpoint} answered {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    ApiStatus {
        endpoint: &'static str,
        status: String,
        message: Option<String>,
    },

    #[error("malformed {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PlacesError {
    /// Transport errors carry the request URL, which holds the API key.
    pub fn transport(endpoint: &'static str, source: reqwest::Error) -> Self {
        PlacesError::Transport {
            endpoint,
            source: source.without_url(),
        }
    }
}

/// Result of scraping one website. Never an error for the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Found(String),
    Empty,
    Failed(String),
}

impl ScrapeOutcome {
    pub fn into_emails(self) -> Option<String> {
        match self {
            ScrapeOutcome::Found(emails) => Some(emails),
            ScrapeOutcome::Empty | ScrapeOutcome::Failed(_) => None,
        }
    }
}
