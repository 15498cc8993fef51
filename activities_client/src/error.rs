use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent, or the response body could not be
    /// read or was not JSON.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("base URL must not have a query or fragment: {0}")]
    UnsupportedBaseUrl(url::Url),

    /// The server answered with a non-success status. `body` is the parsed
    /// JSON it sent along, usually `{"detail": "..."}`.
    #[error("server responded with {status}: {body}")]
    Rejected {
        status: StatusCode,
        body: serde_json::Value,
    },

    #[error("unexpected response body: {0}")]
    UnexpectedBody(#[source] serde_json::Error),
}

impl Error {
    /// The `detail` message of a rejected request, if the server sent one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { body, .. } => body.get("detail")?.as_str(),
            _ => None,
        }
    }
}
