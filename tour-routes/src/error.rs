use reqwest::StatusCode;

/// Tour-route client errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to build http client")]
    BuildHttpClient,

    #[error("failed to send request")]
    SendRequest(#[from] reqwest::Error),

    #[error("unexpected HTTP status code: {status}")]
    UnexpectedStatusCode { status: StatusCode, body: String },

    #[error("parse URL: {0}")]
    ParseURL(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code the backend answered with, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatusCode { status, .. } => Some(*status),
            Self::SendRequest(err) => err.status(),
            _ => None,
        }
    }
}
