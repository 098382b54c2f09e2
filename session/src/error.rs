use reqwest::StatusCode;

/// Status code the backend answers with once the session has expired.
pub const SESSION_EXPIRED: u16 = 419;

/// Transport errors
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

    /// Returns true if the backend signalled an expired session.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        self.status()
            .is_some_and(|status| status.as_u16() == SESSION_EXPIRED)
    }
}
