//! Client error classification

use scrivi_core::{AnalysisFailure, FailureKind};
use thiserror::Error;

/// Longest response body kept in a status error
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),

    /// The base URL cannot have the endpoint path appended
    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No response was received, or the body could not be read
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not an analysis result
    #[error("Response is not a valid analysis result: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
            body.push('…');
        }
        Self::Status { status, body }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Setup(_) | ClientError::InvalidUrl(_) | ClientError::Request { .. } => {
                FailureKind::Request
            }
            ClientError::Status { status, .. } => FailureKind::Status(*status),
            ClientError::Malformed(_) => FailureKind::Malformed,
        }
    }

    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Request { source, .. } if source.is_timeout())
    }

    /// User-facing failure for the results panel
    pub fn failure(&self) -> AnalysisFailure {
        let message = match self {
            ClientError::Setup(e) => e.to_string(),
            ClientError::InvalidUrl(e) => e.to_string(),
            ClientError::Request { url, source } if source.is_timeout() => {
                format!("Timed out waiting for {}", url)
            }
            ClientError::Request { url, source } if source.is_connect() => {
                format!("Could not connect to {}", url)
            }
            ClientError::Request { source, .. } => source.to_string(),
            ClientError::Status { body, .. } if body.is_empty() => "(empty body)".to_string(),
            ClientError::Status { body, .. } => body.clone(),
            ClientError::Malformed(e) => e.to_string(),
        };
        AnalysisFailure::new(self.kind(), message)
    }
}

impl From<ClientError> for scrivi_core::Error {
    fn from(err: ClientError) -> Self {
        scrivi_core::Error::Analysis(err.failure())
    }
}
