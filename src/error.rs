use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure modes of a single relay exchange.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Upstream response malformed: {0}")]
    UpstreamMalformed(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamUnavailable(_)
            | RelayError::UpstreamStatus { .. }
            | RelayError::UpstreamMalformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;
