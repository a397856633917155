/// HTTP error mapping.
///
/// Clients only ever see two failures: 404 for anything that cannot be
/// read and 403 for anything that may not be served. Both carry a short
/// plain-text body.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use wavedeck_core::BrowseError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    /// A blocking filesystem task panicked or was cancelled.
    #[error("Internal error")]
    Internal(String),
}

impl From<BrowseError> for ApiError {
    fn from(e: BrowseError) -> Self {
        match e {
            BrowseError::NotFound(_) => Self::NotFound,
            BrowseError::Forbidden(_) => Self::Forbidden,
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(detail) => {
                tracing::error!("Request failed: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
