//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::KvError;

/// Error wrapper for converting engine errors to HTTP responses.
///
/// Bodies are the plain-text error message.
#[derive(Debug)]
pub struct ApiError(pub KvError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            KvError::Validation(_) => StatusCode::BAD_REQUEST,
            KvError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            KvError::KeyNotFound => StatusCode::NOT_FOUND,
            KvError::Store(_)
            | KvError::Io(_)
            | KvError::Config(_)
            | KvError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "request rejected");
        }

        (status, self.0.to_string()).into_response()
    }
}

impl From<KvError> for ApiError {
    fn from(err: KvError) -> Self {
        ApiError(err)
    }
}
