//! Response composition.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::protocol::{PageBody, Reply};

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Value(value) => (
                StatusCode::OK,
                [(CONTENT_TYPE, "application/octet-stream")],
                value,
            )
                .into_response(),
            Reply::Page(page) => Json(PageBody::from(&page)).into_response(),
            reply @ (Reply::Stored { .. } | Reply::Deleted { .. }) => {
                (StatusCode::OK, reply.message().unwrap_or_default()).into_response()
            }
        }
    }
}
