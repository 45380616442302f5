//! Network Module
//!
//! HTTP/1.1 front end over the engine.
//!
//! ## Architecture
//! - axum router, one tokio task per request
//! - Store work runs on the blocking pool (redb transactions block)
//! - CORS and request tracing as tower layers

mod error;
mod handlers;
mod middleware;
mod request;
mod response;
mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use middleware::{CorsLayer, TracingLayer};
pub use request::{path_key, PageParams, QueryPairs, SearchParams, SetBody};
pub use server::{build_router, Server};
