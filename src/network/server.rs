//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::routing::{delete, get, post, put, MethodRouter};
use axum::Router;
use tokio::net::TcpListener;

use super::error::ApiError;
use super::handlers::{
    handle_delete, handle_get, handle_list, handle_search, handle_set, AppState,
};
use super::middleware::{CorsLayer, TracingLayer};
use crate::config::Config;
use crate::engine::Engine;
use crate::error::{KvError, Result};

/// HTTP server for PageKV
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self { config, engine }
    }

    /// Serve until `shutdown` resolves
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.listen_addr.as_str()).await?;
        tracing::info!("Server is running on {}", listener.local_addr()?);

        let app = build_router(self.engine);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped accepting connections");
        Ok(())
    }
}

/// Answers any method the route does not serve.
fn only(method: &'static str) -> impl Fn() -> std::future::Ready<ApiError> + Clone + Send + 'static {
    move || std::future::ready(ApiError(KvError::MethodNotAllowed(method)))
}

/// Build the application router.
///
/// Keys in `/get/` and `/delete/` paths are everything after the prefix,
/// slashes included. The bare prefixes exist so an empty key reaches the
/// handler and is rejected there.
pub fn build_router(engine: Arc<Engine>) -> Router {
    let state = AppState { engine };

    let set_post: MethodRouter<AppState> = post(handle_set).fallback(only("POST"));
    let set_put: MethodRouter<AppState> = put(handle_set).fallback(only("PUT"));
    let get_key: MethodRouter<AppState> = get(handle_get).fallback(only("GET"));
    let delete_key: MethodRouter<AppState> = delete(handle_delete).fallback(only("DELETE"));

    Router::new()
        .route("/set", set_post)
        .route("/set/", set_put.clone())
        .route("/set/*rest", set_put)
        .route("/get/", get_key.clone())
        .route("/get/*key", get_key)
        .route("/delete/", delete_key.clone())
        .route("/delete/*key", delete_key)
        .route("/list", get(handle_list).fallback(only("GET")))
        .route("/search", get(handle_search).fallback(only("GET")))
        .layer(CorsLayer::new())
        .layer(TracingLayer::new())
        .with_state(state)
}
