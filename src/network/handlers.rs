//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::Uri;

use super::error::ApiError;
use super::request::{path_key, PageParams, QueryPairs, SearchParams, SetBody};
use crate::engine::Engine;
use crate::error::KvError;
use crate::protocol::{Command, Reply};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

/// Run a command on the blocking pool.
///
/// redb transactions block on I/O, so they never run on the async workers.
async fn execute(state: &AppState, command: Command) -> Result<Reply, ApiError> {
    let engine = Arc::clone(&state.engine);
    let reply = tokio::task::spawn_blocking(move || engine.execute(command))
        .await
        .map_err(|e| KvError::Internal(format!("worker task failed: {}", e)))??;
    Ok(reply)
}

/// Handle POST /set and PUT /set/
pub async fn handle_set(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Reply, ApiError> {
    let command = SetBody::parse(&body)?.into_command()?;
    execute(&state, command).await
}

/// Handle GET /get/{key}
pub async fn handle_get(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Reply, ApiError> {
    let key = path_key(&uri, "/get/");
    execute(&state, Command::Get { key }).await
}

/// Handle DELETE /delete/{key}
pub async fn handle_delete(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Reply, ApiError> {
    let key = path_key(&uri, "/delete/");
    execute(&state, Command::Delete { key }).await
}

/// Handle GET /list
pub async fn handle_list(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Reply, ApiError> {
    let command = Command::List {
        page: PageParams::from_query(&pairs).page_request(),
    };
    execute(&state, command).await
}

/// Handle GET /search
pub async fn handle_search(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Reply, ApiError> {
    let command = SearchParams::from_query(&pairs).into_command()?;
    execute(&state, command).await
}
