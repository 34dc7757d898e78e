//! HTTP server: route table, handlers, and the serve loop.
//!
//! | Route                   | Response                                    |
//! |-------------------------|---------------------------------------------|
//! | `GET /`                 | now-playing JSON (`?raw`, `?artwork`)       |
//! | `GET /command/:command` | `{"ok":true}` or `{"error":...}`            |
//! | `GET /bruh`             | `audio/ogg` clip                            |
//! | anything else           | 404 `{"error":"Not Found"}`                 |
//!
//! Handlers only translate between HTTP and [`NowPlayingService`]; status
//! codes are decided here and nowhere else.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::application::{NowPlayingService, Snapshot, SnapshotQuery};
use crate::domain::config::ServerConfig;
use crate::domain::media::MediaCommand;

/// Base64 text of a short Ogg/Opus clip served by `GET /bruh`.
const BRUH_OGG_BASE64: &str = include_str!("../../assets/bruh.ogg.b64");

/// Shared state handed to every handler.
pub type AppState = Arc<NowPlayingService>;

/// Query flags for `GET /`. Presence alone turns a flag on, so `?raw`,
/// `?raw=` and `?raw=1` are equivalent.
#[derive(Debug, Default, Deserialize)]
pub struct NowPlayingParams {
    raw: Option<String>,
    artwork: Option<String>,
}

impl NowPlayingParams {
    fn to_query(&self) -> SnapshotQuery {
        SnapshotQuery {
            raw: self.raw.is_some(),
            artwork: self.artwork.is_some(),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Builds the route table around `service`.
pub fn build_router(service: AppState) -> Router {
    Router::new()
        .route("/", get(now_playing))
        .route("/command/:command", get(command))
        .route("/bruh", get(bruh))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Binds `config.bind_addr` and serves until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run_server<F>(config: &ServerConfig, service: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    info!("server running at http://{}", config.bind_addr);

    axum::serve(listener, build_router(service))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

// ── Handlers ──────────────────────────────────────────────────────────────────

pub async fn now_playing(
    State(service): State<AppState>,
    Query(params): Query<NowPlayingParams>,
) -> Response {
    match service.snapshot(params.to_query()).await {
        Ok(Snapshot::Raw(raw)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            raw,
        )
            .into_response(),
        Ok(Snapshot::Structured(data)) => Json(data).into_response(),
        Err(e) => {
            error!("now-playing snapshot failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn command(State(service): State<AppState>, Path(name): Path<String>) -> Response {
    let Ok(cmd) = name.parse::<MediaCommand>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid command");
    };

    match service.send_command(cmd).await {
        Ok(()) => Json(json!({ "ok": true })).into_response(),
        Err(e) => {
            error!("media command {cmd} failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn bruh() -> Response {
    let compact: String = BRUH_OGG_BASE64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    match BASE64_STANDARD.decode(compact) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "audio/ogg")], bytes).into_response(),
        Err(e) => {
            error!("embedded audio clip is not valid base64: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
