//! JSON HTTP API for the Summarix engine.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/summarize` | Summarize raw text at a target ratio |
//! | `POST` | `/api/chat` | Answer a question about a summary |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! All error responses share one shape:
//!
//! ```json
//! { "error": { "code": "invalid_ratio", "message": "ratio must be in (0, 1], got 1.5" } }
//! ```
//!
//! Engine validation failures map to 400 with codes `empty_input`,
//! `input_too_short`, `input_too_long`, `invalid_ratio`, and
//! `no_content_words`.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support
//! browser-based clients.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use summarix_core::{ChatReply, EngineError, Summarized};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;

/// Shared application state passed to route handlers.
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
}

/// Starts the HTTP server on the configured bind address.
///
/// Runs until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let state = AppState {
        config: Arc::new(config.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/summarize", post(handle_summarize))
        .route("/api/chat", post(handle_chat))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    println!("Summarix server listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Inner error detail with a machine-readable code and human-readable message.
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Map an engine validation failure to a 400 with a stable error code.
fn engine_error(err: EngineError) -> AppError {
    let code = match err {
        EngineError::EmptyInput => "empty_input",
        EngineError::InputTooShort { .. } => "input_too_short",
        EngineError::InputTooLong { .. } => "input_too_long",
        EngineError::InvalidRatio { .. } => "invalid_ratio",
        EngineError::NoContentWords => "no_content_words",
    };
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: code.to_string(),
        message: err.to_string(),
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ POST /api/summarize ============

/// Request body for `POST /api/summarize`.
#[derive(Deserialize)]
struct SummarizeRequest {
    /// Raw document text, plain prose.
    text: String,
    /// Target ratio in `(0, 1]`; the configured default when omitted.
    ratio: Option<f64>,
}

/// Handler for `POST /api/summarize`.
async fn handle_summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<Summarized>, AppError> {
    let ratio = req.ratio.unwrap_or(state.config.summary.default_ratio);
    let out = summarix_core::summarize(&req.text, ratio).map_err(engine_error)?;
    Ok(Json(out))
}

// ============ POST /api/chat ============

/// Request body for `POST /api/chat`.
#[derive(Deserialize)]
struct ChatRequest {
    /// The user's question.
    query: String,
    /// The previously generated summary the question is about.
    summary: String,
}

/// Handler for `POST /api/chat`.
async fn handle_chat(
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let reply = summarix_core::answer(&req.query, &req.summary).map_err(engine_error)?;
    Ok(Json(reply))
}
