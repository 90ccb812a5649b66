//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::board::assemble::assemble_board;
use crate::board::labels::normalize_labels;
use crate::board::models::Priority;
use crate::errors::TrackerError;
use crate::tracker::{NewIssue, Tracker};

// ── Shared application state ──────────────────────────────────────────

pub struct AppState {
    pub tracker: Arc<dyn Tracker>,
}

pub type SharedState = Arc<AppState>;

// ── Request payload types ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateIssueRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    /// Lenient on purpose: unrecognized values fall back to MEDIUM.
    pub priority: Option<String>,
    pub labels: Option<Vec<String>>,
}

// ── Error handling ────────────────────────────────────────────────────

pub enum ApiError {
    BadRequest(String),
    /// Upstream failure forwarded with the tracker's own status and body.
    Upstream { status: u16, body: String },
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

impl From<TrackerError> for ApiError {
    /// Read-path mapping: any tracker failure is a server error carrying the
    /// upstream body. The write path maps `Api` errors itself to forward the
    /// upstream status.
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::Api { body, .. } => ApiError::Internal(body),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/api/board", get(get_board))
        .route("/api/issues", post(create_issue))
        .route("/health", get(health_check))
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn health_check() -> &'static str {
    "ok"
}

async fn get_board(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let issues = state.tracker.list_issues().await?;

    // Best-effort: a missing progress log degrades to the issue digest.
    let progress = match state.tracker.fetch_progress_log().await {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("progress log unavailable: {err}");
            String::new()
        }
    };

    Ok(Json(assemble_board(&issues, &progress)))
}

async fn create_issue(
    State(state): State<SharedState>,
    Json(req): Json<CreateIssueRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = req.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::BadRequest("Title is required.".to_string()));
    }

    let priority = req
        .priority
        .as_deref()
        .and_then(|value| value.parse::<Priority>().ok())
        .unwrap_or(Priority::Medium);
    let body = req.body.as_deref().map(str::trim).unwrap_or_default();
    let labels = normalize_labels(req.labels.as_deref().unwrap_or(&[]), priority);

    let issue = state
        .tracker
        .create_issue(&NewIssue {
            title: title.to_string(),
            body: body.to_string(),
            labels,
        })
        .await
        .map_err(|err| match err {
            TrackerError::Api { status, body } => {
                tracing::warn!(status, "issue creation rejected upstream");
                ApiError::Upstream { status, body }
            }
            other => ApiError::Internal(other.to_string()),
        })?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({"issue": issue}))))
}

// ── Tests ─────────────────────────────────────────────────────────────
