//! HTTP handlers and router assembly.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::orchestrator;
use crate::state::AppState;
use crate::wire::{AskRequest, AskResponse, HealthResponse};

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ask", post(ask))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn ask(State(state): State<Arc<AppState>>, Json(req): Json<AskRequest>) -> Json<AskResponse> {
    Json(orchestrator::answer_question(&state, &req).await)
}

async fn healthz(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        rooms: state.index.len(),
    })
}
