use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::infrastructure::SharedState;
use crate::shared::AppResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub active_sessions: usize,
    pub uptime_secs: i64,
}

pub fn health_routes() -> Router<SharedState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<SharedState>) -> AppResult<Json<HealthResponse>> {
    let active_sessions = state.chat.active_sessions().await?;
    let uptime_secs = (state.clock.now() - state.started_at).num_seconds();

    Ok(Json(HealthResponse {
        status: "ok",
        active_sessions,
        uptime_secs,
    }))
}
