// Chat Routes
//
// 聊天相关的 HTTP 处理器，业务逻辑全部交给 ChatModule

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::SessionCookie;
use crate::infrastructure::SharedState;
use crate::modules::chat::ChatMessage;
use crate::modules::research::{ResearchArticle, ResourceResults};
use crate::shared::AppResult;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageBody {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_results: Option<ResourceResults>,
}

#[derive(Debug, Serialize)]
pub struct HistoryBody {
    pub history: Vec<ChatMessage>,
    pub research: Vec<ResearchArticle>,
}

#[derive(Debug, Serialize)]
pub struct StopBody {
    pub cancelled: bool,
}

pub fn chat_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/chat/messages", post(send_message))
        .route("/api/chat/history", get(history))
        .route("/api/chat/reset", post(reset))
        .route("/api/chat/stop", post(stop))
}

async fn send_message(
    State(state): State<SharedState>,
    session: SessionCookie,
    Json(request): Json<SendMessageRequest>,
) -> AppResult<(SessionCookie, Json<SendMessageBody>)> {
    let response = state.chat.send_message(session.id(), request.message).await?;

    Ok((
        session,
        Json(SendMessageBody {
            text: response.text,
            search_results: response.search_results,
        }),
    ))
}

async fn history(
    State(state): State<SharedState>,
    session: SessionCookie,
) -> AppResult<(SessionCookie, Json<HistoryBody>)> {
    let transcript = state.chat.transcript(session.id()).await?;

    Ok((
        session,
        Json(HistoryBody {
            history: transcript.history,
            research: transcript.research,
        }),
    ))
}

async fn reset(
    State(state): State<SharedState>,
    session: SessionCookie,
) -> AppResult<(SessionCookie, StatusCode)> {
    state.chat.reset(session.id()).await?;
    Ok((session, StatusCode::NO_CONTENT))
}

async fn stop(
    State(state): State<SharedState>,
    session: SessionCookie,
) -> AppResult<(SessionCookie, Json<StopBody>)> {
    let response = state.chat.stop_generation(session.id()).await?;
    Ok((
        session,
        Json(StopBody {
            cancelled: response.cancelled,
        }),
    ))
}
