// Quiz Routes
//
// 提交问卷后同时用问卷答案重建聊天上下文

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::SessionCookie;
use crate::infrastructure::SharedState;
use crate::modules::quiz::{Feelings, Issue, Mood, QuizContext};
use crate::shared::AppResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub issue: Option<Issue>,
    #[serde(default)]
    pub mood: Vec<Mood>,
    #[serde(default)]
    pub feelings: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    #[serde(flatten)]
    pub quiz: QuizContext,
    pub submitted: bool,
}

pub fn quiz_routes() -> Router<SharedState> {
    Router::new().route("/api/quiz", get(get_quiz).post(submit_quiz))
}

async fn get_quiz(
    State(state): State<SharedState>,
    session: SessionCookie,
) -> AppResult<(SessionCookie, Json<QuizResponse>)> {
    let response = state.quiz.get(session.id()).await?;

    Ok((
        session,
        Json(QuizResponse {
            quiz: response.quiz,
            submitted: response.submitted,
        }),
    ))
}

async fn submit_quiz(
    State(state): State<SharedState>,
    session: SessionCookie,
    Json(request): Json<SubmitQuizRequest>,
) -> AppResult<(SessionCookie, Json<QuizResponse>)> {
    let feelings = Feelings::parse(request.feelings)?;
    let quiz = QuizContext::new(request.issue, request.mood, feelings);

    let stored = state.quiz.submit(session.id(), quiz).await?;
    state
        .chat
        .initialize_context(session.id(), stored.clone())
        .await?;
    info!("Quiz submitted for session {}", session.id());

    Ok((
        session,
        Json(QuizResponse {
            quiz: stored,
            submitted: true,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{get_request, json_body, post_json, set_cookie};
    use crate::infrastructure::build_router;
    use crate::infrastructure::state::test_state;
    use crate::modules::chat::application::testing::ScriptedLLM;
    use crate::modules::chat::SessionId;
    use crate::shared::ManualClock;
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_quiz_defaults_and_issues_cookie() {
        let state = test_state(ScriptedLLM::default(), &ManualClock::default());

        let response = build_router(state)
            .oneshot(get_request("/api/quiz", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).unwrap().starts_with("chat_session_id="));

        let body = json_body(response).await;
        assert_eq!(body["issue"], "Anxiety");
        assert_eq!(body["submitted"], false);
        assert_eq!(body["feelings"], "[Not Answered]");
    }

    #[tokio::test]
    async fn test_submit_quiz_initializes_chat_context() {
        let state = test_state(ScriptedLLM::default(), &ManualClock::default());
        let id = SessionId::new();
        let app = build_router(state.clone());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/quiz",
                Some(id),
                json!({"issue": "Grief", "mood": ["Sad", "Sad", "Calm"], "feelings": "  lost  "}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).is_none());
        let body = json_body(response).await;
        assert_eq!(body["issue"], "Grief");
        assert_eq!(body["mood"], json!(["Sad", "Calm"]));
        assert_eq!(body["feelings"], "lost");
        assert_eq!(state.chat.active_sessions().await.unwrap(), 1);

        let response = app.oneshot(get_request("/api/quiz", Some(id))).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["submitted"], true);
        assert_eq!(body["issue"], "Grief");
    }

    #[tokio::test]
    async fn test_submit_quiz_rejects_long_feelings() {
        let state = test_state(ScriptedLLM::default(), &ManualClock::default());

        let response = build_router(state.clone())
            .oneshot(post_json(
                "/api/quiz",
                Some(SessionId::new()),
                json!({"issue": "Stress", "mood": [], "feelings": "x".repeat(56)}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"]
            .as_str()
            .unwrap()
            .contains("at most 55"));
        assert_eq!(state.chat.active_sessions().await.unwrap(), 0);
    }
}
