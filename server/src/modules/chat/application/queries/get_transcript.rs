use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler, SessionLifecycle};
use crate::modules::chat::domain::{ChatMessage, SessionId, Transcript};
use crate::modules::chat::ports::TranscriptStore;
use crate::modules::research::ResearchArticle;

/// 获取聊天转录查询
#[derive(Debug, Clone)]
pub struct GetTranscriptQuery {
    pub session_id: SessionId,
}

impl GetTranscriptQuery {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

/// 聊天转录响应
#[derive(Debug, Clone)]
pub struct GetTranscriptResponse {
    /// 最新的消息在前
    pub history: Vec<ChatMessage>,
    pub research: Vec<ResearchArticle>,
}

impl From<Transcript> for GetTranscriptResponse {
    fn from(transcript: Transcript) -> Self {
        Self {
            history: transcript.history().to_vec(),
            research: transcript.research().to_vec(),
        }
    }
}

/// 获取聊天转录查询处理器
///
/// 尚无转录时返回只含问候语的记录
pub struct GetTranscriptHandler {
    transcripts: Arc<dyn TranscriptStore>,
    lifecycle: Arc<SessionLifecycle>,
}

impl GetTranscriptHandler {
    pub fn new(transcripts: Arc<dyn TranscriptStore>, lifecycle: Arc<SessionLifecycle>) -> Self {
        Self {
            transcripts,
            lifecycle,
        }
    }
}

#[async_trait]
impl QueryHandler<GetTranscriptQuery, GetTranscriptResponse> for GetTranscriptHandler {
    async fn handle(
        &self,
        query: GetTranscriptQuery,
    ) -> Result<GetTranscriptResponse, ApplicationError> {
        let transcript = match self.transcripts.get(query.session_id).await? {
            Some(transcript) => transcript,
            None => Transcript::new(
                self.lifecycle
                    .context_builder()
                    .greeting(self.lifecycle.now()),
            ),
        };

        Ok(transcript.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{ContextBuilder, MessageRole, GREETING};
    use crate::modules::chat::infrastructure::{InMemorySessionStore, InMemoryTranscriptStore};
    use crate::shared::ManualClock;
    use chrono::Duration;

    fn handler(transcripts: Arc<InMemoryTranscriptStore>) -> GetTranscriptHandler {
        let lifecycle = Arc::new(SessionLifecycle::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(ManualClock::default()),
            ContextBuilder::default(),
            Duration::hours(1),
        ));
        GetTranscriptHandler::new(transcripts, lifecycle)
    }

    #[tokio::test]
    async fn test_unknown_session_gets_greeting_only() {
        let handler = handler(Arc::new(InMemoryTranscriptStore::new()));

        let response = handler
            .handle(GetTranscriptQuery::new(SessionId::new()))
            .await
            .unwrap();

        assert_eq!(response.history.len(), 1);
        assert_eq!(response.history[0].role(), MessageRole::Model);
        assert_eq!(response.history[0].text(), GREETING);
        assert!(response.research.is_empty());
    }

    #[tokio::test]
    async fn test_returns_recorded_history_newest_first() {
        let transcripts = Arc::new(InMemoryTranscriptStore::new());
        let handler = handler(transcripts.clone());
        let id = SessionId::new();
        let now = chrono::Utc::now();

        transcripts
            .record(
                id,
                ChatMessage::model(GREETING, now),
                vec![ChatMessage::user("hello", now), ChatMessage::model("hi!", now)],
                None,
                now,
            )
            .await
            .unwrap();

        let response = handler.handle(GetTranscriptQuery::new(id)).await.unwrap();
        let texts: Vec<_> = response.history.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["hi!", "hello", GREETING]);
    }
}
