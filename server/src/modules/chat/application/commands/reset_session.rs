use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::super::{ApplicationError, CancellationRegistry, CommandHandler, SessionLifecycle};
use crate::modules::chat::domain::SessionId;
use crate::modules::chat::ports::TranscriptStore;

/// 重置会话命令
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    pub session_id: SessionId,
}

impl ResetSessionCommand {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

/// 重置会话响应
#[derive(Debug, Clone)]
pub struct ResetSessionResponse {
    /// 重置前是否存在会话句柄
    pub existed: bool,
}

/// 重置会话命令处理器
///
/// 立即丢弃会话句柄与转录，并取消进行中的生成
pub struct ResetSessionHandler {
    lifecycle: Arc<SessionLifecycle>,
    transcripts: Arc<dyn TranscriptStore>,
    cancellations: Arc<CancellationRegistry>,
}

impl ResetSessionHandler {
    pub fn new(
        lifecycle: Arc<SessionLifecycle>,
        transcripts: Arc<dyn TranscriptStore>,
        cancellations: Arc<CancellationRegistry>,
    ) -> Self {
        Self {
            lifecycle,
            transcripts,
            cancellations,
        }
    }
}

#[async_trait]
impl CommandHandler<ResetSessionCommand, ResetSessionResponse> for ResetSessionHandler {
    async fn handle(
        &self,
        command: ResetSessionCommand,
    ) -> Result<ResetSessionResponse, ApplicationError> {
        self.cancellations.cancel(command.session_id).await;
        let existed = self.lifecycle.discard(command.session_id).await?;
        self.transcripts.clear(command.session_id).await?;

        info!(session_id = %command.session_id, existed, "Chat session reset");

        Ok(ResetSessionResponse { existed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{ChatMessage, ContextBuilder};
    use crate::modules::chat::infrastructure::{InMemorySessionStore, InMemoryTranscriptStore};
    use crate::modules::chat::ports::SessionStore;
    use crate::shared::ManualClock;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_reset_discards_handle_and_transcript() {
        let store = Arc::new(InMemorySessionStore::new());
        let transcripts = Arc::new(InMemoryTranscriptStore::new());
        let lifecycle = Arc::new(SessionLifecycle::new(
            store.clone(),
            Arc::new(ManualClock::default()),
            ContextBuilder::default(),
            Duration::hours(1),
        ));
        let handler = ResetSessionHandler::new(
            lifecycle.clone(),
            transcripts.clone(),
            Arc::new(CancellationRegistry::new()),
        );
        let id = SessionId::new();

        let (session, _) = lifecycle.get_or_create(id).await.unwrap();
        lifecycle.save(session).await.unwrap();
        transcripts
            .record(id, ChatMessage::model("hi", Utc::now()), Vec::new(), None, Utc::now())
            .await
            .unwrap();

        let response = handler.handle(ResetSessionCommand::new(id)).await.unwrap();
        assert!(response.existed);
        assert!(store.get(id).await.unwrap().is_none());
        assert!(transcripts.get(id).await.unwrap().is_none());

        let again = handler.handle(ResetSessionCommand::new(id)).await.unwrap();
        assert!(!again.existed);
    }
}
