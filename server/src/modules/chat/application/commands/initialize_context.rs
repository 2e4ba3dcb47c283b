use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler, SessionLifecycle};
use crate::modules::chat::domain::{ChatSession, SessionId};
use crate::modules::quiz::QuizContext;

/// 用问卷答案初始化聊天上下文
///
/// 无论会话是否已存在，总是以新的句柄替换
#[derive(Debug, Clone)]
pub struct InitializeContextCommand {
    pub session_id: SessionId,
    pub quiz: QuizContext,
}

impl InitializeContextCommand {
    pub fn new(session_id: SessionId, quiz: QuizContext) -> Self {
        Self { session_id, quiz }
    }
}

/// 初始化上下文响应
#[derive(Debug, Clone)]
pub struct InitializeContextResponse {
    pub session: ChatSession,
}

/// 初始化上下文命令处理器
pub struct InitializeContextHandler {
    lifecycle: Arc<SessionLifecycle>,
}

impl InitializeContextHandler {
    pub fn new(lifecycle: Arc<SessionLifecycle>) -> Self {
        Self { lifecycle }
    }
}

#[async_trait]
impl CommandHandler<InitializeContextCommand, InitializeContextResponse>
    for InitializeContextHandler
{
    async fn handle(
        &self,
        command: InitializeContextCommand,
    ) -> Result<InitializeContextResponse, ApplicationError> {
        let session = self
            .lifecycle
            .replace(command.session_id, &command.quiz)
            .await?;

        Ok(InitializeContextResponse { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::ContextBuilder;
    use crate::modules::chat::infrastructure::InMemorySessionStore;
    use crate::modules::chat::ports::SessionStore;
    use crate::modules::quiz::{Feelings, Issue, Mood};
    use crate::shared::ManualClock;
    use chrono::Duration;

    #[tokio::test]
    async fn test_initialize_replaces_existing_handle() {
        let store = Arc::new(InMemorySessionStore::new());
        let lifecycle = Arc::new(SessionLifecycle::new(
            store.clone(),
            Arc::new(ManualClock::default()),
            ContextBuilder::default(),
            Duration::hours(1),
        ));
        let handler = InitializeContextHandler::new(lifecycle.clone());
        let id = SessionId::new();

        let (generic, _) = lifecycle.get_or_create(id).await.unwrap();
        lifecycle.save(generic).await.unwrap();

        let quiz = QuizContext::new(
            Some(Issue::Loneliness),
            vec![Mood::Sad, Mood::Bored],
            Feelings::parse("nobody calls").unwrap(),
        );
        let response = handler
            .handle(InitializeContextCommand::new(id, quiz))
            .await
            .unwrap();

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.created_at(), response.session.created_at());
        let instruction = stored.conversation().system_instruction();
        assert!(instruction.contains("support with: Loneliness."));
        assert!(instruction.contains("mood includes: Sad, Bored."));
        assert!(instruction.contains("\"nobody calls\""));
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
