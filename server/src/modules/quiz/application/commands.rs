// Quiz Commands

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::chat::domain::SessionId;
use crate::modules::chat::ports::RepositoryError;
use crate::modules::quiz::domain::QuizContext;
use crate::modules::quiz::ports::QuizStore;
use crate::shared::Clock;

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler<C> {
    type Output;
    type Error;

    async fn handle(&self, command: C) -> Result<Self::Output, Self::Error>;
}

/// 提交问卷命令
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub session_id: SessionId,
    pub quiz: QuizContext,
}

impl SubmitQuizCommand {
    pub fn new(session_id: SessionId, quiz: QuizContext) -> Self {
        Self { session_id, quiz }
    }
}

/// 提交问卷响应
#[derive(Debug, Clone)]
pub struct SubmitQuizResponse {
    pub quiz: QuizContext,
}

/// 提交问卷处理器
pub struct SubmitQuizHandler {
    store: Arc<dyn QuizStore>,
    clock: Arc<dyn Clock>,
}

impl SubmitQuizHandler {
    pub fn new(store: Arc<dyn QuizStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl CommandHandler<SubmitQuizCommand> for SubmitQuizHandler {
    type Output = SubmitQuizResponse;
    type Error = RepositoryError;

    async fn handle(&self, command: SubmitQuizCommand) -> Result<Self::Output, Self::Error> {
        tracing::debug!(
            session_id = %command.session_id,
            issue = ?command.quiz.issue,
            moods = command.quiz.mood.len(),
            "Saving quiz answers"
        );

        self.store
            .save(command.session_id, command.quiz.clone(), self.clock.now())
            .await?;

        Ok(SubmitQuizResponse { quiz: command.quiz })
    }
}
