// Quiz Module - 问卷模块
//
// 保存用户在问卷中选择的困扰、心情和感受：
// - domain: 问卷值对象与上下文快照
// - ports: 问卷存储端口
// - infrastructure: 内存存储实现
// - application: 提交命令与查询

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    CommandHandler, GetQuizHandler, GetQuizQuery, GetQuizResponse, QueryHandler,
    SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResponse,
};
pub use domain::{Feelings, Issue, Mood, QuizContext, QuizError, FEELINGS_MAX_CHARS, NOT_ANSWERED};
pub use infrastructure::InMemoryQuizStore;
pub use ports::QuizStore;

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::chat::domain::SessionId;
use crate::modules::chat::ports::RepositoryError;
use crate::shared::Clock;

/// Quiz 模块容器
pub struct QuizModule {
    store: Arc<dyn QuizStore>,
    submit_handler: SubmitQuizHandler,
    get_handler: GetQuizHandler,
}

impl QuizModule {
    /// 使用内存存储创建
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_store(Arc::new(InMemoryQuizStore::new()), clock)
    }

    /// 使用自定义存储创建
    pub fn with_store(store: Arc<dyn QuizStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            submit_handler: SubmitQuizHandler::new(store.clone(), clock),
            get_handler: GetQuizHandler::new(store.clone()),
            store,
        }
    }

    /// 提交问卷
    pub async fn submit(
        &self,
        session_id: SessionId,
        quiz: QuizContext,
    ) -> Result<QuizContext, RepositoryError> {
        let response = self
            .submit_handler
            .handle(SubmitQuizCommand::new(session_id, quiz))
            .await?;
        Ok(response.quiz)
    }

    /// 获取问卷
    pub async fn get(&self, session_id: SessionId) -> Result<GetQuizResponse, RepositoryError> {
        self.get_handler.handle(GetQuizQuery::new(session_id)).await
    }

    /// 清理长时间未更新的问卷
    pub async fn sweep_stale(&self, before: DateTime<Utc>) -> Result<usize, RepositoryError> {
        self.store.sweep_stale(before).await
    }
}
