use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::chat::domain::SessionId;
use crate::modules::chat::ports::RepositoryError;
use crate::modules::quiz::domain::QuizContext;

/// 问卷答案存储端口
///
/// 以会话 ID 为键保存最近一次提交的问卷
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// 获取会话的问卷答案
    async fn get(&self, session_id: SessionId) -> Result<Option<QuizContext>, RepositoryError>;

    /// 保存问卷答案（覆盖旧值）
    async fn save(
        &self,
        session_id: SessionId,
        quiz: QuizContext,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    /// 清理在 `before` 之前最后更新的条目，返回清理数量
    async fn sweep_stale(&self, before: DateTime<Utc>) -> Result<usize, RepositoryError>;
}
