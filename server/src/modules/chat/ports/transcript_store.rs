use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::research::ResourceResults;

use super::super::domain::{ChatMessage, SessionId, Transcript};
use super::RepositoryError;

/// 转录存储端口
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// 获取会话的转录
    async fn get(&self, id: SessionId) -> Result<Option<Transcript>, RepositoryError>;

    /// 记录一轮对话
    ///
    /// 转录不存在时以 `greeting` 开始一份新的转录
    async fn record(
        &self,
        id: SessionId,
        greeting: ChatMessage,
        messages: Vec<ChatMessage>,
        research: Option<ResourceResults>,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    /// 清除会话的转录
    async fn clear(&self, id: SessionId) -> Result<(), RepositoryError>;

    /// 删除 `before` 之前最后更新的转录
    async fn sweep_stale(&self, before: DateTime<Utc>) -> Result<usize, RepositoryError>;
}
