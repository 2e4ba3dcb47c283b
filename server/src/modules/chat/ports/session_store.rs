use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use super::super::domain::{ChatSession, SessionId};

/// 仓储错误类型
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 会话存储端口
///
/// 每个会话 ID 至多保存一个会话句柄
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 根据 ID 获取会话（不做过期判断）
    async fn get(&self, id: SessionId) -> Result<Option<ChatSession>, RepositoryError>;

    /// 保存会话，覆盖同 ID 的旧句柄
    async fn put(&self, session: ChatSession) -> Result<(), RepositoryError>;

    /// 删除会话，返回是否存在
    async fn delete(&self, id: SessionId) -> Result<bool, RepositoryError>;

    /// 删除所有在 `now` 时已过期的会话，返回删除数量
    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, RepositoryError>;

    /// 当前保存的会话数
    async fn count(&self) -> Result<usize, RepositoryError>;
}
