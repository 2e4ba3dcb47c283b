use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::chat::domain::{ChatSession, ContextBuilder, SessionId};
use crate::modules::chat::ports::{RepositoryError, SessionStore};
use crate::modules::quiz::QuizContext;
use crate::shared::Clock;

/// 会话生命周期
///
/// 负责按需创建、过期判断、替换与丢弃会话句柄。
/// 过期在每次访问时按注入时钟惰性判断（`now >= expires_at`）
pub struct SessionLifecycle {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    context_builder: ContextBuilder,
    ttl: Duration,
}

impl SessionLifecycle {
    pub fn new(
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        context_builder: ContextBuilder,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            clock,
            context_builder,
            ttl,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn context_builder(&self) -> &ContextBuilder {
        &self.context_builder
    }

    /// 获取未过期的会话；已过期的句柄会被立即删除
    pub async fn active(&self, id: SessionId) -> Result<Option<ChatSession>, RepositoryError> {
        let Some(session) = self.store.get(id).await? else {
            return Ok(None);
        };

        if session.is_expired(self.now()) {
            info!(session_id = %id, "Chat session expired, discarding handle");
            self.store.delete(id).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// 获取或构造会话句柄
    ///
    /// 新句柄使用通用系统指令，只有在 `save` 之后才会写入存储。
    /// 返回值的第二项表示是否为新建
    pub async fn get_or_create(
        &self,
        id: SessionId,
    ) -> Result<(ChatSession, bool), RepositoryError> {
        if let Some(session) = self.active(id).await? {
            return Ok((session, false));
        }

        debug!(session_id = %id, "Creating chat session with generic context");
        Ok((self.build(id, None), true))
    }

    /// 用问卷上下文构造新句柄并替换已有句柄
    pub async fn replace(
        &self,
        id: SessionId,
        quiz: &QuizContext,
    ) -> Result<ChatSession, RepositoryError> {
        let session = self.build(id, Some(quiz));
        self.store.put(session.clone()).await?;

        info!(session_id = %id, "Chat session initialized with quiz context");
        Ok(session)
    }

    pub async fn save(&self, session: ChatSession) -> Result<(), RepositoryError> {
        self.store.put(session).await
    }

    /// 丢弃会话句柄，返回是否存在
    pub async fn discard(&self, id: SessionId) -> Result<bool, RepositoryError> {
        self.store.delete(id).await
    }

    /// 清理所有已过期的句柄
    pub async fn sweep_expired(&self) -> Result<usize, RepositoryError> {
        self.store.sweep_expired(self.now()).await
    }

    pub async fn count(&self) -> Result<usize, RepositoryError> {
        self.store.count().await
    }

    fn build(&self, id: SessionId, quiz: Option<&QuizContext>) -> ChatSession {
        let now = self.now();
        ChatSession::new(
            id,
            self.context_builder.conversation(quiz, now),
            now,
            self.ttl,
        )
    }
}
