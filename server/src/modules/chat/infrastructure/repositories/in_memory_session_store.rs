use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::chat::domain::{ChatSession, SessionId};
use crate::modules::chat::ports::{RepositoryError, SessionStore};

/// 内存会话存储
///
/// 进程重启后所有会话句柄丢失
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, ChatSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: SessionId) -> Result<Option<ChatSession>, RepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).cloned())
    }

    async fn put(&self, session: ChatSession) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session);
        Ok(())
    }

    async fn delete(&self, id: SessionId) -> Result<bool, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(&id).is_some())
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        Ok(before - sessions.len())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.len())
    }
}
