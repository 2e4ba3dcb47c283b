use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::SessionId;
use super::Conversation;

/// 聊天会话
///
/// 会话 ID 与会话句柄的关联，创建后固定时长过期
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    id: SessionId,
    conversation: Conversation,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(
        id: SessionId,
        conversation: Conversation,
        created_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            id,
            conversation,
            created_at,
            expires_at: created_at + ttl,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// 到达过期时间即视为过期
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
