use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::MessageId;

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// 用户消息
    User,
    /// 模型回复
    Model,
}

impl MessageRole {
    /// Gemini `contents[].role` 使用的角色名
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Model => "model",
        }
    }
}

/// 聊天消息
///
/// 创建后不再修改，转录和模型侧记忆都只追加
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    id: MessageId,
    role: MessageRole,
    text: String,
    created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            text: text.into(),
            created_at,
        }
    }

    /// 创建用户消息
    pub fn user(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(MessageRole::User, text, created_at)
    }

    /// 创建模型消息
    pub fn model(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(MessageRole::Model, text, created_at)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
