use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::chat::domain::{
    ChatMessage, Conversation, MessageRole, ToolCall, ToolDeclaration,
};

/// LLM 错误类型
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {code} - {message}")]
    ApiError { code: String, message: String },

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// 结束原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    Safety,
    FunctionCall,
    Other,
}

impl FinishReason {
    /// 解析 Gemini 的 `finishReason` 字段
    pub fn from_gemini(reason: Option<&str>) -> Self {
        match reason {
            Some("STOP") | None => FinishReason::Stop,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") => FinishReason::Safety,
            Some(_) => FinishReason::Other,
        }
    }
}

/// 生成请求
///
/// 一次发送所需的全部上下文：系统指令、工具、已有轮次以及本轮用户消息
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system_instruction: String,
    pub tools: Vec<ToolDeclaration>,
    pub turns: Vec<ChatMessage>,
}

impl GenerateRequest {
    /// 由会话句柄加上一条新的用户消息构造
    pub fn from_conversation(conversation: &Conversation, user_message: &ChatMessage) -> Self {
        let mut turns = conversation.turns().to_vec();
        turns.push(user_message.clone());

        Self {
            system_instruction: conversation.system_instruction().to_string(),
            tools: conversation.tools().to_vec(),
            turns,
        }
    }

    /// 最后一条用户消息
    pub fn latest_user_text(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role() == MessageRole::User)
            .map(|t| t.text())
    }
}

/// 模型回复
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    /// 所有文本片段拼接后的内容
    pub text: String,
    /// 按出现顺序排列的工具调用
    pub tool_calls: Vec<ToolCall>,
    pub finish_reason: FinishReason,
}

impl ModelReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tool_calls: Vec::new(),
            finish_reason: FinishReason::Stop,
        }
    }

    pub fn tool_call(call: ToolCall) -> Self {
        Self {
            text: String::new(),
            tool_calls: vec![call],
            finish_reason: FinishReason::FunctionCall,
        }
    }

    /// 第一个工具调用，其余调用被忽略
    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.tool_calls.first()
    }
}

/// LLM 服务端口
///
/// 所有模型提供商适配器都必须实现此 trait
#[async_trait]
pub trait LLMPort: Send + Sync {
    /// 获取提供商 ID
    fn provider_id(&self) -> &str;

    /// 使用的模型名称
    fn model(&self) -> &str;

    /// 单次生成请求
    async fn generate(&self, request: GenerateRequest) -> Result<ModelReply, LLMError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::ContextBuilder;
    use chrono::Utc;

    #[test]
    fn test_request_replays_turns_then_user_message() {
        let now = Utc::now();
        let conversation = ContextBuilder::default().conversation(None, now);
        let user = ChatMessage::user("I feel tired", now);

        let request = GenerateRequest::from_conversation(&conversation, &user);

        assert_eq!(request.turns.len(), 2);
        assert_eq!(request.turns[1].text(), "I feel tired");
        assert_eq!(request.latest_user_text(), Some("I feel tired"));
        assert_eq!(request.tools.len(), 1);
        assert_eq!(request.system_instruction, conversation.system_instruction());
    }

    #[test]
    fn test_finish_reason_from_gemini() {
        assert_eq!(FinishReason::from_gemini(Some("STOP")), FinishReason::Stop);
        assert_eq!(FinishReason::from_gemini(Some("MAX_TOKENS")), FinishReason::Length);
        assert_eq!(FinishReason::from_gemini(Some("SAFETY")), FinishReason::Safety);
        assert_eq!(FinishReason::from_gemini(Some("OTHER")), FinishReason::Other);
    }
}
