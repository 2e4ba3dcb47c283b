use serde::{Deserialize, Serialize};

use super::super::value_objects::ToolDeclaration;
use super::ChatMessage;

/// 会话句柄
///
/// 保存系统指令、可调用工具以及模型侧的轮次记忆。
/// 每次发送都会把全部轮次重放给无状态的 `generateContent` 接口
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    system_instruction: String,
    tools: Vec<ToolDeclaration>,
    turns: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(
        system_instruction: impl Into<String>,
        tools: Vec<ToolDeclaration>,
        turns: Vec<ChatMessage>,
    ) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            tools,
            turns,
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn tools(&self) -> &[ToolDeclaration] {
        &self.tools
    }

    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    /// 追加一轮对话（用户消息和对应的模型回复）
    pub fn record_exchange(&mut self, user: ChatMessage, model: ChatMessage) {
        self.turns.push(user);
        self.turns.push(model);
    }
}
