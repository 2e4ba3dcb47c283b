use chrono::{DateTime, Utc};

use crate::modules::quiz::QuizContext;

use super::super::entities::{ChatMessage, Conversation};
use super::super::value_objects::{PromptFormat, ToolDeclaration};

/// 固定的人设前言
pub const PERSONA_PREAMBLE: &str = "You are an AI chat bot named Brain Buddy. Your goal is to \
motivate and uplift the user as well as dive deeper into their condition and current mood and \
feelings.";

/// 始终追加的语气要求
pub const TAILOR_DIRECTIVE: &str =
    "Tailor your responses to be empathetic and relevant to their specific situation.";

/// 每个新会话句柄开头的问候语
pub const GREETING: &str = "Hi there! I'm Brain Buddy. Here to help you uplift and motivate \
yourself while providing research resources on what you're dealing with.";

/// 上下文构建器
///
/// 领域服务：根据问卷答案生成系统指令，并构造新的会话句柄
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextBuilder {
    format: PromptFormat,
}

impl ContextBuilder {
    pub fn new(format: PromptFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> PromptFormat {
        self.format
    }

    /// 构建系统指令
    ///
    /// 段落之间以空行分隔；相同输入总是得到相同输出
    pub fn system_instruction(&self, quiz: Option<&QuizContext>) -> String {
        let mut paragraphs = vec![PERSONA_PREAMBLE.to_string()];

        if let Some(quiz) = quiz {
            if let Some(issue) = quiz.issue {
                paragraphs.push(format!(
                    "The user has indicated they need support with: {}.",
                    issue
                ));
            }

            if !quiz.mood.is_empty() {
                let moods: Vec<&str> = quiz.mood.iter().map(|m| m.display_name()).collect();
                paragraphs.push(format!(
                    "The user's current mood includes: {}.",
                    moods.join(", ")
                ));
            }

            if let Some(feelings) = quiz.answered_feelings() {
                paragraphs.push(format!(
                    "The user described their feelings as: \"{}\".",
                    feelings
                ));
            }
        }

        paragraphs.push(TAILOR_DIRECTIVE.to_string());
        paragraphs.push(self.format.directive().to_string());

        paragraphs.join("\n\n")
    }

    /// 问候语消息
    pub fn greeting(&self, at: DateTime<Utc>) -> ChatMessage {
        ChatMessage::model(GREETING, at)
    }

    /// 可调用的工具声明
    pub fn tools(&self) -> Vec<ToolDeclaration> {
        vec![ToolDeclaration::search_resources()]
    }

    /// 构造新的会话句柄：系统指令、工具以及问候语轮次
    pub fn conversation(&self, quiz: Option<&QuizContext>, at: DateTime<Utc>) -> Conversation {
        Conversation::new(
            self.system_instruction(quiz),
            self.tools(),
            vec![self.greeting(at)],
        )
    }
}
