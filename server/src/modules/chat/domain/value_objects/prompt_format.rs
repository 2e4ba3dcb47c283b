use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 回复格式要求（随部署变体不同）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptFormat {
    #[default]
    PlainText,
    Markdown,
}

impl PromptFormat {
    /// 追加到系统指令末尾的格式要求
    pub fn directive(&self) -> &'static str {
        match self {
            PromptFormat::PlainText => "Return your answer in plain-text with no markdown.",
            PromptFormat::Markdown => {
                "Keep your answers brief and use simple markdown only where it helps readability."
            }
        }
    }
}

impl FromStr for PromptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain_text" | "plain-text" | "plaintext" | "plain" => Ok(PromptFormat::PlainText),
            "markdown" | "md" => Ok(PromptFormat::Markdown),
            other => Err(format!("Unknown prompt format: {}", other)),
        }
    }
}
