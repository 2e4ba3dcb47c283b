use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::research::{ResearchArticle, ResourceResults};

use super::ChatMessage;

/// 聊天转录
///
/// 面向客户端的聊天记录（最新在前）以及累积的研究资料缓存
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    history: Vec<ChatMessage>,
    research: Vec<ResearchArticle>,
    updated_at: DateTime<Utc>,
}

impl Transcript {
    /// 以问候语开始的新转录
    pub fn new(greeting: ChatMessage) -> Self {
        let updated_at = greeting.created_at();
        Self {
            history: vec![greeting],
            research: Vec::new(),
            updated_at,
        }
    }

    /// 最新的消息排在最前
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn research(&self) -> &[ResearchArticle] {
        &self.research
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.updated_at = self.updated_at.max(message.created_at());
        self.history.insert(0, message);
    }

    /// 追加检索结果，已有结果保持不变
    pub fn append_research(&mut self, results: &ResourceResults) {
        self.research
            .extend(results.research_articles.iter().cloned());
    }

    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(at);
    }
}
