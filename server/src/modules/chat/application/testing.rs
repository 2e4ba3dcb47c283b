// 应用层测试替身

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::modules::chat::ports::{GenerateRequest, LLMError, LLMPort, ModelReply};
use crate::modules::research::ports::{BibliographyError, BibliographyPort};
use crate::modules::research::ResearchArticle;

/// 按顺序返回预设回复的模型，并记录收到的请求
#[derive(Default)]
pub(crate) struct ScriptedLLM {
    replies: Mutex<VecDeque<Result<ModelReply, LLMError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
    delay: Option<Duration>,
}

impl ScriptedLLM {
    pub(crate) fn new(replies: Vec<Result<ModelReply, LLMError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMPort for ScriptedLLM {
    fn provider_id(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, request: GenerateRequest) -> Result<ModelReply, LLMError> {
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ModelReply::text("ok")))
    }
}

pub(crate) fn article(id: &str) -> ResearchArticle {
    ResearchArticle {
        id: format!("https://openalex.org/{}", id),
        title: format!("Study {}", id),
        authors: vec!["Jane Doe".to_string()],
        publication_date: "2021-03-04".to_string(),
        abstract_text: Some("a short abstract".to_string()),
        doi: None,
        url: format!("https://openalex.org/{}", id),
        citation_count: 42,
    }
}

/// 固定结果的书目来源，记录收到的检索参数
pub(crate) struct StubBibliography {
    articles: Vec<ResearchArticle>,
    fail: bool,
    calls: Mutex<Vec<(String, usize)>>,
}

impl StubBibliography {
    pub(crate) fn with_articles(count: usize) -> Self {
        Self {
            articles: (0..count).map(|i| article(&format!("W{}", i))).collect(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            articles: Vec::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BibliographyPort for StubBibliography {
    fn source_id(&self) -> &str {
        "stub"
    }

    async fn search(
        &self,
        query: &str,
        limit: usize,
        _page: u32,
    ) -> Result<Vec<ResearchArticle>, BibliographyError> {
        self.calls.lock().unwrap().push((query.to_string(), limit));

        if self.fail {
            return Err(BibliographyError::UpstreamError {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        if query.trim().is_empty() {
            return Err(BibliographyError::InvalidArgument(
                "Query must not be empty".to_string(),
            ));
        }

        Ok(self.articles.iter().take(limit).cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Option<ResearchArticle> {
        self.articles.iter().find(|a| a.id.ends_with(id)).cloned()
    }
}
