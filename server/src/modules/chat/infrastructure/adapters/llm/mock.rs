use async_trait::async_trait;
use serde_json::json;

use crate::modules::chat::domain::{ToolCall, DEFAULT_SEARCH_LIMIT, SEARCH_TOOL_NAME};
use crate::modules::chat::ports::{GenerateRequest, LLMError, LLMPort, ModelReply};

/// 触发资源搜索的关键词
const RESEARCH_KEYWORDS: [&str; 5] = ["research", "study", "studies", "paper", "evidence"];

/// 模拟 LLM 适配器
///
/// 未配置 API Key 时的离线回退：提到研究类关键词时请求资源搜索，否则回显一条鼓励性回复
pub struct MockLLMAdapter;

impl MockLLMAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockLLMAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMPort for MockLLMAdapter {
    fn provider_id(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, request: GenerateRequest) -> Result<ModelReply, LLMError> {
        let user_content = request.latest_user_text().unwrap_or_default();
        let lowered = user_content.to_lowercase();

        let wants_research = request.tools.iter().any(|t| t.name == SEARCH_TOOL_NAME)
            && RESEARCH_KEYWORDS.iter().any(|k| lowered.contains(k));

        if wants_research {
            return Ok(ModelReply::tool_call(ToolCall::new(
                SEARCH_TOOL_NAME,
                json!({"query": user_content, "limit": DEFAULT_SEARCH_LIMIT}),
            )));
        }

        Ok(ModelReply::text(format!(
            "Thanks for sharing that with me. You said: \"{}\". This is a simulated reply; \
             configure a Gemini API key to talk to the real model.",
            user_content
        )))
    }
}
