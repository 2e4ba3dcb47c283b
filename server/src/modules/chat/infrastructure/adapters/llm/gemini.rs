// Gemini 适配器
//
// 调用 generateContent 接口。该接口本身无状态，每次请求携带完整的轮次记忆

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::modules::chat::domain::{ToolCall, ToolDeclaration};
use crate::modules::chat::ports::{FinishReason, GenerateRequest, LLMError, LLMPort, ModelReply};

/// Gemini 适配器配置
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            model: "gemini-2.5-flash-lite".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Gemini API 适配器
pub struct GeminiAdapter {
    client: Client,
    config: GeminiConfig,
}

impl GeminiAdapter {
    pub fn new(config: GeminiConfig) -> Result<Self, LLMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LLMError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取 API URL
    fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// 转换为 Gemini 请求格式
    fn to_gemini_request(request: &GenerateRequest) -> GeminiRequest {
        GeminiRequest {
            contents: request
                .turns
                .iter()
                .map(|turn| GeminiContent {
                    role: Some(turn.role().as_str().to_string()),
                    parts: vec![GeminiPart::text(turn.text())],
                })
                .collect(),
            system_instruction: (!request.system_instruction.is_empty()).then(|| GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(&request.system_instruction)],
            }),
            tools: if request.tools.is_empty() {
                Vec::new()
            } else {
                vec![GeminiTool {
                    function_declarations: request.tools.clone(),
                }]
            },
        }
    }

    /// 从响应中提取文本与工具调用
    fn to_model_reply(response: GeminiResponse) -> Result<ModelReply, LLMError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::InvalidResponse("No candidates in response".to_string()))?;

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();

        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        let tool_calls: Vec<ToolCall> = parts
            .into_iter()
            .filter_map(|p| p.function_call)
            .map(|call| ToolCall::new(call.name, call.args))
            .collect();

        let finish_reason = if tool_calls.is_empty() {
            FinishReason::from_gemini(candidate.finish_reason.as_deref())
        } else {
            FinishReason::FunctionCall
        };

        Ok(ModelReply {
            text,
            tool_calls,
            finish_reason,
        })
    }
}

#[async_trait]
impl LLMPort for GeminiAdapter {
    fn provider_id(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: GenerateRequest) -> Result<ModelReply, LLMError> {
        let gemini_request = Self::to_gemini_request(&request);

        debug!(
            model = %self.config.model,
            turns = gemini_request.contents.len(),
            "Sending Gemini generateContent request"
        );

        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| LLMError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {} - {}", status, error_text);

            return Err(match status.as_u16() {
                429 => LLMError::RateLimitError(error_text),
                401 | 403 => LLMError::AuthenticationError("Invalid API key".to_string()),
                _ => LLMError::ApiError {
                    code: status.to_string(),
                    message: error_text,
                },
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;

        Self::to_model_reply(gemini_response)
    }
}

// Gemini API 类型定义

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    function_call: Option<GeminiFunctionCall>,
}

impl GeminiPart {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            function_call: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiFunctionCall {
    name: String,
    #[serde(default)]
    args: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiTool {
    function_declarations: Vec<ToolDeclaration>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}
