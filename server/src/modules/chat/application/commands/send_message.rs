use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use super::super::{ApplicationError, CancellationRegistry, CommandHandler, SessionLifecycle};
use crate::modules::chat::domain::{ChatMessage, ChatSession, SearchResourcesArgs, SessionId};
use crate::modules::chat::ports::{GenerateRequest, LLMPort, TranscriptStore};
use crate::modules::research::{ResourceAggregator, ResourceResults};

/// 模型请求资源搜索时代为回复的固定文本
pub const SEARCH_ACKNOWLEDGEMENT: &str = "Here are some relevant research papers I found:";

/// 模型没有生成文本时的回复
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

/// 发送消息命令
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub session_id: SessionId,
    pub message: String,
}

impl SendMessageCommand {
    pub fn new(session_id: SessionId, message: impl Into<String>) -> Self {
        Self {
            session_id,
            message: message.into(),
        }
    }
}

/// 发送消息响应
#[derive(Debug, Clone)]
pub struct SendMessageResponse {
    /// 回复文本
    pub text: String,
    /// 工具调用触发的检索结果
    pub search_results: Option<ResourceResults>,
    /// 本次发送是否新建了会话句柄
    pub session_created: bool,
}

/// 发送消息命令处理器
pub struct SendMessageHandler {
    lifecycle: Arc<SessionLifecycle>,
    llm: Arc<dyn LLMPort>,
    aggregator: Arc<ResourceAggregator>,
    transcripts: Arc<dyn TranscriptStore>,
    cancellations: Arc<CancellationRegistry>,
}

impl SendMessageHandler {
    pub fn new(
        lifecycle: Arc<SessionLifecycle>,
        llm: Arc<dyn LLMPort>,
        aggregator: Arc<ResourceAggregator>,
        transcripts: Arc<dyn TranscriptStore>,
        cancellations: Arc<CancellationRegistry>,
    ) -> Self {
        Self {
            lifecycle,
            llm,
            aggregator,
            transcripts,
            cancellations,
        }
    }

    /// 调用模型并在需要时执行资源搜索，不修改任何存储
    async fn respond(
        &self,
        request: GenerateRequest,
    ) -> Result<(String, Option<ResourceResults>), ApplicationError> {
        let reply = self.llm.generate(request).await?;

        debug!(
            provider = self.llm.provider_id(),
            tool_calls = reply.tool_calls.len(),
            "Model reply received"
        );

        if let Some(args) = reply.first_tool_call().and_then(SearchResourcesArgs::from_call) {
            info!(query = %args.query, limit = args.limit, "Model requested research search");
            let results = self.aggregator.search_all(&args.query, args.limit).await;
            return Ok((SEARCH_ACKNOWLEDGEMENT.to_string(), Some(results)));
        }

        if reply.text.trim().is_empty() {
            return Ok((FALLBACK_REPLY.to_string(), None));
        }

        Ok((reply.text, None))
    }

    /// 把本轮对话写回会话句柄和转录
    async fn commit(
        &self,
        mut session: ChatSession,
        user_message: ChatMessage,
        text: &str,
        search_results: Option<&ResourceResults>,
    ) -> Result<(), ApplicationError> {
        let now = self.lifecycle.now();
        let session_id = session.id();
        let model_message = ChatMessage::model(text, now);

        session
            .conversation_mut()
            .record_exchange(user_message.clone(), model_message.clone());
        self.lifecycle.save(session).await?;

        self.transcripts
            .record(
                session_id,
                self.lifecycle.context_builder().greeting(now),
                vec![user_message, model_message],
                search_results.cloned(),
                now,
            )
            .await?;

        Ok(())
    }
}

#[async_trait]
impl CommandHandler<SendMessageCommand, SendMessageResponse> for SendMessageHandler {
    async fn handle(
        &self,
        command: SendMessageCommand,
    ) -> Result<SendMessageResponse, ApplicationError> {
        // 验证输入
        if command.message.trim().is_empty() {
            return Err(ApplicationError::ValidationError(
                "Message cannot be empty".to_string(),
            ));
        }

        let (session, session_created) = self.lifecycle.get_or_create(command.session_id).await?;
        let user_message = ChatMessage::user(&command.message, self.lifecycle.now());
        let request = GenerateRequest::from_conversation(session.conversation(), &user_message);

        let mut ticket = self.cancellations.register(command.session_id).await;
        let outcome = tokio::select! {
            result = self.respond(request) => result,
            _ = ticket.cancelled() => {
                info!(session_id = %command.session_id, "Generation cancelled");
                Err(ApplicationError::Cancelled)
            }
        };
        self.cancellations.finish(&ticket).await;

        let (text, search_results) = outcome?;
        self.commit(session, user_message, &text, search_results.as_ref())
            .await?;

        Ok(SendMessageResponse {
            text,
            search_results,
            session_created,
        })
    }
}
