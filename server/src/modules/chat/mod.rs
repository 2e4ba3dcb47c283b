// Chat Module - 聊天模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含实体、值对象和上下文构建器
// - ports: 端口层，定义模型、会话存储与转录存储的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    ApplicationError, CancellationRegistry, CommandHandler, GetTranscriptHandler,
    GetTranscriptQuery, GetTranscriptResponse, InitializeContextCommand, InitializeContextHandler,
    InitializeContextResponse, QueryHandler, ResetSessionCommand, ResetSessionHandler,
    ResetSessionResponse, SendMessageCommand, SendMessageHandler, SendMessageResponse,
    SessionLifecycle, StopGenerationCommand, StopGenerationHandler, StopGenerationResponse,
    FALLBACK_REPLY, SEARCH_ACKNOWLEDGEMENT,
};

pub use domain::{
    ChatMessage, ChatSession, ContextBuilder, Conversation, MessageId, MessageRole, PromptFormat,
    SessionId, Transcript, GREETING,
};

pub use infrastructure::{
    GeminiAdapter, GeminiConfig, InMemorySessionStore, InMemoryTranscriptStore, MockLLMAdapter,
};

pub use ports::{
    GenerateRequest, LLMError, LLMPort, ModelReply, RepositoryError, SessionStore, TranscriptStore,
};

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::modules::quiz::QuizContext;
use crate::modules::research::ResourceAggregator;
use crate::shared::Clock;

/// 聊天模块配置
#[derive(Debug, Clone, Copy)]
pub struct ChatSettings {
    /// 会话句柄存活时长
    pub session_ttl: Duration,
    pub prompt_format: PromptFormat,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            session_ttl: Duration::hours(1),
            prompt_format: PromptFormat::default(),
        }
    }
}

/// Chat 模块容器
///
/// 管理模块内的依赖注入
pub struct ChatModule {
    llm: Arc<dyn LLMPort>,
    lifecycle: Arc<SessionLifecycle>,
    transcripts: Arc<dyn TranscriptStore>,
    // Handlers
    send_message_handler: SendMessageHandler,
    initialize_context_handler: InitializeContextHandler,
    reset_session_handler: ResetSessionHandler,
    stop_generation_handler: StopGenerationHandler,
    get_transcript_handler: GetTranscriptHandler,
}

impl ChatModule {
    /// 使用内存存储创建
    pub fn new(
        llm: Arc<dyn LLMPort>,
        aggregator: Arc<ResourceAggregator>,
        clock: Arc<dyn Clock>,
        settings: ChatSettings,
    ) -> Self {
        Self::with_stores(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(InMemoryTranscriptStore::new()),
            llm,
            aggregator,
            clock,
            settings,
        )
    }

    /// 使用自定义存储创建
    pub fn with_stores(
        sessions: Arc<dyn SessionStore>,
        transcripts: Arc<dyn TranscriptStore>,
        llm: Arc<dyn LLMPort>,
        aggregator: Arc<ResourceAggregator>,
        clock: Arc<dyn Clock>,
        settings: ChatSettings,
    ) -> Self {
        let lifecycle = Arc::new(SessionLifecycle::new(
            sessions,
            clock,
            ContextBuilder::new(settings.prompt_format),
            settings.session_ttl,
        ));
        let cancellations = Arc::new(CancellationRegistry::new());

        let send_message_handler = SendMessageHandler::new(
            lifecycle.clone(),
            llm.clone(),
            aggregator,
            transcripts.clone(),
            cancellations.clone(),
        );
        let initialize_context_handler = InitializeContextHandler::new(lifecycle.clone());
        let reset_session_handler = ResetSessionHandler::new(
            lifecycle.clone(),
            transcripts.clone(),
            cancellations.clone(),
        );
        let stop_generation_handler = StopGenerationHandler::new(cancellations);
        let get_transcript_handler =
            GetTranscriptHandler::new(transcripts.clone(), lifecycle.clone());

        Self {
            llm,
            lifecycle,
            transcripts,
            send_message_handler,
            initialize_context_handler,
            reset_session_handler,
            stop_generation_handler,
            get_transcript_handler,
        }
    }

    // Command handlers

    /// 发送消息
    pub async fn send_message(
        &self,
        session_id: SessionId,
        message: impl Into<String>,
    ) -> Result<SendMessageResponse, ApplicationError> {
        self.send_message_handler
            .handle(SendMessageCommand::new(session_id, message))
            .await
    }

    /// 用问卷答案初始化上下文
    pub async fn initialize_context(
        &self,
        session_id: SessionId,
        quiz: QuizContext,
    ) -> Result<InitializeContextResponse, ApplicationError> {
        self.initialize_context_handler
            .handle(InitializeContextCommand::new(session_id, quiz))
            .await
    }

    /// 重置会话
    pub async fn reset(&self, session_id: SessionId) -> Result<ResetSessionResponse, ApplicationError> {
        self.reset_session_handler
            .handle(ResetSessionCommand::new(session_id))
            .await
    }

    /// 停止进行中的生成
    pub async fn stop_generation(
        &self,
        session_id: SessionId,
    ) -> Result<StopGenerationResponse, ApplicationError> {
        self.stop_generation_handler
            .handle(StopGenerationCommand::new(session_id))
            .await
    }

    // Query handlers

    /// 获取聊天转录
    pub async fn transcript(
        &self,
        session_id: SessionId,
    ) -> Result<GetTranscriptResponse, ApplicationError> {
        self.get_transcript_handler
            .handle(GetTranscriptQuery::new(session_id))
            .await
    }

    // Maintenance

    /// 清理过期的会话句柄
    pub async fn sweep_expired(&self) -> Result<usize, RepositoryError> {
        self.lifecycle.sweep_expired().await
    }

    /// 清理 `before` 之前最后更新的转录
    pub async fn sweep_stale_transcripts(
        &self,
        before: DateTime<Utc>,
    ) -> Result<usize, RepositoryError> {
        self.transcripts.sweep_stale(before).await
    }

    /// 当前存活的会话句柄数
    pub async fn active_sessions(&self) -> Result<usize, RepositoryError> {
        self.lifecycle.count().await
    }

    // Accessors

    pub fn llm(&self) -> &Arc<dyn LLMPort> {
        &self.llm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::application::testing::{ScriptedLLM, StubBibliography};
    use crate::modules::quiz::{Feelings, Issue, Mood};
    use crate::shared::ManualClock;
    use serde_json::json;

    fn module(llm: ScriptedLLM, clock: &ManualClock) -> (ChatModule, Arc<ScriptedLLM>) {
        let llm = Arc::new(llm);
        let aggregator = Arc::new(ResourceAggregator::new(vec![Arc::new(
            StubBibliography::with_articles(6),
        )]));
        let module = ChatModule::new(
            llm.clone(),
            aggregator,
            Arc::new(clock.clone()),
            ChatSettings::default(),
        );
        (module, llm)
    }

    #[tokio::test]
    async fn test_chat_module_integration() {
        let clock = ManualClock::default();
        let (module, llm) = module(
            ScriptedLLM::new(vec![
                Ok(ModelReply::text("That sounds hard.")),
                Ok(ModelReply::tool_call(domain::ToolCall::new(
                    "searchResearchArticles",
                    json!({"query": "burnout recovery", "limit": 2}),
                ))),
            ]),
            &clock,
        );
        let id = SessionId::new();
        let quiz = QuizContext::new(
            Some(Issue::Burnout),
            vec![Mood::Worried],
            Feelings::parse("exhausted").unwrap(),
        );

        // 问卷初始化后发送消息
        module.initialize_context(id, quiz).await.unwrap();
        assert_eq!(module.active_sessions().await.unwrap(), 1);

        let first = module.send_message(id, "I can't keep up").await.unwrap();
        assert_eq!(first.text, "That sounds hard.");
        assert!(!first.session_created);
        assert!(llm.requests()[0]
            .system_instruction
            .contains("support with: Burnout."));

        // 工具调用
        let second = module.send_message(id, "any studies?").await.unwrap();
        assert_eq!(second.text, SEARCH_ACKNOWLEDGEMENT);
        assert_eq!(second.search_results.unwrap().len(), 2);

        let transcript = module.transcript(id).await.unwrap();
        assert_eq!(transcript.history.len(), 5);
        assert_eq!(transcript.research.len(), 2);

        // 重置
        let reset = module.reset(id).await.unwrap();
        assert!(reset.existed);
        assert_eq!(module.active_sessions().await.unwrap(), 0);
        assert_eq!(module.transcript(id).await.unwrap().history.len(), 1);
    }

    #[tokio::test]
    async fn test_sweep_removes_expired_sessions() {
        let clock = ManualClock::default();
        let (module, _) = module(ScriptedLLM::default(), &clock);

        module.send_message(SessionId::new(), "hello").await.unwrap();
        clock.advance(Duration::minutes(30));
        module.send_message(SessionId::new(), "hello").await.unwrap();
        clock.advance(Duration::minutes(31));

        assert_eq!(module.sweep_expired().await.unwrap(), 1);
        assert_eq!(module.active_sessions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stop_without_generation() {
        let clock = ManualClock::default();
        let (module, _) = module(ScriptedLLM::default(), &clock);

        let response = module.stop_generation(SessionId::new()).await.unwrap();
        assert!(!response.cancelled);
    }
}
