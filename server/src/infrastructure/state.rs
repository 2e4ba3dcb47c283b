use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::info;

use crate::modules::chat::{ChatSettings, GeminiAdapter, GeminiConfig, LLMPort, MockLLMAdapter};
use crate::modules::config::{AppConfig, LLMProvider};
use crate::modules::research::OpenAlexConfig;
use crate::modules::{ChatModule, QuizModule, ResearchModule};
use crate::shared::{AppError, AppResult, Clock, SystemClock};

/// 应用全局状态
///
/// 各模块自行管理内部存储，这里只负责组装和共享
pub struct AppState {
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
    pub chat: ChatModule,
    pub quiz: QuizModule,
    pub research: ResearchModule,
    pub started_at: DateTime<Utc>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(
        config: AppConfig,
        clock: Arc<dyn Clock>,
        chat: ChatModule,
        quiz: QuizModule,
        research: ResearchModule,
    ) -> Self {
        Self {
            started_at: clock.now(),
            config,
            clock,
            chat,
            quiz,
            research,
        }
    }

    /// 根据生效配置组装所有模块
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let research = ResearchModule::new(OpenAlexConfig {
            base_url: config.bibliography.base_url.clone(),
            user_agent: config.bibliography.user_agent.clone(),
            mailto: config.bibliography.mailto.clone(),
            timeout_secs: config.bibliography.timeout_secs,
        })?;

        let llm = build_llm(&config)?;
        info!(
            "Using LLM provider {} (model {})",
            llm.provider_id(),
            llm.model()
        );

        let chat = ChatModule::new(
            llm,
            research.aggregator().clone(),
            clock.clone(),
            chat_settings(&config),
        );
        let quiz = QuizModule::new(clock.clone());

        Ok(Self::new(config, clock, chat, quiz, research))
    }
}

fn build_llm(config: &AppConfig) -> AppResult<Arc<dyn LLMPort>> {
    match config.llm.provider {
        LLMProvider::Gemini => {
            let adapter = GeminiAdapter::new(GeminiConfig {
                base_url: config.llm.base_url.clone(),
                api_key: config.llm.api_key.clone(),
                model: config.llm.model.clone(),
                timeout_secs: config.llm.timeout_secs,
            })
            .map_err(|e| AppError::ConfigError(e.to_string()))?;
            Ok(Arc::new(adapter))
        }
        LLMProvider::Mock => Ok(Arc::new(MockLLMAdapter::new())),
    }
}

fn chat_settings(config: &AppConfig) -> ChatSettings {
    ChatSettings {
        session_ttl: Duration::seconds(config.session.ttl_secs as i64),
        prompt_format: config.llm.prompt_format,
    }
}

/// 测试用状态：脚本模型、固定书目来源和手动时钟
#[cfg(test)]
pub(crate) fn test_state(
    llm: crate::modules::chat::application::testing::ScriptedLLM,
    clock: &crate::shared::ManualClock,
) -> SharedState {
    use crate::modules::chat::application::testing::StubBibliography;

    let clock: Arc<dyn Clock> = Arc::new(clock.clone());
    let research =
        ResearchModule::with_sources(Arc::new(StubBibliography::with_articles(3)), Vec::new());
    let chat = ChatModule::new(
        Arc::new(llm),
        research.aggregator().clone(),
        clock.clone(),
        ChatSettings::default(),
    );
    let quiz = QuizModule::new(clock.clone());

    Arc::new(AppState::new(AppConfig::default(), clock, chat, quiz, research))
}
