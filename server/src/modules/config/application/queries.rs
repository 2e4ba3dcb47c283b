// Config Queries
//
// 配置相关的查询处理器

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::config::domain::{AppConfig, EnvOverrides, LLMProvider};
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 查询处理器 trait
#[async_trait]
pub trait QueryHandler<Q> {
    type Output;
    type Error;

    async fn handle(&self, query: Q) -> Result<Self::Output, Self::Error>;
}

/// 加载生效配置查询
///
/// 合并顺序：默认值 → 配置文件 → 环境变量
#[derive(Debug, Clone, Default)]
pub struct LoadConfigQuery {
    pub overrides: EnvOverrides,
}

impl LoadConfigQuery {
    pub fn new(overrides: EnvOverrides) -> Self {
        Self { overrides }
    }
}

/// 加载配置响应
#[derive(Debug, Clone)]
pub struct LoadConfigResponse {
    pub config: AppConfig,
}

/// 加载配置查询处理器
pub struct LoadConfigHandler {
    repository: Arc<dyn ConfigRepository>,
}

impl LoadConfigHandler {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<LoadConfigQuery> for LoadConfigHandler {
    type Output = LoadConfigResponse;
    type Error = ConfigError;

    async fn handle(&self, query: LoadConfigQuery) -> Result<Self::Output, Self::Error> {
        let mut config = self.repository.load().await?;

        config
            .apply_overrides(&query.overrides)
            .map_err(|errors| ConfigError::ValidationError { errors })?;
        config
            .validate()
            .map_err(|errors| ConfigError::ValidationError { errors })?;

        if config.llm.provider == LLMProvider::Gemini && !config.llm.has_api_key() {
            warn!("No Gemini API key configured, falling back to the offline mock model");
            config.llm.provider = LLMProvider::Mock;
        }

        Ok(LoadConfigResponse { config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::domain::{ENV_API_KEY, ENV_PORT};
    use crate::modules::config::infrastructure::InMemoryConfigRepository;

    #[tokio::test]
    async fn test_missing_api_key_falls_back_to_mock() {
        let handler = LoadConfigHandler::new(Arc::new(InMemoryConfigRepository::new()));

        let response = handler.handle(LoadConfigQuery::default()).await.unwrap();

        assert_eq!(response.config.llm.provider, LLMProvider::Mock);
    }

    #[tokio::test]
    async fn test_env_overrides_win_over_repository() {
        let mut stored = AppConfig::default();
        stored.server.port = 4000;
        let handler =
            LoadConfigHandler::new(Arc::new(InMemoryConfigRepository::with_config(stored)));

        let response = handler
            .handle(LoadConfigQuery::new(EnvOverrides::from_pairs([
                (ENV_PORT, "5000"),
                (ENV_API_KEY, "key"),
            ])))
            .await
            .unwrap();

        assert_eq!(response.config.server.port, 5000);
        assert_eq!(response.config.llm.provider, LLMProvider::Gemini);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let mut stored = AppConfig::default();
        stored.session.sweep_interval_secs = 0;
        let handler =
            LoadConfigHandler::new(Arc::new(InMemoryConfigRepository::with_config(stored)));

        let result = handler.handle(LoadConfigQuery::default()).await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
