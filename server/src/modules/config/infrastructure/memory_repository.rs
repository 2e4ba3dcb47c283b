// In-Memory Config Repository
//
// 基于内存的配置仓储实现（用于测试）

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::config::domain::AppConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 内存配置仓储
pub struct InMemoryConfigRepository {
    config: Arc<RwLock<AppConfig>>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }
}

impl Default for InMemoryConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let config = self.config.read().await;
        Ok(config.clone())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        Ok(true)
    }
}
