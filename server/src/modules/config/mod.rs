// Config Module
//
// 配置管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含配置实体、值对象与校验规则
// - ports: 端口层，定义配置来源的抽象接口
// - infrastructure: 基础设施层，实现文件与内存配置仓储
// - application: 应用层，合并配置文件与环境变量

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{
    AppConfig, BibliographyConfig, EnvOverrides, LLMConfig, LLMProvider, ServerConfig,
    SessionConfig, ENV_CONFIG_PATH,
};

// Ports
pub use ports::{ConfigError, ConfigRepository};

// Infrastructure
pub use infrastructure::{FileConfigRepository, InMemoryConfigRepository, DEFAULT_CONFIG_FILE};

// Application
pub use application::{LoadConfigHandler, LoadConfigQuery, LoadConfigResponse, QueryHandler};

use std::sync::Arc;

/// Config 模块容器
///
/// 管理模块内的依赖注入
pub struct ConfigModule {
    load_handler: LoadConfigHandler,
    overrides: EnvOverrides,
}

impl ConfigModule {
    /// 从进程环境创建：配置文件路径取自 `BRAIN_BUDDY_CONFIG`
    pub fn from_env() -> Self {
        let overrides = EnvOverrides::from_env();
        let path = overrides
            .get(ENV_CONFIG_PATH)
            .unwrap_or(DEFAULT_CONFIG_FILE)
            .to_string();

        Self::with_repository(Arc::new(FileConfigRepository::new(path)), overrides)
    }

    /// 使用自定义仓储与环境覆盖创建
    pub fn with_repository(repository: Arc<dyn ConfigRepository>, overrides: EnvOverrides) -> Self {
        Self {
            load_handler: LoadConfigHandler::new(repository),
            overrides,
        }
    }

    /// 加载生效配置
    pub async fn load(&self) -> Result<AppConfig, ConfigError> {
        let response = self
            .load_handler
            .handle(LoadConfigQuery::new(self.overrides.clone()))
            .await?;
        Ok(response.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::domain::{ENV_API_KEY, ENV_ENVIRONMENT};

    #[tokio::test]
    async fn test_config_module_integration() {
        let module = ConfigModule::with_repository(
            Arc::new(InMemoryConfigRepository::new()),
            EnvOverrides::from_pairs([(ENV_API_KEY, "key"), (ENV_ENVIRONMENT, "production")]),
        );

        let config = module.load().await.unwrap();

        assert_eq!(config.llm.provider, LLMProvider::Gemini);
        assert!(config.server.production);
        assert_eq!(config.session.ttl_secs, 3600);
    }
}
