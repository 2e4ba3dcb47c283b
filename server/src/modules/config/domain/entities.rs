// Config Domain Entities
//
// 配置领域实体定义

use serde::{Deserialize, Serialize};

use super::value_objects::{
    EnvOverrides, LLMProvider, ENV_API_KEY, ENV_ENVIRONMENT, ENV_HOST, ENV_OPENALEX_MAILTO,
    ENV_PORT, ENV_PROMPT_FORMAT,
};
use crate::modules::chat::PromptFormat;

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 单个请求的超时时间
    pub request_timeout_secs: u64,
    /// 生产环境下会话 Cookie 带 Secure 属性
    pub production: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: 60,
            production: false,
        }
    }
}

/// 模型配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub prompt_format: PromptFormat,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::Gemini,
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash-lite".to_string(),
            timeout_secs: 30,
            prompt_format: PromptFormat::PlainText,
        }
    }
}

impl LLMConfig {
    /// 是否能连接真实模型
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// 书目检索配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BibliographyConfig {
    pub base_url: String,
    pub user_agent: String,
    pub mailto: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BibliographyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openalex.org".to_string(),
            user_agent: concat!("BrainBuddy/", env!("CARGO_PKG_VERSION")).to_string(),
            mailto: None,
            timeout_secs: 15,
        }
    }
}

/// 会话配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// 会话句柄存活时长
    pub ttl_secs: u64,
    /// 过期清理间隔
    pub sweep_interval_secs: u64,
    /// 问卷与转录在无更新多久后被清理
    pub stale_after_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 60 * 60,
            sweep_interval_secs: 5 * 60,
            stale_after_secs: 24 * 60 * 60,
        }
    }
}

/// 应用配置聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub bibliography: BibliographyConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// 创建新的默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 应用环境变量覆盖
    pub fn apply_overrides(&mut self, overrides: &EnvOverrides) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(api_key) = overrides.get(ENV_API_KEY) {
            self.llm.api_key = api_key.to_string();
        }
        if let Some(host) = overrides.get(ENV_HOST) {
            self.server.host = host.to_string();
        }
        if let Some(port) = overrides.get(ENV_PORT) {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => errors.push(format!("{} must be a port number, got {}", ENV_PORT, port)),
            }
        }
        if let Some(environment) = overrides.get(ENV_ENVIRONMENT) {
            self.server.production = environment.eq_ignore_ascii_case("production");
        }
        if let Some(format) = overrides.get(ENV_PROMPT_FORMAT) {
            match format.parse::<PromptFormat>() {
                Ok(format) => self.llm.prompt_format = format,
                Err(e) => errors.push(e),
            }
        }
        if let Some(mailto) = overrides.get(ENV_OPENALEX_MAILTO) {
            self.bibliography.mailto = Some(mailto.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.request_timeout_secs == 0 {
            errors.push("Server request timeout must be greater than 0".to_string());
        }
        if self.llm.timeout_secs == 0 {
            errors.push("LLM timeout must be greater than 0".to_string());
        }
        if self.llm.model.trim().is_empty() {
            errors.push("LLM model must not be empty".to_string());
        }
        if self.bibliography.timeout_secs == 0 {
            errors.push("Bibliography timeout must be greater than 0".to_string());
        }
        if self.session.ttl_secs == 0 {
            errors.push("Session ttl must be greater than 0".to_string());
        }
        if self.session.sweep_interval_secs == 0 {
            errors.push("Session sweep interval must be greater than 0".to_string());
        }
        if self.session.stale_after_secs == 0 {
            errors.push("Stale threshold must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "gemini-2.5-flash-lite");
        assert_eq!(config.session.ttl_secs, 3600);
        assert_eq!(config.session.sweep_interval_secs, 300);
        assert!(!config.server.production);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"port": 8080}, "llm": {"promptFormat": "markdown"}}"#)
                .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.prompt_format, PromptFormat::Markdown);
        assert_eq!(config.bibliography.base_url, "https://api.openalex.org");
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let mut config = AppConfig::default();
        config.llm.api_key = "secret".to_string();

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = AppConfig::default();
        let overrides = EnvOverrides::from_pairs([
            (ENV_API_KEY, "key-123"),
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, "8080"),
            (ENV_ENVIRONMENT, "Production"),
            (ENV_PROMPT_FORMAT, "markdown"),
            (ENV_OPENALEX_MAILTO, "ops@example.org"),
        ]);

        config.apply_overrides(&overrides).unwrap();

        assert!(config.llm.has_api_key());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.production);
        assert_eq!(config.llm.prompt_format, PromptFormat::Markdown);
        assert_eq!(config.bibliography.mailto.as_deref(), Some("ops@example.org"));
    }

    #[test]
    fn test_invalid_overrides_are_reported() {
        let mut config = AppConfig::default();
        let overrides =
            EnvOverrides::from_pairs([(ENV_PORT, "eighty"), (ENV_PROMPT_FORMAT, "html")]);

        let errors = config.apply_overrides(&overrides).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_rejects_zero_durations() {
        let mut config = AppConfig::default();
        config.session.ttl_secs = 0;
        config.llm.timeout_secs = 0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
