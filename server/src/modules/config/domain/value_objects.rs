// Config Value Objects
//
// 配置值对象定义

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// API Key 环境变量
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// 监听地址环境变量
pub const ENV_HOST: &str = "BRAIN_BUDDY_HOST";
/// 监听端口环境变量
pub const ENV_PORT: &str = "BRAIN_BUDDY_PORT";
/// 运行环境（production 时启用 Secure Cookie）
pub const ENV_ENVIRONMENT: &str = "BRAIN_BUDDY_ENV";
/// 回复格式环境变量
pub const ENV_PROMPT_FORMAT: &str = "BRAIN_BUDDY_PROMPT_FORMAT";
/// OpenAlex 联系邮箱环境变量
pub const ENV_OPENALEX_MAILTO: &str = "OPENALEX_MAILTO";
/// 配置文件路径环境变量
pub const ENV_CONFIG_PATH: &str = "BRAIN_BUDDY_CONFIG";

/// 模型提供商
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LLMProvider {
    #[default]
    Gemini,
    /// 离线模拟
    Mock,
}

impl LLMProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LLMProvider::Gemini => "gemini",
            LLMProvider::Mock => "mock",
        }
    }
}

impl fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(LLMProvider::Gemini),
            "mock" => Ok(LLMProvider::Mock),
            other => Err(format!("Unknown LLM provider: {}", other)),
        }
    }
}

/// 环境变量覆盖项
///
/// 从进程环境或测试提供的键值对中收集，空值视为未设置
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    vars: HashMap<String, String>,
}

impl EnvOverrides {
    /// 读取当前进程环境
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .filter(|(_, v)| !v.trim().is_empty())
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|v| v.trim())
    }
}
