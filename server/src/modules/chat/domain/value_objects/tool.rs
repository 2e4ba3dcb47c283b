use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// 资源搜索工具名称
pub const SEARCH_TOOL_NAME: &str = "searchResearchArticles";

/// 工具调用未给出 limit 时的默认值
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// 工具声明中允许的最大 limit
pub const MAX_SEARCH_LIMIT: usize = 10;

/// 向模型声明的可调用工具
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDeclaration {
    /// 资源搜索工具：`{query: string, limit: number ≤ 10, 默认 5}`
    pub fn search_resources() -> Self {
        Self {
            name: SEARCH_TOOL_NAME.to_string(),
            description: "Search for academic research papers, studies, and scientific articles \
                related to mental health, psychology, and wellbeing topics. Use this when the user \
                asks for research, studies, papers, or scientific evidence."
                .to_string(),
            parameters: json!({
                "type": "OBJECT",
                "properties": {
                    "query": {
                        "type": "STRING",
                        "description": "The search query for research papers. Include relevant \
                            keywords like the mental health topic, condition, or intervention \
                            being researched."
                    },
                    "limit": {
                        "type": "NUMBER",
                        "description": "Number of results to return (default: 5, max: 10)"
                    }
                },
                "required": ["query"]
            }),
        }
    }
}

/// 模型发起的工具调用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, args: Value) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// 资源搜索工具参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResourcesArgs {
    pub query: String,
    pub limit: usize,
}

impl SearchResourcesArgs {
    /// 从工具调用中提取参数
    ///
    /// 缺失的 query 视为空字符串；limit 缺省为 5，并限制在 1..=10
    pub fn from_call(call: &ToolCall) -> Option<Self> {
        if call.name != SEARCH_TOOL_NAME {
            return None;
        }

        let query = call
            .args
            .get("query")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let limit = call
            .args
            .get("limit")
            .and_then(Value::as_f64)
            .filter(|l| l.is_finite() && *l >= 1.0)
            .map(|l| (l.round() as usize).min(MAX_SEARCH_LIMIT))
            .unwrap_or(DEFAULT_SEARCH_LIMIT);

        Some(Self { query, limit })
    }
}
