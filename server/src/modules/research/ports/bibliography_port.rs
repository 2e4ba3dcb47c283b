use async_trait::async_trait;
use thiserror::Error;

use crate::modules::research::domain::ResearchArticle;

/// 单次请求允许的最大页大小
pub const MAX_PAGE_SIZE: usize = 100;

/// 书目检索错误
#[derive(Debug, Error)]
pub enum BibliographyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Upstream error: {status} {message}")]
    UpstreamError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// 书目检索端口
///
/// 每个学术资源来源都实现此 trait，由资源聚合器统一调用
#[async_trait]
pub trait BibliographyPort: Send + Sync {
    /// 来源标识
    fn source_id(&self) -> &str;

    /// 关键词检索，按被引次数降序，最多返回 `limit` 条
    ///
    /// 查询为空时在发出请求前返回 `InvalidArgument`
    async fn search(
        &self,
        query: &str,
        limit: usize,
        page: u32,
    ) -> Result<Vec<ResearchArticle>, BibliographyError>;

    /// 按 ID 获取单篇文章，任何失败都返回 None
    async fn get_by_id(&self, id: &str) -> Option<ResearchArticle>;
}
