// Research Module - 学术资源模块
//
// - domain: 文章实体、倒排摘要还原
// - ports: 书目检索端口
// - infrastructure: OpenAlex 适配器
// - application: 资源聚合器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::ResourceAggregator;
pub use domain::{reconstruct_abstract, InvertedIndex, ResearchArticle, ResourceResults};
pub use infrastructure::{OpenAlexAdapter, OpenAlexConfig};
pub use ports::{BibliographyError, BibliographyPort, MAX_PAGE_SIZE};

use std::sync::Arc;

/// Research 模块容器
///
/// 主来源用于直接检索和按 ID 查询，聚合器用于聊天中的资源搜索
pub struct ResearchModule {
    primary: Arc<dyn BibliographyPort>,
    aggregator: Arc<ResourceAggregator>,
}

impl ResearchModule {
    /// 使用 OpenAlex 作为唯一来源创建
    pub fn new(config: OpenAlexConfig) -> Result<Self, BibliographyError> {
        let openalex: Arc<dyn BibliographyPort> = Arc::new(OpenAlexAdapter::new(config)?);
        Ok(Self::with_sources(openalex, Vec::new()))
    }

    /// 使用自定义来源创建，额外来源只参与聚合检索
    pub fn with_sources(
        primary: Arc<dyn BibliographyPort>,
        extra: Vec<Arc<dyn BibliographyPort>>,
    ) -> Self {
        let aggregator = extra
            .into_iter()
            .fold(ResourceAggregator::new(vec![primary.clone()]), |aggregator, source| {
                aggregator.with_source(source)
            });

        Self {
            primary,
            aggregator: Arc::new(aggregator),
        }
    }

    /// 直接检索主来源，错误会返回给调用方
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        page: u32,
    ) -> Result<ResourceResults, BibliographyError> {
        let research_articles = self.primary.search(query, limit, page).await?;
        Ok(ResourceResults { research_articles })
    }

    /// 按 ID 获取文章
    pub async fn get_article(&self, id: &str) -> Option<ResearchArticle> {
        self.primary.get_by_id(id).await
    }

    /// 获取聚合器
    pub fn aggregator(&self) -> &Arc<ResourceAggregator> {
        &self.aggregator
    }
}
