use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::research::domain::ResourceResults;
use crate::modules::research::ports::BibliographyPort;

/// 资源聚合器
///
/// 并发调用所有已注册的来源并按注册顺序合并结果，总数不超过 `limit`。
/// 任何来源失败都只记录日志，不影响调用方。
pub struct ResourceAggregator {
    sources: Vec<Arc<dyn BibliographyPort>>,
}

impl ResourceAggregator {
    pub fn new(sources: Vec<Arc<dyn BibliographyPort>>) -> Self {
        Self { sources }
    }

    /// 注册一个新的来源
    pub fn with_source(mut self, source: Arc<dyn BibliographyPort>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// 检索全部来源
    pub async fn search_all(&self, query: &str, limit: usize) -> ResourceResults {
        debug!(query, limit, sources = self.sources.len(), "Searching all resources");

        let searches = self
            .sources
            .iter()
            .map(|source| async move { (source.source_id(), source.search(query, limit, 1).await) });

        let mut results = ResourceResults::empty();
        for (source_id, outcome) in join_all(searches).await {
            match outcome {
                Ok(articles) => results.extend(ResourceResults {
                    research_articles: articles,
                }),
                Err(e) => warn!(source = source_id, error = %e, "Error searching resources"),
            }
        }

        results.research_articles.truncate(limit);
        results
    }
}
