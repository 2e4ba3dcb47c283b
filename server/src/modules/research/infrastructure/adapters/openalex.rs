// OpenAlex 适配器
//
// 通过 OpenAlex works 接口检索学术文章，并把记录规范化为 ResearchArticle

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::modules::research::domain::{reconstruct_abstract, InvertedIndex, ResearchArticle};
use crate::modules::research::ports::{BibliographyError, BibliographyPort, MAX_PAGE_SIZE};

const UNKNOWN_DATE: &str = "Unknown";
const UNTITLED: &str = "Untitled";

/// OpenAlex 适配器配置
#[derive(Debug, Clone)]
pub struct OpenAlexConfig {
    pub base_url: String,
    pub user_agent: String,
    /// 进入 OpenAlex polite pool 的联系邮箱
    pub mailto: Option<String>,
    pub timeout_secs: u64,
}

impl Default for OpenAlexConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openalex.org".to_string(),
            user_agent: "BrainBuddy/1.0".to_string(),
            mailto: None,
            timeout_secs: 15,
        }
    }
}

/// OpenAlex 书目检索适配器
pub struct OpenAlexAdapter {
    client: Client,
    config: OpenAlexConfig,
}

impl OpenAlexAdapter {
    pub fn new(config: OpenAlexConfig) -> Result<Self, BibliographyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| BibliographyError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// 取完整 ID（https://openalex.org/W123）的最后一段
    fn short_id(id: &str) -> &str {
        id.trim_end_matches('/').rsplit('/').next().unwrap_or(id)
    }

    /// OpenAlex ID 形如 `W123`：一个字母加数字
    fn is_work_id(id: &str) -> bool {
        let mut chars = id.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
            && !chars.as_str().is_empty()
            && chars.all(|c| c.is_ascii_digit())
    }

    async fn fetch_work(&self, id: &str) -> Result<Option<OpenAlexWork>, BibliographyError> {
        let short_id = Self::short_id(id);
        if !Self::is_work_id(short_id) {
            debug!(id, "Rejecting malformed OpenAlex ID");
            return Ok(None);
        }

        let url = self.api_url(&format!("works/{}", short_id));

        let mut request = self.client.get(url);
        if let Some(mailto) = &self.config.mailto {
            request = request.query(&[("mailto", mailto.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BibliographyError::Network(e.to_string()))?;

        if !response.status().is_success() {
            debug!(status = response.status().as_u16(), id, "OpenAlex work not found");
            return Ok(None);
        }

        let work = response
            .json::<OpenAlexWork>()
            .await
            .map_err(|e| BibliographyError::Decode(e.to_string()))?;

        Ok(Some(work))
    }
}

#[async_trait]
impl BibliographyPort for OpenAlexAdapter {
    fn source_id(&self) -> &str {
        "openalex"
    }

    async fn search(
        &self,
        query: &str,
        limit: usize,
        page: u32,
    ) -> Result<Vec<ResearchArticle>, BibliographyError> {
        if query.trim().is_empty() {
            return Err(BibliographyError::InvalidArgument(
                "Search terms cannot be empty".to_string(),
            ));
        }

        let per_page = limit.clamp(1, MAX_PAGE_SIZE);
        let page = page.max(1);

        debug!(query, per_page, page, "Searching OpenAlex works");

        let mut params = vec![
            ("search", query.to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
            ("sort", "cited_by_count:desc".to_string()),
        ];
        if let Some(mailto) = &self.config.mailto {
            params.push(("mailto", mailto.clone()));
        }

        let response = self
            .client
            .get(self.api_url("works"))
            .query(&params)
            .send()
            .await
            .map_err(|e| BibliographyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = status.canonical_reason().unwrap_or_default().to_string();
            error!(status = status.as_u16(), "OpenAlex API error");
            return Err(BibliographyError::UpstreamError {
                status: status.as_u16(),
                message,
            });
        }

        let body: OpenAlexResponse = response
            .json()
            .await
            .map_err(|e| BibliographyError::Decode(e.to_string()))?;

        if let Some(meta) = &body.meta {
            debug!(total = meta.count, page = ?meta.page, "OpenAlex search returned");
        }

        Ok(body
            .results
            .into_iter()
            .take(per_page)
            .map(ResearchArticle::from)
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Option<ResearchArticle> {
        match self.fetch_work(id).await {
            Ok(work) => work.map(ResearchArticle::from),
            Err(e) => {
                warn!(id, error = %e, "Error fetching article by ID");
                None
            }
        }
    }
}

// OpenAlex API 类型定义

#[derive(Debug, Deserialize)]
struct OpenAlexResponse {
    results: Vec<OpenAlexWork>,
    #[serde(default)]
    meta: Option<OpenAlexMeta>,
}

#[derive(Debug, Deserialize)]
struct OpenAlexMeta {
    #[serde(default)]
    count: u64,
    page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OpenAlexWork {
    id: String,
    title: Option<String>,
    display_name: Option<String>,
    #[serde(default)]
    authorships: Vec<OpenAlexAuthorship>,
    publication_date: Option<String>,
    abstract_inverted_index: Option<InvertedIndex>,
    doi: Option<String>,
    url: Option<String>,
    #[serde(default)]
    cited_by_count: u64,
}

#[derive(Debug, Deserialize)]
struct OpenAlexAuthorship {
    author: OpenAlexAuthor,
}

#[derive(Debug, Deserialize)]
struct OpenAlexAuthor {
    display_name: Option<String>,
}

impl From<OpenAlexWork> for ResearchArticle {
    fn from(work: OpenAlexWork) -> Self {
        let abstract_text = reconstruct_abstract(work.abstract_inverted_index.as_ref());
        let title = work
            .title
            .or(work.display_name)
            .unwrap_or_else(|| UNTITLED.to_string());
        let url = work
            .url
            .or_else(|| work.doi.clone())
            .unwrap_or_else(|| work.id.clone());

        ResearchArticle {
            id: work.id,
            title,
            authors: work
                .authorships
                .into_iter()
                .filter_map(|a| a.author.display_name)
                .collect(),
            publication_date: work
                .publication_date
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            abstract_text,
            doi: work.doi,
            url,
            citation_count: work.cited_by_count,
        }
    }
}
