use serde::{Deserialize, Serialize};

/// 学术文章
///
/// 值对象：完全由书目 API 的响应推导，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchArticle {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub publication_date: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub doi: Option<String>,
    pub url: String,
    pub citation_count: u64,
}

/// 资源搜索结果集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResults {
    pub research_articles: Vec<ResearchArticle>,
}

impl ResourceResults {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.research_articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.research_articles.is_empty()
    }

    /// 追加另一组结果（保持已有结果在前）
    pub fn extend(&mut self, other: ResourceResults) {
        self.research_articles.extend(other.research_articles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_serializes_abstract_field_name() {
        let article = ResearchArticle {
            id: "https://openalex.org/W1".to_string(),
            title: "Sleep and mood".to_string(),
            authors: vec!["A. Author".to_string()],
            publication_date: "2020-01-01".to_string(),
            abstract_text: None,
            doi: None,
            url: "https://openalex.org/W1".to_string(),
            citation_count: 3,
        };

        let json = serde_json::to_value(&article).unwrap();
        assert!(json.get("abstract").is_some());
        assert_eq!(json["citationCount"], 3);
        assert_eq!(json["publicationDate"], "2020-01-01");
    }

    #[test]
    fn test_results_extend_appends() {
        let mut results = ResourceResults::empty();
        assert!(results.is_empty());

        results.extend(ResourceResults {
            research_articles: vec![ResearchArticle {
                id: "W2".to_string(),
                title: "t".to_string(),
                authors: vec![],
                publication_date: "Unknown".to_string(),
                abstract_text: None,
                doi: None,
                url: "W2".to_string(),
                citation_count: 0,
            }],
        });

        assert_eq!(results.len(), 1);
    }
}
