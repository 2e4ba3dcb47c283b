use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::infrastructure::SharedState;
use crate::modules::research::{ResearchArticle, ResourceResults};
use crate::shared::{AppError, AppResult};

const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
    pub page: Option<u32>,
}

pub fn resource_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/resources/search", get(search))
        .route("/api/resources/articles/:id", get(get_article))
}

async fn search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<ResourceResults>> {
    let results = state
        .research
        .search(
            &params.q,
            params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
            params.page.unwrap_or(1),
        )
        .await?;
    Ok(Json(results))
}

async fn get_article(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> AppResult<Json<ResearchArticle>> {
    state
        .research
        .get_article(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Article {}", id)))
}
