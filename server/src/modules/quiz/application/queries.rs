// Quiz Queries

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::chat::domain::SessionId;
use crate::modules::chat::ports::RepositoryError;
use crate::modules::quiz::domain::QuizContext;
use crate::modules::quiz::ports::QuizStore;

/// 查询处理器 trait
#[async_trait]
pub trait QueryHandler<Q> {
    type Output;
    type Error;

    async fn handle(&self, query: Q) -> Result<Self::Output, Self::Error>;
}

/// 获取问卷查询
#[derive(Debug, Clone)]
pub struct GetQuizQuery {
    pub session_id: SessionId,
}

impl GetQuizQuery {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

/// 获取问卷响应
///
/// 未提交过问卷时返回默认答案，`submitted` 为 false
#[derive(Debug, Clone)]
pub struct GetQuizResponse {
    pub quiz: QuizContext,
    pub submitted: bool,
}

/// 获取问卷处理器
pub struct GetQuizHandler {
    store: Arc<dyn QuizStore>,
}

impl GetQuizHandler {
    pub fn new(store: Arc<dyn QuizStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<GetQuizQuery> for GetQuizHandler {
    type Output = GetQuizResponse;
    type Error = RepositoryError;

    async fn handle(&self, query: GetQuizQuery) -> Result<Self::Output, Self::Error> {
        let response = match self.store.get(query.session_id).await? {
            Some(quiz) => GetQuizResponse {
                quiz,
                submitted: true,
            },
            None => GetQuizResponse {
                quiz: QuizContext::default(),
                submitted: false,
            },
        };
        Ok(response)
    }
}
