use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::chat::domain::SessionId;
use crate::modules::chat::ports::RepositoryError;
use crate::modules::quiz::domain::QuizContext;
use crate::modules::quiz::ports::QuizStore;

#[derive(Debug, Clone)]
struct QuizRecord {
    quiz: QuizContext,
    updated_at: DateTime<Utc>,
}

/// 内存问卷存储
pub struct InMemoryQuizStore {
    records: RwLock<HashMap<SessionId, QuizRecord>>,
}

impl InMemoryQuizStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryQuizStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuizStore for InMemoryQuizStore {
    async fn get(&self, session_id: SessionId) -> Result<Option<QuizContext>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(&session_id).map(|r| r.quiz.clone()))
    }

    async fn save(
        &self,
        session_id: SessionId,
        quiz: QuizContext,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        records.insert(
            session_id,
            QuizRecord {
                quiz,
                updated_at: at,
            },
        );
        Ok(())
    }

    async fn sweep_stale(&self, before: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let mut records = self.records.write().await;
        let initial = records.len();
        records.retain(|_, r| r.updated_at >= before);
        Ok(initial - records.len())
    }
}
