use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::chat::domain::{ChatMessage, SessionId, Transcript};
use crate::modules::chat::ports::{RepositoryError, TranscriptStore};
use crate::modules::research::ResourceResults;

/// 内存转录存储
pub struct InMemoryTranscriptStore {
    transcripts: RwLock<HashMap<SessionId, Transcript>>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self {
            transcripts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryTranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn get(&self, id: SessionId) -> Result<Option<Transcript>, RepositoryError> {
        let transcripts = self.transcripts.read().await;
        Ok(transcripts.get(&id).cloned())
    }

    async fn record(
        &self,
        id: SessionId,
        greeting: ChatMessage,
        messages: Vec<ChatMessage>,
        research: Option<ResourceResults>,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut transcripts = self.transcripts.write().await;
        let transcript = transcripts
            .entry(id)
            .or_insert_with(|| Transcript::new(greeting));

        for message in messages {
            transcript.push_message(message);
        }
        if let Some(results) = research {
            transcript.append_research(&results);
        }
        transcript.touch(at);

        Ok(())
    }

    async fn clear(&self, id: SessionId) -> Result<(), RepositoryError> {
        let mut transcripts = self.transcripts.write().await;
        transcripts.remove(&id);
        Ok(())
    }

    async fn sweep_stale(&self, before: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let mut transcripts = self.transcripts.write().await;
        let count = transcripts.len();
        transcripts.retain(|_, t| t.updated_at() >= before);
        Ok(count - transcripts.len())
    }
}
