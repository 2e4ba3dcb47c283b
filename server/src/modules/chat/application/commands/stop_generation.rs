use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CancellationRegistry, CommandHandler};
use crate::modules::chat::domain::SessionId;

/// 停止生成命令
#[derive(Debug, Clone)]
pub struct StopGenerationCommand {
    pub session_id: SessionId,
}

impl StopGenerationCommand {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

/// 停止生成响应
#[derive(Debug, Clone)]
pub struct StopGenerationResponse {
    /// 是否有进行中的生成被取消
    pub cancelled: bool,
}

/// 停止生成命令处理器
pub struct StopGenerationHandler {
    cancellations: Arc<CancellationRegistry>,
}

impl StopGenerationHandler {
    pub fn new(cancellations: Arc<CancellationRegistry>) -> Self {
        Self { cancellations }
    }
}

#[async_trait]
impl CommandHandler<StopGenerationCommand, StopGenerationResponse> for StopGenerationHandler {
    async fn handle(
        &self,
        command: StopGenerationCommand,
    ) -> Result<StopGenerationResponse, ApplicationError> {
        let cancelled = self.cancellations.cancel(command.session_id).await;
        Ok(StopGenerationResponse { cancelled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stop_reports_whether_generation_was_running() {
        let registry = Arc::new(CancellationRegistry::new());
        let handler = StopGenerationHandler::new(registry.clone());
        let id = SessionId::new();

        let idle = handler.handle(StopGenerationCommand::new(id)).await.unwrap();
        assert!(!idle.cancelled);

        let _ticket = registry.register(id).await;
        let running = handler.handle(StopGenerationCommand::new(id)).await.unwrap();
        assert!(running.cancelled);
    }
}
