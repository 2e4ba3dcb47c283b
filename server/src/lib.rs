pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use infrastructure::{serve, spawn_sweeper, AppState};
use modules::ConfigModule;
use shared::AppResult;

pub async fn run() -> AppResult<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    tracing::info!("Brain Buddy starting...");

    let config = ConfigModule::from_env().load().await?;
    if config.server.production {
        tracing::info!("Running in production mode, session cookies are Secure");
    }

    let state = Arc::new(AppState::from_config(config)?);
    let sweeper = spawn_sweeper(state.clone());

    let result = serve(state).await;
    sweeper.abort();
    result
}
