use axum::Router;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::state::SharedState;
use crate::commands;
use crate::shared::AppResult;

/// 组装全部路由
pub fn build_router(state: SharedState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .merge(commands::health_routes())
        .merge(commands::quiz_routes())
        .merge(commands::chat_routes())
        .merge(commands::resource_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
}

/// 启动 HTTP 服务，直到监听出错才返回
pub async fn serve(state: SharedState) -> AppResult<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
