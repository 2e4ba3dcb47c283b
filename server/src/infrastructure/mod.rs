// Infrastructure Layer - 应用级基础设施
//
// - state: 全局状态组装
// - server: HTTP 路由与服务启动
// - sweeper: 过期会话清理任务

pub mod server;
pub mod state;
pub mod sweeper;

pub use server::{build_router, serve};
pub use state::{AppState, SharedState};
pub use sweeper::{spawn_sweeper, sweep_once, SweepReport};
