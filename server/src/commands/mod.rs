// Commands Layer - HTTP 路由
//
// 每个文件导出一组 `Router<SharedState>`，由 infrastructure::server 合并

pub mod chat;
pub mod health;
pub mod quiz;
pub mod resources;
pub mod session_cookie;

#[cfg(test)]
pub(crate) mod testing;

pub use chat::chat_routes;
pub use health::health_routes;
pub use quiz::quiz_routes;
pub use resources::resource_routes;
pub use session_cookie::{SessionCookie, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
