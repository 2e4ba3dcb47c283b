// 会话 Cookie
//
// 从请求中读取 `chat_session_id`，缺失或格式错误时签发新的会话 ID，
// 并在响应中写回 Set-Cookie

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponseParts, ResponseParts};
use std::convert::Infallible;
use tracing::debug;

use crate::infrastructure::SharedState;
use crate::modules::chat::SessionId;

pub const SESSION_COOKIE_NAME: &str = "chat_session_id";

/// Cookie 有效期（秒）
pub const SESSION_COOKIE_MAX_AGE: u64 = 86_400;

#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    id: SessionId,
    issued: bool,
    secure: bool,
}

impl SessionCookie {
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// 本次请求是否签发了新 ID
    pub fn issued(&self) -> bool {
        self.issued
    }

    pub fn set_cookie_value(&self) -> String {
        let mut value = format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
            SESSION_COOKIE_NAME, self.id, SESSION_COOKIE_MAX_AGE
        );
        if self.secure {
            value.push_str("; Secure");
        }
        value
    }
}

/// 在 Cookie 头中查找会话 ID
fn find_session_id(cookie_header: &str) -> Option<SessionId> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == SESSION_COOKIE_NAME)
        .and_then(|(_, value)| SessionId::from_cookie_value(value))
}

#[async_trait]
impl FromRequestParts<SharedState> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let secure = state.config.server.production;
        let existing = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(find_session_id);

        Ok(match existing {
            Some(id) => Self {
                id,
                issued: false,
                secure,
            },
            None => {
                let id = SessionId::new();
                debug!("Issuing new session id {}", id);
                Self {
                    id,
                    issued: true,
                    secure,
                }
            }
        })
    }
}

impl IntoResponseParts for SessionCookie {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.issued {
            if let Ok(value) = HeaderValue::from_str(&self.set_cookie_value()) {
                res.headers_mut().append(SET_COOKIE, value);
            }
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_session_id_among_cookies() {
        let id = SessionId::new();
        let header = format!("theme=dark; {}={}; other=1", SESSION_COOKIE_NAME, id);
        assert_eq!(find_session_id(&header), Some(id));
    }

    #[test]
    fn test_malformed_cookie_is_ignored() {
        assert!(find_session_id("chat_session_id=not-a-uuid").is_none());
        assert!(find_session_id("chat_session_idx=1").is_none());
        assert!(find_session_id("").is_none());
    }

    #[test]
    fn test_set_cookie_attributes() {
        let cookie = SessionCookie {
            id: SessionId::new(),
            issued: true,
            secure: true,
        };
        let value = cookie.set_cookie_value();

        assert!(value.starts_with("chat_session_id="));
        assert!(value.contains("Max-Age=86400"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.ends_with("; Secure"));
    }
}
