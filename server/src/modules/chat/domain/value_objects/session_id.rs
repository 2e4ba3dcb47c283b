use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 会话唯一标识符
///
/// 每个浏览器签发一次，通过 `chat_session_id` Cookie 携带
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// 生成新的随机会话 ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 从字符串解析
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// 从 Cookie 值解析，格式不合法时返回 None
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        Self::parse(value.trim().trim_matches('"')).ok()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SessionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = SessionId::parse(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_from_cookie_value() {
        let id = SessionId::new();
        assert_eq!(
            SessionId::from_cookie_value(&format!(" \"{}\" ", id)),
            Some(id)
        );
        assert_eq!(SessionId::from_cookie_value("not-a-uuid"), None);
        assert_eq!(SessionId::from_cookie_value(""), None);
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
