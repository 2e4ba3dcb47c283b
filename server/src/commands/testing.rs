// 路由测试工具

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response};
use serde_json::Value;

use crate::modules::chat::SessionId;

pub(crate) fn get_request(uri: &str, session: Option<SessionId>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(id) = session {
        builder = builder.header(COOKIE, format!("chat_session_id={}", id));
    }
    builder.body(Body::empty()).unwrap()
}

pub(crate) fn post_json(uri: &str, session: Option<SessionId>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(id) = session {
        builder = builder.header(COOKIE, format!("chat_session_id={}", id));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub(crate) fn post_empty(uri: &str, session: Option<SessionId>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(id) = session {
        builder = builder.header(COOKIE, format!("chat_session_id={}", id));
    }
    builder.body(Body::empty()).unwrap()
}

pub(crate) async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub(crate) fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .map(|value| value.to_str().unwrap().to_string())
}
