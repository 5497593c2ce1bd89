//! Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a backend call. Every variant ends in the same user-facing alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("response not OK: HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Transport(js_to_string(&value))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

/// DOM lookups and mutations that did not go as expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element #{0} not found")]
    Missing(&'static str),
    #[error("element #{id} is not a {expected}")]
    WrongType {
        id: &'static str,
        expected: &'static str,
    },
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(js_to_string(&value))
    }
}

/// Best-effort readable form of a thrown JS value
fn js_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
