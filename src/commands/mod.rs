//! Backend Bindings
//!
//! HTTP plumbing and the two pastebin endpoints.

mod bins;
mod http;

pub use bins::BinApi;
pub use http::FetchTransport;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One outgoing call, bounded by `timeout_ms`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
    pub timeout_ms: u32,
    /// Whether the caller consumes the response body
    pub wants_body: bool,
}

impl HttpRequest {
    pub fn get(url: String, timeout_ms: u32) -> Self {
        Self {
            method: Method::Get,
            url,
            content_type: None,
            body: None,
            timeout_ms,
            wants_body: true,
        }
    }

    pub fn post(url: String, content_type: &'static str, body: String, timeout_ms: u32) -> Self {
        Self {
            method: Method::Post,
            url,
            content_type: Some(content_type),
            body: Some(body),
            timeout_ms,
            wants_body: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and resolves once the response (and body, if wanted)
/// has arrived, or fails on network error or deadline.
#[allow(async_fn_in_trait)]
pub trait BinTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
