// src/platform/network.rs

use crate::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// One file in a multipart upload body.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name, `file` or `files` depending on the endpoint.
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Request body shapes the API layer produces.
#[derive(Debug, Clone)]
pub enum HttpBody {
    Empty,
    /// Serialized JSON. The caller sets the `Content-Type` header.
    Json(Vec<u8>),
    /// Multipart form data. The provider sets the content type and boundary.
    Multipart(Vec<FilePart>),
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: HttpBody,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: HttpBody::Empty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type DynNetwork = dyn NetworkProvider + Send + Sync;

#[cfg(target_arch = "wasm32")]
pub type DynNetwork = dyn NetworkProvider + Sync;

pub type NetworkArc = Arc<DynNetwork>;

/// HTTP transport. One implementation per platform; the API layer is
/// written against this trait only.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait NetworkProvider: NetworkBounds {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(not(target_arch = "wasm32"))]
pub trait NetworkBounds: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait NetworkBounds: Sync {}
