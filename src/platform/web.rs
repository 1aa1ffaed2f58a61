// src/platform/web.rs - Web/WASM platform implementations

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response, Storage};

use crate::error::{Error, Result};
use crate::platform::network::{
    HttpBody, HttpRequest, HttpResponse, NetworkBounds, NetworkProvider,
};
use crate::platform::storage::{StorageBounds, StorageProvider};
use crate::platform::PlatformProviders;

/// Creates web platform providers
pub fn create_providers() -> Result<PlatformProviders> {
    Ok(PlatformProviders {
        network: std::sync::Arc::new(FetchNetwork::new()),
        storage: std::sync::Arc::new(WebStorage::new()),
    })
}

/// HTTP transport backed by the Fetch API.
pub struct FetchNetwork;

impl FetchNetwork {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FetchNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkBounds for FetchNetwork {}

#[async_trait(?Send)]
impl NetworkProvider for FetchNetwork {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let window = web_sys::window()
            .ok_or_else(|| Error::network(request.url.clone(), "No window available"))?;

        let opts = RequestInit::new();
        opts.set_method(&request.method);

        match &request.body {
            HttpBody::Empty => {}
            HttpBody::Json(bytes) => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                opts.set_body(&array);
            }
            HttpBody::Multipart(parts) => {
                let form = FormData::new().map_err(|e| {
                    Error::network(request.url.clone(), format!("FormData failed: {:?}", e))
                })?;
                for part in parts {
                    let array = js_sys::Uint8Array::from(part.bytes.as_slice());
                    let sequence = js_sys::Array::new();
                    sequence.push(&array);
                    let props = BlobPropertyBag::new();
                    props.set_type(&part.content_type);
                    let blob = Blob::new_with_u8_array_sequence_and_options(&sequence, &props)
                        .map_err(|e| {
                            Error::network(request.url.clone(), format!("Blob failed: {:?}", e))
                        })?;
                    form.append_with_blob_and_filename(&part.field, &blob, &part.file_name)
                        .map_err(|e| {
                            Error::network(
                                request.url.clone(),
                                format!("FormData append failed: {:?}", e),
                            )
                        })?;
                }
                opts.set_body(&form);
            }
        }

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(|e| {
            Error::network(
                request.url.clone(),
                format!("Failed to create request: {:?}", e),
            )
        })?;

        for (key, value) in &request.headers {
            req.headers().set(key, value).map_err(|e| {
                Error::network(
                    request.url.clone(),
                    format!("Failed to set header: {:?}", e),
                )
            })?;
        }

        let response_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| Error::network(request.url.clone(), format!("Fetch failed: {:?}", e)))?;

        let response: Response = response_value
            .dyn_into()
            .map_err(|_| Error::network(request.url.clone(), "Fetch returned a non-response"))?;
        let status = response.status();

        let buffer = JsFuture::from(response.array_buffer().map_err(|e| {
            Error::network(
                request.url.clone(),
                format!("Failed to read body: {:?}", e),
            )
        })?)
        .await
        .map_err(|e| {
            Error::network(
                request.url.clone(),
                format!("Failed to read body: {:?}", e),
            )
        })?;

        let body = js_sys::Uint8Array::new(&buffer).to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Persisted key-value storage backed by localStorage.
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> Result<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| Error::storage("localStorage", "localStorage not available"))
    }
}

impl Default for WebStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBounds for WebStorage {}

#[async_trait(?Send)]
impl StorageProvider for WebStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let storage = self.local_storage()?;
        storage
            .get_item(key)
            .map_err(|e| Error::storage(key, format!("Failed to get item: {:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self.local_storage()?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::storage(key, format!("Failed to set item: {:?}", e)))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let storage = self.local_storage()?;
        storage
            .remove_item(key)
            .map_err(|e| Error::storage(key, format!("Failed to remove item: {:?}", e)))
    }
}
