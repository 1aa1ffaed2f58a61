// src/platform/native.rs - Native platform implementations

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::error::{Error, Result};
use crate::platform::network::{
    HttpBody, HttpRequest, HttpResponse, NetworkBounds, NetworkProvider,
};
use crate::platform::storage::{StorageBounds, StorageProvider};
use crate::platform::PlatformProviders;

/// Creates native platform providers
pub fn create_providers() -> Result<PlatformProviders> {
    Ok(PlatformProviders {
        network: std::sync::Arc::new(NativeNetwork::new()),
        storage: std::sync::Arc::new(NativeStorage::new()),
    })
}

/// HTTP transport backed by reqwest.
pub struct NativeNetwork {
    client: reqwest::Client,
}

impl NativeNetwork {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for NativeNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkBounds for NativeNetwork {}

#[async_trait]
impl NetworkProvider for NativeNetwork {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut req = match request.method.as_str() {
            "GET" => self.client.get(&request.url),
            "POST" => self.client.post(&request.url),
            "PUT" => self.client.put(&request.url),
            "DELETE" => self.client.delete(&request.url),
            other => {
                return Err(Error::network(
                    request.url.clone(),
                    format!("Unsupported HTTP method: {}", other),
                ))
            }
        };

        for (key, value) in &request.headers {
            req = req.header(key, value);
        }

        match request.body {
            HttpBody::Empty => {}
            HttpBody::Json(bytes) => {
                req = req.body(bytes);
            }
            HttpBody::Multipart(parts) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    let piece = reqwest::multipart::Part::bytes(part.bytes)
                        .file_name(part.file_name.clone())
                        .mime_str(&part.content_type)
                        .map_err(|e| {
                            Error::network(
                                request.url.clone(),
                                format!("Invalid content type for {}: {}", part.file_name, e),
                            )
                        })?;
                    form = form.part(part.field, piece);
                }
                req = req.multipart(form);
            }
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::network(request.url.clone(), e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                Error::network(
                    request.url.clone(),
                    format!("Failed to read response body: {}", e),
                )
            })?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Persisted key-value storage backed by one file per key.
pub struct NativeStorage {
    root: PathBuf,
}

impl NativeStorage {
    pub fn new() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join("data"))
            .join("veluna")
            .join("storage");
        Self { root }
    }

    /// Storage rooted at an explicit directory, used by tests.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
        self.root.join(format!("{}.json", safe_key))
    }
}

impl Default for NativeStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBounds for NativeStorage {}

#[async_trait]
impl StorageProvider for NativeStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(key, format!("Failed to read: {}", e))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_to_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::storage(key, format!("Failed to create dir: {}", e)))?;
        }
        fs::write(&path, value)
            .await
            .map_err(|e| Error::storage(key, format!("Failed to write: {}", e)))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage(key, format!("Failed to remove: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::with_root(dir.path());

        storage.set("admin_token", "tok-1").await.unwrap();
        assert_eq!(
            storage.get("admin_token").await.unwrap(),
            Some("tok-1".to_string())
        );

        storage.remove("admin_token").await.unwrap();
        assert_eq!(storage.get("admin_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::with_root(dir.path());
        storage.remove("never_set").await.unwrap();
    }

    #[test]
    fn test_key_sanitization() {
        let storage = NativeStorage::with_root("/tmp/veluna-test");
        let path = storage.key_to_path("admin/user:record");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(name, "admin_user_record.json");
    }
}
