// src/api/mod.rs - Configured HTTP client shared by every resource module

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::platform::{FilePart, HttpBody, HttpRequest, HttpResponse, NetworkArc};
use crate::session::SessionArc;

pub mod admin;
pub mod collections;
pub mod products;

pub use admin::AdminApi;
pub use collections::CollectionsApi;
pub use products::ProductsApi;

/// Single configured client: base URL, JSON content type, bearer-token
/// injection from the session store, and the global 401 policy.
///
/// On a 401 the session store is invalidated (exactly once) and the call
/// resolves to [`crate::error::ErrorKind::SessionExpired`]; navigation is
/// the router's business, not the transport layer's. All other failures
/// propagate to the caller with the backend's `detail` message when the
/// response body carries one.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    network: NetworkArc,
    session: SessionArc,
}

/// Shape of FastAPI-style error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, network: NetworkArc, session: SessionArc) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            network,
            session,
        }
    }

    pub fn session(&self) -> &SessionArc {
        &self.session
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { client: self }
    }

    pub fn collections(&self) -> CollectionsApi<'_> {
        CollectionsApi { client: self }
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { client: self }
    }

    /// Builds the absolute URL for a path plus query pairs.
    pub(crate) fn url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        query: &[(String, String)],
        body: HttpBody,
    ) -> Result<HttpResponse> {
        let mut request = HttpRequest::new(method, self.url(path, query));
        request.body = body;
        if let HttpBody::Json(_) = &request.body {
            request
                .headers
                .insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = self.session.token() {
            request
                .headers
                .insert("Authorization".to_string(), format!("Bearer {}", token));
        }

        let response = self.network.send(request).await?;

        if response.status == 401 {
            self.session.invalidate().await;
            return Err(Error::session_expired());
        }

        if !response.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&response.body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| format!("Request failed with status {}", response.status));
            return Err(Error::api(response.status, path, detail));
        }

        Ok(response)
    }

    fn decode<T: DeserializeOwned>(&self, path: &str, response: &HttpResponse) -> Result<T> {
        serde_json::from_slice(&response.body).map_err(|e| {
            Error::serialization(format!("Unexpected response from {}: {}", path, e))
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let response = self.send("GET", path, query, HttpBody::Empty).await?;
        self.decode(path, &response)
    }

    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &str,
        path: &str,
        query: &[(String, String)],
        body: &B,
    ) -> Result<T> {
        let bytes = serde_json::to_vec(body)?;
        let response = self.send(method, path, query, HttpBody::Json(bytes)).await?;
        self.decode(path, &response)
    }

    /// Mutation whose response body the caller does not need.
    pub(crate) async fn send_json_discard<B: Serialize>(
        &self,
        method: &str,
        path: &str,
        query: &[(String, String)],
        body: &B,
    ) -> Result<()> {
        let bytes = serde_json::to_vec(body)?;
        self.send(method, path, query, HttpBody::Json(bytes)).await?;
        Ok(())
    }

    pub(crate) async fn put_empty(&self, path: &str, query: &[(String, String)]) -> Result<()> {
        self.send("PUT", path, query, HttpBody::Empty).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send("DELETE", path, &[], HttpBody::Empty).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        parts: Vec<FilePart>,
    ) -> Result<T> {
        let response = self
            .send("POST", path, query, HttpBody::Multipart(parts))
            .await?;
        self.decode(path, &response)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::platform::network::{NetworkBounds, NetworkProvider};
    use crate::platform::{MemoryStorage, StorageArc};
    use crate::session::SessionStore;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Scripted network: hands out queued responses and records every
    /// request it saw.
    #[derive(Default)]
    pub struct MockNetwork {
        pub requests: Mutex<Vec<HttpRequest>>,
        pub responses: Mutex<VecDeque<HttpResponse>>,
    }

    impl MockNetwork {
        pub fn returning(responses: Vec<HttpResponse>) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into()),
            })
        }

        pub fn json(status: u16, body: &str) -> HttpResponse {
            HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().len()
        }

        pub fn last_request(&self) -> HttpRequest {
            self.requests.lock().last().cloned().expect("no request sent")
        }
    }

    impl NetworkBounds for MockNetwork {}

    #[async_trait::async_trait]
    impl NetworkProvider for MockNetwork {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().push(request);
            self.responses
                .lock()
                .pop_front()
                .ok_or_else(|| Error::network("mock", "no scripted response left"))
        }
    }

    pub fn client_with(network: Arc<MockNetwork>) -> (ApiClient, SessionArc) {
        let storage: StorageArc = Arc::new(MemoryStorage::new());
        let session: SessionArc = Arc::new(SessionStore::new(storage));
        let config = AppConfig::new("https://api.veluna.test/api");
        let client = ApiClient::new(&config, network, session.clone());
        (client, session)
    }

    pub async fn logged_in(session: &SessionArc) {
        use crate::session::{AdminRole, AdminSession, AdminUser};
        session
            .establish(AdminSession {
                token: "tok-test".to_string(),
                user: AdminUser {
                    username: "giulia".to_string(),
                    role: AdminRole::Admin,
                    email: None,
                },
            })
            .await
            .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::platform::HttpBody;

    #[tokio::test]
    async fn test_bearer_header_attached_when_session_exists() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "[]")]);
        let (client, session) = client_with(network.clone());
        logged_in(&session).await;

        let _: Vec<serde_json::Value> = client.get_json("/products", &[]).await.unwrap();

        let request = network.last_request();
        assert_eq!(
            request.headers.get("Authorization"),
            Some(&"Bearer tok-test".to_string())
        );
    }

    #[tokio::test]
    async fn test_no_bearer_header_without_session() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "[]")]);
        let (client, _session) = client_with(network.clone());

        let _: Vec<serde_json::Value> = client.get_json("/products", &[]).await.unwrap();
        assert!(!network.last_request().headers.contains_key("Authorization"));
    }

    #[tokio::test]
    async fn test_query_pairs_are_encoded() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "[]")]);
        let (client, _session) = client_with(network.clone());

        let query = vec![("q".to_string(), "blue tortoise".to_string())];
        let _: Vec<serde_json::Value> = client.get_json("/products/search", &query).await.unwrap();

        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/products/search?q=blue%20tortoise"
        );
    }

    #[tokio::test]
    async fn test_401_invalidates_session_and_maps_to_expired() {
        let network = MockNetwork::returning(vec![MockNetwork::json(401, "{}")]);
        let (client, session) = client_with(network);
        logged_in(&session).await;

        let err = client
            .get_json::<Vec<serde_json::Value>>("/admin/products", &[])
            .await
            .unwrap_err();

        assert!(err.is_session_expired());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_concurrent_401s_clear_session_once() {
        let network = MockNetwork::returning(vec![
            MockNetwork::json(401, "{}"),
            MockNetwork::json(401, "{}"),
        ]);
        let (client, session) = client_with(network);
        logged_in(&session).await;

        let (a, b) = futures::join!(
            client.get_json::<Vec<serde_json::Value>>("/admin/stats", &[]),
            client.get_json::<Vec<serde_json::Value>>("/admin/products", &[]),
        );
        assert!(a.unwrap_err().is_session_expired());
        assert!(b.unwrap_err().is_session_expired());

        // The second invalidation must have been a no-op.
        assert!(!session.is_authenticated());
        assert!(!session.invalidate().await);
    }

    #[tokio::test]
    async fn test_detail_field_surfaces_in_error() {
        let network = MockNetwork::returning(vec![MockNetwork::json(
            400,
            r#"{"detail": "SKU already exists"}"#,
        )]);
        let (client, _session) = client_with(network);

        let err = client
            .get_json::<serde_json::Value>("/products/p-1", &[])
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "SKU already exists");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_non_json_error_body_gets_generic_message() {
        let network = MockNetwork::returning(vec![MockNetwork::json(502, "bad gateway")]);
        let (client, _session) = client_with(network);

        let err = client
            .get_json::<serde_json::Value>("/collections", &[])
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Request failed with status 502");
    }

    #[tokio::test]
    async fn test_json_body_sets_content_type() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "{}")]);
        let (client, _session) = client_with(network.clone());

        let body = serde_json::json!({"name": "Heritage"});
        let _: serde_json::Value = client
            .send_json("POST", "/collections", &[], &body)
            .await
            .unwrap();

        let request = network.last_request();
        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert!(matches!(request.body, HttpBody::Json(_)));
    }
}
