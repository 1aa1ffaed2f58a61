// src/api/admin.rs - Authenticated back-office operations

use crate::error::Result;
use crate::models::{
    BulkStatusRequest, DashboardStats, LoginRequest, MultiUploadResponse, Product, ProductQuery,
    ProductStatus, RegisterRequest, TokenResponse, UploadResponse,
};
use crate::platform::FilePart;
use crate::session::AdminUser;
use crate::uploads::UploadFile;

use super::ApiClient;

/// Category discriminator for the upload endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCategory {
    Products,
    Collections,
}

impl UploadCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Collections => "collections",
        }
    }
}

pub struct AdminApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AdminApi<'_> {
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        self.client
            .send_json("POST", "/admin/login", &[], request)
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AdminUser> {
        self.client
            .send_json("POST", "/admin/register", &[], request)
            .await
    }

    /// The admin backing the current bearer token. A 401 here invalidates
    /// the restored session through the client's global handler.
    pub async fn me(&self) -> Result<AdminUser> {
        self.client.get_json("/admin/me", &[]).await
    }

    /// Products regardless of status, with the admin filter dimensions.
    pub async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        self.client
            .get_json("/admin/products", &query.to_query())
            .await
    }

    pub async fn update_status(&self, id: &str, status: ProductStatus) -> Result<()> {
        let query = vec![("status".to_string(), status.as_str().to_string())];
        self.client
            .put_empty(&format!("/admin/products/{}/status", id), &query)
            .await
    }

    /// One request changing the status of every listed product.
    pub async fn bulk_update_status(&self, ids: &[String], status: ProductStatus) -> Result<()> {
        let body = BulkStatusRequest {
            product_ids: ids.to_vec(),
            status: status.as_str().to_string(),
        };
        self.client
            .send_json_discard("PUT", "/admin/products/bulk/status", &[], &body)
            .await
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        self.client.get_json("/admin/stats", &[]).await
    }

    pub async fn upload_image(
        &self,
        file: UploadFile,
        category: UploadCategory,
    ) -> Result<UploadResponse> {
        let query = vec![("category".to_string(), category.as_str().to_string())];
        let part = FilePart {
            field: "file".to_string(),
            file_name: file.name,
            content_type: file.content_type,
            bytes: file.bytes,
        };
        self.client
            .post_multipart("/admin/upload", &query, vec![part])
            .await
    }

    pub async fn upload_images(
        &self,
        files: Vec<UploadFile>,
        category: UploadCategory,
    ) -> Result<MultiUploadResponse> {
        let query = vec![("category".to_string(), category.as_str().to_string())];
        let parts = files
            .into_iter()
            .map(|file| FilePart {
                field: "files".to_string(),
                file_name: file.name,
                content_type: file.content_type,
                bytes: file.bytes,
            })
            .collect();
        self.client
            .post_multipart("/admin/upload/multiple", &query, parts)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::*;
    use crate::platform::HttpBody;

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let body = r#"{
            "access_token": "jwt-1",
            "token_type": "bearer",
            "expires_in": 3600,
            "user_info": {"username": "giulia", "role": "admin"}
        }"#;
        let network = MockNetwork::returning(vec![MockNetwork::json(200, body)]);
        let (client, _session) = client_with(network.clone());

        let token = client
            .admin()
            .login(&LoginRequest {
                username: "giulia".to_string(),
                password: "segreto".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(token.access_token, "jwt-1");
        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/admin/login"
        );
    }

    #[tokio::test]
    async fn test_status_update_uses_query_parameter() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "{}")]);
        let (client, session) = client_with(network.clone());
        logged_in(&session).await;

        client
            .admin()
            .update_status("p-3", ProductStatus::Inactive)
            .await
            .unwrap();

        let request = network.last_request();
        assert_eq!(request.method, "PUT");
        assert_eq!(
            request.url,
            "https://api.veluna.test/api/admin/products/p-3/status?status=inactive"
        );
    }

    #[tokio::test]
    async fn test_bulk_update_sends_single_request_with_ids() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "{}")]);
        let (client, session) = client_with(network.clone());
        logged_in(&session).await;

        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        client
            .admin()
            .bulk_update_status(&ids, ProductStatus::Active)
            .await
            .unwrap();

        assert_eq!(network.request_count(), 1);
        let request = network.last_request();
        match &request.body {
            HttpBody::Json(bytes) => {
                let value: serde_json::Value = serde_json::from_slice(bytes).unwrap();
                assert_eq!(value["product_ids"].as_array().unwrap().len(), 3);
                assert_eq!(value["status"], "active");
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_single_upload_builds_multipart_file_field() {
        let network =
            MockNetwork::returning(vec![MockNetwork::json(200, r#"{"image_url": "/u/a.jpg"}"#)]);
        let (client, session) = client_with(network.clone());
        logged_in(&session).await;

        let file = UploadFile {
            name: "front.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
        };
        let response = client
            .admin()
            .upload_image(file, UploadCategory::Products)
            .await
            .unwrap();

        assert_eq!(response.image_url, "/u/a.jpg");
        let request = network.last_request();
        assert_eq!(
            request.url,
            "https://api.veluna.test/api/admin/upload?category=products"
        );
        match &request.body {
            HttpBody::Multipart(parts) => {
                assert_eq!(parts.len(), 1);
                assert_eq!(parts[0].field, "file");
                assert_eq!(parts[0].content_type, "image/jpeg");
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_multi_upload_repeats_files_field() {
        let network = MockNetwork::returning(vec![MockNetwork::json(
            200,
            r#"{"image_urls": ["/u/a.jpg", "/u/b.jpg"]}"#,
        )]);
        let (client, session) = client_with(network.clone());
        logged_in(&session).await;

        let files = vec![
            UploadFile {
                name: "a.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: vec![1],
            },
            UploadFile {
                name: "b.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![2],
            },
        ];
        let response = client
            .admin()
            .upload_images(files, UploadCategory::Collections)
            .await
            .unwrap();

        assert_eq!(response.image_urls.len(), 2);
        let request = network.last_request();
        match &request.body {
            HttpBody::Multipart(parts) => {
                assert!(parts.iter().all(|p| p.field == "files"));
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }
}
