// src/models/admin.rs - Authentication payloads, dashboard stats, upload responses

use serde::{Deserialize, Serialize};

use crate::session::AdminUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Response of `POST /admin/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user_info: AdminUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Aggregate counters from `GET /admin/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub active_products: u64,
    #[serde(default)]
    pub featured_products: u64,
    #[serde(default)]
    pub on_sale_products: u64,
    #[serde(default)]
    pub total_collections: u64,
    #[serde(default)]
    pub active_collections: u64,
}

/// Response of `POST /admin/upload`: the public URL of the stored image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub image_url: String,
}

/// Response of `POST /admin/upload/multiple`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiUploadResponse {
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Request body for `PUT /admin/products/bulk/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkStatusRequest {
    pub product_ids: Vec<String>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AdminRole;

    #[test]
    fn test_token_response_parses_login_shape() {
        let json = r#"{
            "access_token": "jwt-abc",
            "token_type": "bearer",
            "expires_in": 3600,
            "user_info": {"username": "giulia", "role": "admin"}
        }"#;

        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "jwt-abc");
        assert_eq!(token.user_info.role, AdminRole::Admin);
    }

    #[test]
    fn test_stats_default_to_zero_for_missing_fields() {
        let stats: DashboardStats = serde_json::from_str(r#"{"total_products": 12}"#).unwrap();
        assert_eq!(stats.total_products, 12);
        assert_eq!(stats.on_sale_products, 0);
    }

    #[test]
    fn test_bulk_request_shape() {
        let body = BulkStatusRequest {
            product_ids: vec!["a".to_string(), "b".to_string()],
            status: "inactive".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["product_ids"][1], "b");
        assert_eq!(json["status"], "inactive");
    }
}
