// src/api/collections.rs - Collection CRUD operations

use crate::error::Result;
use crate::models::{Collection, CollectionPayload};

use super::ApiClient;

pub struct CollectionsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl CollectionsApi<'_> {
    pub async fn list(&self) -> Result<Vec<Collection>> {
        self.client.get_json("/collections", &[]).await
    }

    /// Active collections only, in `sort_order`.
    pub async fn active(&self) -> Result<Vec<Collection>> {
        self.client.get_json("/collections/active", &[]).await
    }

    pub async fn get(&self, id: &str) -> Result<Collection> {
        self.client
            .get_json(&format!("/collections/{}", id), &[])
            .await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Collection> {
        self.client
            .get_json(&format!("/collections/slug/{}", slug), &[])
            .await
    }

    pub async fn create(&self, payload: &CollectionPayload) -> Result<Collection> {
        self.client
            .send_json("POST", "/collections", &[], payload)
            .await
    }

    pub async fn update(&self, id: &str, payload: &CollectionPayload) -> Result<Collection> {
        self.client
            .send_json("PUT", &format!("/collections/{}", id), &[], payload)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/collections/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::*;
    use crate::models::CollectionPayload;

    #[tokio::test]
    async fn test_active_collections_path() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "[]")]);
        let (client, _session) = client_with(network.clone());

        client.collections().active().await.unwrap();
        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/collections/active"
        );
    }

    #[tokio::test]
    async fn test_get_by_id_and_slug_paths() {
        let body = r#"{
            "id": "c-1",
            "name": "New Arrivals",
            "slug": "new-arrivals",
            "is_active": true,
            "sort_order": 1,
            "created_at": "2026-01-10T12:00:00Z"
        }"#;
        let network = MockNetwork::returning(vec![
            MockNetwork::json(200, body),
            MockNetwork::json(200, body),
        ]);
        let (client, _session) = client_with(network.clone());

        let by_id = client.collections().get("c-1").await.unwrap();
        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/collections/c-1"
        );

        let by_slug = client.collections().by_slug("new-arrivals").await.unwrap();
        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/collections/slug/new-arrivals"
        );
        assert_eq!(by_id, by_slug);
    }

    #[tokio::test]
    async fn test_create_posts_payload() {
        let created = r#"{
            "id": "c-2",
            "name": "Heritage",
            "slug": "heritage",
            "is_active": true,
            "sort_order": 2,
            "created_at": "2026-02-01T09:00:00Z"
        }"#;
        let network = MockNetwork::returning(vec![MockNetwork::json(200, created)]);
        let (client, _session) = client_with(network.clone());

        let payload = CollectionPayload {
            name: "Heritage".to_string(),
            slug: "heritage".to_string(),
            is_active: true,
            sort_order: 2,
            ..Default::default()
        };
        let collection = client.collections().create(&payload).await.unwrap();

        assert_eq!(collection.id, "c-2");
        assert_eq!(network.last_request().method, "POST");
    }
}
