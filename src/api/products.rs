// src/api/products.rs - Public and authoring operations on products

use crate::error::Result;
use crate::models::{Product, ProductPayload, ProductQuery};

use super::ApiClient;

/// One method per backend operation; no retry, no caching, no batching.
pub struct ProductsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ProductsApi<'_> {
    pub async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        self.client.get_json("/products", &query.to_query()).await
    }

    pub async fn featured(&self, limit: u32) -> Result<Vec<Product>> {
        let query = vec![("limit".to_string(), limit.to_string())];
        self.client.get_json("/products/featured", &query).await
    }

    pub async fn get(&self, id: &str) -> Result<Product> {
        self.client
            .get_json(&format!("/products/{}", id), &[])
            .await
    }

    pub async fn by_collection(&self, collection: &str, limit: u32) -> Result<Vec<Product>> {
        let query = vec![("limit".to_string(), limit.to_string())];
        self.client
            .get_json(&format!("/products/collection/{}", collection), &query)
            .await
    }

    pub async fn search(&self, term: &str, limit: u32) -> Result<Vec<Product>> {
        let query = vec![
            ("q".to_string(), term.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        self.client.get_json("/products/search", &query).await
    }

    pub async fn create(&self, payload: &ProductPayload) -> Result<Product> {
        self.client.send_json("POST", "/products", &[], payload).await
    }

    pub async fn update(&self, id: &str, payload: &ProductPayload) -> Result<Product> {
        self.client
            .send_json("PUT", &format!("/products/{}", id), &[], payload)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/products/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::*;
    use crate::models::{Gender, ProductQuery, ProductStatus};

    #[tokio::test]
    async fn test_list_builds_filtered_url() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "[]")]);
        let (client, _session) = client_with(network.clone());

        let query = ProductQuery {
            gender: Some(Gender::Women),
            status: Some(ProductStatus::Active),
            ..Default::default()
        };
        client.products().list(&query).await.unwrap();

        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/products?gender=Women&status=active"
        );
    }

    #[tokio::test]
    async fn test_featured_passes_limit() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "[]")]);
        let (client, _session) = client_with(network.clone());

        client.products().featured(8).await.unwrap();
        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/products/featured?limit=8"
        );
    }

    #[tokio::test]
    async fn test_search_encodes_term() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "[]")]);
        let (client, _session) = client_with(network.clone());

        client.products().search("gold aviator", 20).await.unwrap();
        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/products/search?q=gold%20aviator&limit=20"
        );
    }

    #[tokio::test]
    async fn test_delete_issues_delete_method() {
        let network = MockNetwork::returning(vec![MockNetwork::json(200, "{}")]);
        let (client, _session) = client_with(network.clone());

        client.products().delete("p-7").await.unwrap();
        let request = network.last_request();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.url, "https://api.veluna.test/api/products/p-7");
    }
}
