// src/ui/hooks.rs - Data-fetching hooks for storefront and admin views

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::error::Result;
use crate::fetch::{FetchState, RequestSequence};
use crate::models::{Collection, Product, ProductQuery};
use crate::ui::state::use_api;

/// Active collections for the storefront section.
pub fn use_active_collections() -> Signal<FetchState<Vec<Collection>>> {
    let api = use_api();
    let mut state = use_signal(|| FetchState::Idle);

    use_effect(move || {
        let api = api.clone();
        state.set(FetchState::Loading);
        spawn(async move {
            state.set(FetchState::settle(api.collections().active().await));
        });
    });

    state
}

/// Every collection, for the admin manager.
pub fn use_all_collections() -> CollectionsHook {
    let api = use_api();
    let mut state = use_signal(|| FetchState::Idle);
    let reload = use_signal(|| 0u32);

    use_effect(move || {
        let _ = reload();
        let api = api.clone();
        state.set(FetchState::Loading);
        spawn(async move {
            state.set(FetchState::settle(api.collections().list().await));
        });
    });

    CollectionsHook { state, reload }
}

#[derive(Clone, Copy)]
pub struct CollectionsHook {
    pub state: Signal<FetchState<Vec<Collection>>>,
    reload: Signal<u32>,
}

impl CollectionsHook {
    pub fn refetch(&self) {
        let mut reload = self.reload;
        let next = reload() + 1;
        reload.set(next);
    }
}

/// One collection plus the products in it, for the slug-addressed
/// collection page.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDetail {
    pub collection: Collection,
    pub products: Vec<Product>,
}

/// The products request needs the collection's display name, so the two
/// fetches are chained rather than joined.
async fn fetch_collection_detail(
    api: ApiClient,
    slug: String,
    limit: u32,
) -> Result<CollectionDetail> {
    let collection = api.collections().by_slug(&slug).await?;
    let products = api.products().by_collection(&collection.name, limit).await?;
    Ok(CollectionDetail {
        collection,
        products,
    })
}

/// Navigating between slug pages re-renders the same component, so the
/// slug is a reactive dependency rather than a plain capture.
pub fn use_collection_detail(slug: String, limit: u32) -> Signal<FetchState<CollectionDetail>> {
    let api = use_api();
    let mut state = use_signal(|| FetchState::Idle);
    let sequence = use_hook(RequestSequence::new);

    use_effect(use_reactive((&slug,), move |(slug,)| {
        let api = api.clone();
        let token = sequence.begin();
        state.set(FetchState::Loading);
        spawn(async move {
            let result = fetch_collection_detail(api, slug, limit).await;
            if token.is_current() {
                state.set(FetchState::settle(result));
            }
        });
    }));

    state
}

/// Featured products for the storefront grid.
pub fn use_featured_products(limit: u32) -> Signal<FetchState<Vec<Product>>> {
    let api = use_api();
    let mut state = use_signal(|| FetchState::Idle);

    use_effect(move || {
        let api = api.clone();
        state.set(FetchState::Loading);
        spawn(async move {
            state.set(FetchState::settle(api.products().featured(limit).await));
        });
    });

    state
}

/// One product by id, for the edit form. `None` stays idle.
pub fn use_product(id: Option<String>) -> Signal<FetchState<Product>> {
    let api = use_api();
    let mut state = use_signal(|| FetchState::Idle);

    use_effect(use_reactive((&id,), move |(id,)| {
        let Some(id) = id else {
            return;
        };
        let api = api.clone();
        state.set(FetchState::Loading);
        spawn(async move {
            state.set(FetchState::settle(api.products().get(&id).await));
        });
    }));

    state
}

/// Admin products listing, re-fetched immediately whenever the query signal
/// changes. Stale responses are dropped: a response only commits while its
/// request is still the newest one.
pub fn use_admin_products(query: Signal<ProductQuery>) -> AdminProductsHook {
    let api = use_api();
    let mut state = use_signal(|| FetchState::Idle);
    let reload = use_signal(|| 0u32);
    let sequence = use_hook(RequestSequence::new);

    use_effect(move || {
        let _ = reload();
        let query = query();
        let api = api.clone();
        let token = sequence.begin();
        state.set(FetchState::Loading);
        spawn(async move {
            let result = api.admin().products(&query).await;
            if token.is_current() {
                state.set(FetchState::settle(result));
            }
        });
    });

    AdminProductsHook { state, reload }
}

#[derive(Clone, Copy)]
pub struct AdminProductsHook {
    pub state: Signal<FetchState<Vec<Product>>>,
    reload: Signal<u32>,
}

impl AdminProductsHook {
    /// Idempotent re-run of the current query.
    pub fn refetch(&self) {
        let mut reload = self.reload;
        let next = reload() + 1;
        reload.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::*;

    #[tokio::test]
    async fn test_collection_detail_chains_slug_then_products() {
        let collection = r#"{
            "id": "c-1",
            "name": "Heritage",
            "slug": "heritage",
            "is_active": true,
            "sort_order": 1,
            "created_at": "2026-01-10T12:00:00Z"
        }"#;
        let network = MockNetwork::returning(vec![
            MockNetwork::json(200, collection),
            MockNetwork::json(200, "[]"),
        ]);
        let (client, _session) = client_with(network.clone());

        let detail = fetch_collection_detail(client, "heritage".to_string(), 50)
            .await
            .unwrap();

        assert_eq!(detail.collection.name, "Heritage");
        assert!(detail.products.is_empty());
        // The second request queries products by the collection's name.
        assert_eq!(network.request_count(), 2);
        assert_eq!(
            network.last_request().url,
            "https://api.veluna.test/api/products/collection/Heritage?limit=50"
        );
    }

    #[tokio::test]
    async fn test_unknown_slug_stops_before_the_products_request() {
        let network = MockNetwork::returning(vec![MockNetwork::json(
            404,
            r#"{"detail": "Collection not found"}"#,
        )]);
        let (client, _session) = client_with(network.clone());

        let err = fetch_collection_detail(client, "no-such-collection".to_string(), 50)
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Collection not found");
        assert_eq!(network.request_count(), 1);
    }
}
