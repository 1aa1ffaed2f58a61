// src/ui/admin/products_list.rs - Searchable, filterable product table with bulk actions

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::content::FORM_COLLECTIONS;
use crate::fetch::FetchState;
use crate::models::{Gender, Product, ProductQuery, ProductStatus, ProductType};
use crate::ui::admin::{format_price, report_failure, ConfirmDialog, StatusBadge};
use crate::ui::hooks::use_admin_products;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_notifier, use_session};

const LIST_LIMIT: u32 = 100;

/// The multi-select set backing the bulk actions. Selection does not
/// survive a re-fetch: any filter or search change clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn toggle(&mut self, id: &str, selected: bool) {
        if selected {
            if !self.ids.iter().any(|existing| existing == id) {
                self.ids.push(id.to_string());
            }
        } else {
            self.ids.retain(|existing| existing != id);
        }
    }

    pub fn set_all(&mut self, products: &[Product], selected: bool) {
        if selected {
            self.ids = products.iter().map(|p| p.id.clone()).collect();
        } else {
            self.ids.clear();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

fn parse_bool_filter(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[component]
pub fn ProductsList() -> Element {
    let api = use_api();
    let session = use_session();
    let notifier = use_notifier();

    let mut query = use_signal(|| ProductQuery {
        limit: Some(LIST_LIMIT),
        ..Default::default()
    });
    let products = use_admin_products(query);
    let mut selection = use_signal(Selection::default);
    let mut pending_delete = use_signal(|| None::<Product>);

    // Every filter or search change re-fetches; the selection is cleared so
    // it can never reference rows outside the new result set.
    use_effect(move || {
        let _ = query();
        selection.with_mut(Selection::clear);
    });

    let run_bulk_update = {
        let api = api.clone();
        move |status: ProductStatus| {
            let ids = selection().ids().to_vec();
            if ids.is_empty() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                match api.admin().bulk_update_status(&ids, status).await {
                    Ok(()) => {
                        notifier.success(
                            "Success",
                            format!("Updated {} products to {}", ids.len(), status),
                        );
                    }
                    Err(e) => report_failure(session, notifier, "Failed to update products", &e),
                }
                selection.with_mut(Selection::clear);
                products.refetch();
            });
        }
    };

    let confirm_delete = {
        let api = api.clone();
        move |product: Product| {
            let api = api.clone();
            spawn(async move {
                match api.products().delete(&product.id).await {
                    Ok(()) => notifier.success("Success", "Product deleted successfully"),
                    Err(e) => report_failure(session, notifier, "Failed to delete product", &e),
                }
                selection.with_mut(Selection::clear);
                products.refetch();
            });
        }
    };

    let state = products.state;
    let body = match &*state.read() {
        FetchState::Idle | FetchState::Loading => rsx! {
            div {
                class: "animate-pulse space-y-2",
                for i in 0..5 {
                    div { key: "{i}", class: "h-16 bg-gray-200 rounded" }
                }
            }
        },
        FetchState::Error(message) => rsx! {
            div {
                class: "text-center py-12 bg-white rounded-lg shadow-sm border",
                p { class: "text-gray-600", "{message}" }
            }
        },
        FetchState::Success(list) => {
            let list = list.clone();
            rsx! {
                ProductsTable {
                    products: list,
                    selection: selection,
                    on_delete: move |product: Product| pending_delete.set(Some(product)),
                }
            }
        }
    };

    let total = state
        .read()
        .data()
        .map(|list: &Vec<Product>| list.len())
        .unwrap_or(0);
    let selected_count = selection().len();

    rsx! {
        div {
            class: "space-y-6",

            // Header
            div {
                class: "flex items-center justify-between",
                div {
                    h1 {
                        class: "text-2xl font-bold text-gray-900",
                        "Products"
                    }
                    p {
                        class: "text-gray-600",
                        "{total} products total"
                    }
                }
                Link {
                    to: Route::AdminProductNew {},
                    class: "inline-flex items-center px-4 py-2 bg-black text-white rounded-lg hover:bg-gray-800 transition-colors",
                    "+ Add Product"
                }
            }

            // Search and filters
            div {
                class: "bg-white rounded-lg shadow-sm border p-6",
                div {
                    class: "grid grid-cols-1 lg:grid-cols-4 gap-4",
                    div {
                        class: "lg:col-span-2",
                        input {
                            r#type: "text",
                            placeholder: "Search products...",
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                            value: query().search.clone().unwrap_or_default(),
                            oninput: move |e| query.with_mut(|q| {
                                let term = e.value();
                                q.search = if term.trim().is_empty() { None } else { Some(term) };
                            }),
                        }
                    }
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                        onchange: move |e| query.with_mut(|q| {
                            let value = e.value();
                            q.collection = if value.is_empty() { None } else { Some(value) };
                        }),
                        option { value: "", "All Collections" }
                        for name in FORM_COLLECTIONS {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                        onchange: move |e| query.with_mut(|q| q.status = ProductStatus::parse(&e.value())),
                        option { value: "", "All Status" }
                        for status in ProductStatus::ALL {
                            option { key: "{status}", value: status.as_str(), "{status}" }
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 lg:grid-cols-4 gap-4 mt-4",
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                        onchange: move |e| query.with_mut(|q| q.product_type = ProductType::parse(&e.value())),
                        option { value: "", "All Types" }
                        for kind in ProductType::ALL {
                            option { key: "{kind}", value: kind.as_str(), "{kind}" }
                        }
                    }
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                        onchange: move |e| query.with_mut(|q| q.gender = Gender::parse(&e.value())),
                        option { value: "", "All Genders" }
                        for gender in Gender::ALL {
                            option { key: "{gender}", value: gender.as_str(), "{gender}" }
                        }
                    }
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                        onchange: move |e| query.with_mut(|q| q.is_featured = parse_bool_filter(&e.value())),
                        option { value: "", "All Products" }
                        option { value: "true", "Featured Only" }
                        option { value: "false", "Non-Featured" }
                    }
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                        onchange: move |e| query.with_mut(|q| q.is_on_sale = parse_bool_filter(&e.value())),
                        option { value: "", "All Prices" }
                        option { value: "true", "On Sale" }
                        option { value: "false", "Regular Price" }
                    }
                }
            }

            // Bulk actions
            if !selection().is_empty() {
                div {
                    class: "bg-black text-white rounded-lg p-4",
                    div {
                        class: "flex items-center justify-between",
                        span { "{selected_count} products selected" }
                        div {
                            class: "flex space-x-4",
                            button {
                                r#type: "button",
                                class: "px-3 py-1 bg-green-600 rounded hover:bg-green-700",
                                onclick: {
                                    let mut run = run_bulk_update.clone();
                                    move |_| run(ProductStatus::Active)
                                },
                                "Make Active"
                            }
                            button {
                                r#type: "button",
                                class: "px-3 py-1 bg-red-600 rounded hover:bg-red-700",
                                onclick: {
                                    let mut run = run_bulk_update.clone();
                                    move |_| run(ProductStatus::Inactive)
                                },
                                "Make Inactive"
                            }
                            button {
                                r#type: "button",
                                class: "px-3 py-1 bg-gray-600 rounded hover:bg-gray-700",
                                onclick: move |_| selection.with_mut(Selection::clear),
                                "Cancel"
                            }
                        }
                    }
                }
            }

            {body}

            if let Some(product) = pending_delete() {
                ConfirmDialog {
                    title: "Delete product".to_string(),
                    message: format!("Are you sure you want to delete \"{}\"?", product.name),
                    confirm_label: "Delete".to_string(),
                    on_confirm: {
                        let mut confirm = confirm_delete.clone();
                        move |_| {
                            if let Some(product) = pending_delete.take() {
                                confirm(product);
                            }
                        }
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn ProductsTable(
    products: Vec<Product>,
    selection: Signal<Selection>,
    on_delete: EventHandler<Product>,
) -> Element {
    let mut selection = selection;
    let all_selected = !products.is_empty() && selection().len() == products.len();
    let table_products = products.clone();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border overflow-hidden",
            div {
                class: "overflow-x-auto",
                table {
                    class: "min-w-full divide-y divide-gray-200",
                    thead {
                        class: "bg-gray-50",
                        tr {
                            th {
                                class: "px-6 py-3 text-left",
                                input {
                                    r#type: "checkbox",
                                    checked: all_selected,
                                    onchange: {
                                        let products = products.clone();
                                        move |e: Event<FormData>| {
                                            let checked = e.checked();
                                            selection.with_mut(|s| s.set_all(&products, checked));
                                        }
                                    },
                                }
                            }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Product" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Collection" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Type" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Price" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Status" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Features" }
                            th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider", "Actions" }
                        }
                    }
                    tbody {
                        class: "bg-white divide-y divide-gray-200",
                        for product in table_products {
                            ProductRow {
                                key: "{product.id}",
                                product: product,
                                selection: selection,
                                on_delete: on_delete,
                            }
                        }
                    }
                }

                if products.is_empty() {
                    div {
                        class: "text-center py-12",
                        div {
                            class: "text-gray-500 mb-4",
                            "No products found"
                        }
                        Link {
                            to: Route::AdminProductNew {},
                            class: "inline-flex items-center px-4 py-2 bg-black text-white rounded-lg hover:bg-gray-800 transition-colors",
                            "+ Add Your First Product"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductRow(
    product: Product,
    selection: Signal<Selection>,
    on_delete: EventHandler<Product>,
) -> Element {
    let mut selection = selection;
    let navigator = use_navigator();
    let id = product.id.clone();
    let edit_id = product.id.clone();
    let delete_product = product.clone();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4",
                input {
                    r#type: "checkbox",
                    checked: selection().contains(&product.id),
                    onchange: move |e: Event<FormData>| {
                        let checked = e.checked();
                        selection.with_mut(|s| s.toggle(&id, checked));
                    },
                }
            }
            td {
                class: "px-6 py-4 whitespace-nowrap",
                div {
                    class: "flex items-center",
                    img {
                        class: "h-12 w-12 rounded-lg object-cover",
                        src: "{product.main_image}",
                        alt: "{product.name}",
                    }
                    div {
                        class: "ml-4",
                        div {
                            class: "text-sm font-medium text-gray-900",
                            "{product.name}"
                        }
                        div {
                            class: "text-sm text-gray-500",
                            "{product.sku}"
                        }
                    }
                }
            }
            td {
                class: "px-6 py-4 whitespace-nowrap text-sm text-gray-900",
                "{product.collection}"
            }
            td {
                class: "px-6 py-4 whitespace-nowrap",
                span {
                    class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-800",
                    "{product.product_type}"
                }
            }
            td {
                class: "px-6 py-4 whitespace-nowrap text-sm text-gray-900",
                div {
                    class: "flex items-center space-x-2",
                    span {
                        class: "font-medium",
                        {format_price(product.price)}
                    }
                    if let Some(original) = product.original_price {
                        span {
                            class: "text-gray-400 line-through text-xs",
                            {format_price(original)}
                        }
                    }
                }
            }
            td {
                class: "px-6 py-4 whitespace-nowrap",
                StatusBadge { status: product.status }
            }
            td {
                class: "px-6 py-4 whitespace-nowrap",
                div {
                    class: "flex space-x-2 items-center",
                    if product.is_featured {
                        span { title: "Featured", "⭐" }
                    }
                    if product.is_limited_edition {
                        span { title: "Limited Edition", "🏷" }
                    }
                    if product.is_on_sale() {
                        span {
                            class: "text-red-500 text-xs font-medium",
                            "SALE"
                        }
                    }
                }
            }
            td {
                class: "px-6 py-4 whitespace-nowrap text-right text-sm font-medium",
                div {
                    class: "flex items-center justify-end space-x-2",
                    button {
                        r#type: "button",
                        class: "p-2 text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded",
                        title: "Edit Product",
                        onclick: move |_| {
                            navigator.push(Route::AdminProductEdit { id: edit_id.clone() });
                        },
                        "✎"
                    }
                    button {
                        r#type: "button",
                        class: "p-2 text-gray-400 hover:text-red-600 hover:bg-red-50 rounded",
                        title: "Delete Product",
                        onclick: move |_| on_delete.call(delete_product.clone()),
                        "🗑"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            collection: "Signature".to_string(),
            price: 100.0,
            original_price: None,
            sku: format!("VLN-{}", id),
            gender: Gender::Unisex,
            product_type: ProductType::Sunglasses,
            frame_color: "Black".to_string(),
            lens_color: "Clear".to_string(),
            materials: "Acetate".to_string(),
            made_in: "Italy".to_string(),
            is_limited_edition: false,
            is_featured: false,
            is_on_homepage: false,
            is_in_catalog: true,
            status: ProductStatus::Active,
            scheduled_at: None,
            main_image: "a.jpg".to_string(),
            gallery_images: Vec::new(),
            short_description: "Frames".to_string(),
            full_description: None,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = Selection::default();
        selection.toggle("p-1", true);
        selection.toggle("p-1", true);
        assert_eq!(selection.len(), 1);

        selection.toggle("p-1", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_covers_every_row() {
        let products: Vec<Product> = (0..7).map(|i| product(&format!("p-{}", i))).collect();
        let mut selection = Selection::default();
        selection.set_all(&products, true);
        assert_eq!(selection.len(), 7);

        selection.set_all(&products, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_cleared_when_filters_change() {
        // Select all rows of a 7-item list, then change a filter: the
        // selection does not persist across the re-fetch.
        let products: Vec<Product> = (0..7).map(|i| product(&format!("p-{}", i))).collect();
        let mut selection = Selection::default();
        selection.set_all(&products, true);
        assert_eq!(selection.len(), 7);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_bool_filter_parsing() {
        assert_eq!(parse_bool_filter("true"), Some(true));
        assert_eq!(parse_bool_filter("false"), Some(false));
        assert_eq!(parse_bool_filter(""), None);
    }
}
