// src/ui/admin/dashboard.rs - Aggregate stats and most recent products

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::error::Result;
use crate::fetch::FetchState;
use crate::models::{DashboardStats, Product, ProductQuery};
use crate::ui::admin::{format_price, StatusBadge};
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_session};

const RECENT_LIMIT: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
struct DashboardData {
    stats: DashboardStats,
    recent: Vec<Product>,
}

/// Joins the two concurrent dashboard requests into one view state. A
/// failure in either produces an explicit error state instead of leaving
/// the view loading forever.
fn join_dashboard(
    stats: Result<DashboardStats>,
    recent: Result<Vec<Product>>,
) -> FetchState<DashboardData> {
    match (stats, recent) {
        (Ok(stats), Ok(recent)) => FetchState::Success(DashboardData { stats, recent }),
        (Err(e), _) | (_, Err(e)) => FetchState::Error(e.user_message().to_string()),
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut state = use_signal(|| FetchState::Idle);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        let _ = reload();
        let api = api.clone();
        state.set(FetchState::Loading);
        spawn(async move {
            let recent_query = ProductQuery {
                limit: Some(RECENT_LIMIT),
                ..Default::default()
            };
            let admin = api.admin();
            let (stats, recent) =
                futures::join!(admin.stats(), admin.products(&recent_query));

            let expired = stats.as_ref().err().is_some_and(|e| e.is_session_expired())
                || recent.as_ref().err().is_some_and(|e| e.is_session_expired());
            if expired {
                session.set(None);
            }
            state.set(join_dashboard(stats, recent));
        });
    });

    let body = match &*state.read() {
        FetchState::Idle | FetchState::Loading => rsx! {
            div {
                class: "animate-pulse",
                div { class: "h-8 bg-gray-200 rounded w-1/4 mb-6" }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                    for i in 0..4 {
                        div { key: "{i}", class: "h-32 bg-gray-200 rounded-lg" }
                    }
                }
            }
        },
        FetchState::Error(message) => rsx! {
            div {
                class: "text-center py-12 bg-white rounded-lg shadow-sm border",
                div { class: "text-4xl mb-4", "⚠️" }
                h2 {
                    class: "text-xl font-bold text-gray-900 mb-2",
                    "Could not load the dashboard"
                }
                p {
                    class: "text-gray-600 mb-6",
                    "{message}"
                }
                button {
                    r#type: "button",
                    class: "inline-flex items-center px-4 py-2 bg-black text-white rounded-lg hover:bg-gray-800",
                    onclick: move |_| {
                        let next = reload() + 1;
                        reload.set(next);
                    },
                    "Try Again"
                }
            }
        },
        FetchState::Success(data) => {
            let data = data.clone();
            rsx! {
                StatCards { stats: data.stats }
                RecentProducts { products: data.recent }
            }
        }
    };

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex items-center justify-between",
                div {
                    h1 {
                        class: "text-2xl font-bold text-gray-900",
                        "Dashboard"
                    }
                    p {
                        class: "text-gray-600",
                        "Welcome to Veluna Eyewear Admin"
                    }
                }
                Link {
                    to: Route::AdminProductNew {},
                    class: "inline-flex items-center px-4 py-2 bg-black text-white rounded-lg hover:bg-gray-800 transition-colors duration-200",
                    "+ Add Product"
                }
            }
            {body}
        }
    }
}

#[component]
fn StatCards(stats: DashboardStats) -> Element {
    let cards = [
        ("Total Products", stats.total_products, "📦", "bg-blue-500"),
        ("Active Products", stats.active_products, "👁", "bg-green-500"),
        ("Featured Products", stats.featured_products, "⭐", "bg-purple-500"),
        ("On Sale", stats.on_sale_products, "🏷", "bg-orange-500"),
    ];

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
            for (name, value, icon, color) in cards {
                div {
                    key: "{name}",
                    class: "bg-white rounded-lg shadow-sm p-6",
                    div {
                        class: "flex items-center justify-between",
                        div {
                            p {
                                class: "text-sm font-medium text-gray-600",
                                "{name}"
                            }
                            p {
                                class: "text-3xl font-bold text-gray-900",
                                "{value}"
                            }
                        }
                        div {
                            class: "p-3 rounded-full {color} text-white text-xl",
                            "{icon}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentProducts(products: Vec<Product>) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border",
            div {
                class: "px-6 py-4 border-b border-gray-200 flex items-center justify-between",
                h3 {
                    class: "text-lg font-medium text-gray-900",
                    "Recent Products"
                }
                Link {
                    to: Route::AdminProducts {},
                    class: "text-sm text-gray-500 hover:text-black",
                    "View all"
                }
            }
            if products.is_empty() {
                div {
                    class: "text-center py-10 text-gray-500",
                    "No products yet"
                }
            } else {
                ul {
                    class: "divide-y divide-gray-200",
                    for product in products {
                        li {
                            key: "{product.id}",
                            class: "px-6 py-4 flex items-center justify-between hover:bg-gray-50",
                            div {
                                class: "flex items-center",
                                img {
                                    class: "h-10 w-10 rounded-lg object-cover",
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
                            div {
                                class: "flex items-center space-x-4",
                                span {
                                    class: "text-sm font-medium text-gray-900",
                                    {format_price(product.price)}
                                }
                                StatusBadge { status: product.status }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn stats() -> DashboardStats {
        DashboardStats {
            total_products: 24,
            active_products: 18,
            featured_products: 6,
            on_sale_products: 3,
            total_collections: 5,
            active_collections: 4,
        }
    }

    #[test]
    fn test_join_requires_both_requests() {
        let state = join_dashboard(Ok(stats()), Ok(Vec::new()));
        assert!(state.data().is_some());
    }

    #[test]
    fn test_stats_failure_becomes_error_state() {
        let state = join_dashboard(
            Err(Error::api(500, "/admin/stats", "Internal server error")),
            Ok(Vec::new()),
        );
        assert_eq!(state.error(), Some("Internal server error"));
    }

    #[test]
    fn test_recent_failure_becomes_error_state() {
        let state = join_dashboard(
            Ok(stats()),
            Err(Error::network("/admin/products", "connection refused")),
        );
        assert!(state.error().is_some());
    }
}
