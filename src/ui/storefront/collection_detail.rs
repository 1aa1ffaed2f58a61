// src/ui/storefront/collection_detail.rs - Slug-addressed collection page

use dioxus::prelude::*;

use crate::fetch::FetchState;
use crate::models::Product;
use crate::ui::admin::format_price;
use crate::ui::hooks::use_collection_detail;
use crate::ui::storefront::{SectionError, SectionSkeleton};

const COLLECTION_PRODUCT_LIMIT: u32 = 50;

/// Renders one collection: banner, description, and the products in it.
#[component]
pub fn CollectionDetailSection(slug: String) -> Element {
    let state = use_collection_detail(slug, COLLECTION_PRODUCT_LIMIT);

    let body = match &*state.read() {
        FetchState::Idle | FetchState::Loading => rsx! { SectionSkeleton { cards: 3 } },
        FetchState::Error(message) => rsx! { SectionError { message: message.clone() } },
        FetchState::Success(detail) => {
            let name = detail.collection.name.clone();
            let description = detail.collection.description.clone().unwrap_or_default();
            let image = detail.collection.image.clone();
            let products = detail.products.clone();
            rsx! {
                div {
                    class: "text-center mb-16",
                    h1 {
                        class: "text-5xl lg:text-6xl font-light tracking-wider text-black mb-6",
                        "{name}"
                    }
                    div {
                        class: "w-24 h-px bg-black mx-auto mb-8"
                    }
                    if !description.is_empty() {
                        p {
                            class: "text-lg text-gray-600 font-light max-w-2xl mx-auto leading-relaxed",
                            "{description}"
                        }
                    }
                }
                if let Some(image) = image {
                    div {
                        class: "relative h-72 lg:h-96 overflow-hidden mb-16 bg-gray-100",
                        img {
                            class: "w-full h-full object-cover",
                            src: "{image}",
                            alt: "{name}",
                        }
                    }
                }
                if products.is_empty() {
                    div {
                        class: "text-center py-12",
                        p {
                            class: "text-gray-500 font-light",
                            "No products in this collection yet."
                        }
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                        for product in products {
                            CollectionProductTile { key: "{product.id}", product: product }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "py-24 bg-white",
            div {
                class: "max-w-7xl mx-auto px-6 lg:px-8",
                {body}
            }
        }
    }
}

#[component]
fn CollectionProductTile(product: Product) -> Element {
    rsx! {
        div {
            class: "group bg-white overflow-hidden hover:shadow-xl transition-shadow duration-500",
            div {
                class: "relative h-72 overflow-hidden bg-gray-100",
                img {
                    class: "w-full h-full object-cover transition-transform duration-700 group-hover:scale-105",
                    src: "{product.main_image}",
                    alt: "{product.name}",
                }
                if product.is_limited_edition {
                    span {
                        class: "absolute top-4 left-4 bg-black text-white text-xs tracking-wider uppercase px-3 py-1",
                        "Limited"
                    }
                }
                if product.is_on_sale() {
                    span {
                        class: "absolute top-4 right-4 bg-red-600 text-white text-xs tracking-wider uppercase px-3 py-1",
                        "Sale"
                    }
                }
            }
            div {
                class: "p-6 text-center",
                h3 {
                    class: "text-lg font-medium text-black mb-2",
                    "{product.name}"
                }
                p {
                    class: "text-sm text-gray-600 font-light mb-4",
                    "{product.short_description}"
                }
                div {
                    class: "flex items-center justify-center space-x-3",
                    span {
                        class: "text-lg font-medium text-black",
                        {format_price(product.price)}
                    }
                    if let Some(original) = product.original_price {
                        span {
                            class: "text-sm text-gray-400 line-through",
                            {format_price(original)}
                        }
                    }
                }
            }
        }
    }
}
