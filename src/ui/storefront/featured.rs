// src/ui/storefront/featured.rs - Featured products grid with static fallback

use dioxus::prelude::*;

use crate::content::FALLBACK_FEATURED;
use crate::fetch::FetchState;
use crate::models::Product;
use crate::ui::admin::format_price;
use crate::ui::hooks::use_featured_products;
use crate::ui::storefront::{SectionError, SectionSkeleton};

const FEATURED_LIMIT: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
struct ProductCard {
    name: String,
    collection: String,
    price: f64,
    original_price: Option<f64>,
    short_description: String,
    image: String,
    is_limited_edition: bool,
}

/// Empty backend result falls back to the build-time featured set.
fn display_cards(products: &[Product]) -> Vec<ProductCard> {
    if products.is_empty() {
        return FALLBACK_FEATURED
            .iter()
            .map(|entry| ProductCard {
                name: entry.name.to_string(),
                collection: entry.collection.to_string(),
                price: entry.price,
                original_price: entry.original_price,
                short_description: entry.short_description.to_string(),
                image: entry.main_image.to_string(),
                is_limited_edition: entry.is_limited_edition,
            })
            .collect();
    }

    products
        .iter()
        .map(|product| ProductCard {
            name: product.name.clone(),
            collection: product.collection.clone(),
            price: product.price,
            original_price: product.original_price,
            short_description: product.short_description.clone(),
            image: product.main_image.clone(),
            is_limited_edition: product.is_limited_edition,
        })
        .collect()
}

#[component]
pub fn FeaturedSection() -> Element {
    let state = use_featured_products(FEATURED_LIMIT);

    let body = match &*state.read() {
        FetchState::Idle | FetchState::Loading => rsx! { SectionSkeleton { cards: 4 } },
        FetchState::Error(message) => rsx! { SectionError { message: message.clone() } },
        FetchState::Success(products) => {
            let cards = display_cards(products);
            rsx! {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for card in cards {
                        FeaturedTile { key: "{card.name}", card: card }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "py-24 bg-gray-50",
            div {
                class: "max-w-7xl mx-auto px-6 lg:px-8",
                div {
                    class: "text-center mb-20",
                    h2 {
                        class: "text-5xl lg:text-6xl font-light tracking-wider text-black mb-6",
                        "Featured"
                    }
                    div {
                        class: "w-24 h-px bg-black mx-auto mb-8"
                    }
                    p {
                        class: "text-lg text-gray-600 font-light max-w-2xl mx-auto leading-relaxed",
                        "Signature pieces chosen from our current collections."
                    }
                }
                {body}
            }
        }
    }
}

#[component]
fn FeaturedTile(card: ProductCard) -> Element {
    rsx! {
        div {
            class: "group bg-white overflow-hidden hover:shadow-xl transition-shadow duration-500",
            div {
                class: "relative h-72 overflow-hidden bg-gray-100",
                img {
                    class: "w-full h-full object-cover transition-transform duration-700 group-hover:scale-105",
                    src: "{card.image}",
                    alt: "{card.name}",
                }
                if card.is_limited_edition {
                    span {
                        class: "absolute top-4 left-4 bg-black text-white text-xs tracking-wider uppercase px-3 py-1",
                        "Limited"
                    }
                }
                if card.original_price.is_some() {
                    span {
                        class: "absolute top-4 right-4 bg-red-600 text-white text-xs tracking-wider uppercase px-3 py-1",
                        "Sale"
                    }
                }
            }
            div {
                class: "p-6 text-center",
                p {
                    class: "text-xs text-gray-500 uppercase tracking-[0.2em] mb-2",
                    "{card.collection}"
                }
                h3 {
                    class: "text-lg font-medium text-black mb-2",
                    "{card.name}"
                }
                p {
                    class: "text-sm text-gray-600 font-light mb-4",
                    "{card.short_description}"
                }
                div {
                    class: "flex items-center justify-center space-x-3",
                    span {
                        class: "text-lg font-medium text-black",
                        {format_price(card.price)}
                    }
                    if let Some(original) = card.original_price {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_falls_back_to_static_set() {
        let cards = display_cards(&[]);
        assert_eq!(cards.len(), FALLBACK_FEATURED.len());
        assert_eq!(cards[0].name, "Milano Aviator");
    }
}
