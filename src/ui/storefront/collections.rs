// src/ui/storefront/collections.rs - Collections grid with empty-result fallback

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::content::FALLBACK_COLLECTIONS;
use crate::fetch::FetchState;
use crate::models::Collection;
use crate::ui::hooks::use_active_collections;
use crate::ui::router::Route;
use crate::ui::storefront::{SectionError, SectionSkeleton};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CollectionCard {
    name: String,
    slug: String,
    description: String,
    image: String,
}

/// Maps fetched collections to display cards. An empty result set falls
/// back to the three build-time entries so the section is never blank.
fn display_cards(collections: &[Collection]) -> Vec<CollectionCard> {
    if collections.is_empty() {
        return FALLBACK_COLLECTIONS
            .iter()
            .map(|entry| CollectionCard {
                name: entry.name.to_string(),
                slug: entry.slug.to_string(),
                description: entry.description.to_string(),
                image: entry.image.to_string(),
            })
            .collect();
    }

    collections
        .iter()
        .map(|collection| CollectionCard {
            name: collection.name.clone(),
            slug: collection.slug.clone(),
            description: collection.description.clone().unwrap_or_default(),
            image: collection.image.clone().unwrap_or_default(),
        })
        .collect()
}

#[component]
pub fn CollectionsSection() -> Element {
    let state = use_active_collections();

    let body = match &*state.read() {
        FetchState::Idle | FetchState::Loading => rsx! { SectionSkeleton { cards: 3 } },
        FetchState::Error(message) => rsx! { SectionError { message: message.clone() } },
        FetchState::Success(collections) => {
            let cards = display_cards(collections);
            rsx! {
                div {
                    class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                    for card in cards {
                        CollectionTile { key: "{card.name}", card: card }
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
                div {
                    class: "text-center mb-20",
                    h2 {
                        class: "text-5xl lg:text-6xl font-light tracking-wider text-black mb-6",
                        "Collections"
                    }
                    div {
                        class: "w-24 h-px bg-black mx-auto mb-8"
                    }
                    p {
                        class: "text-lg text-gray-600 font-light max-w-2xl mx-auto leading-relaxed",
                        "Explore our carefully curated collections, each telling a unique story of craftsmanship and design excellence."
                    }
                }
                {body}
            }
        }
    }
}

#[component]
fn CollectionTile(card: CollectionCard) -> Element {
    rsx! {
        Link {
            to: Route::CollectionBySlug {
                slug: card.slug.clone(),
            },
            class: "group block relative overflow-hidden cursor-pointer transform hover:scale-[1.02] transition-all duration-700",
            div {
                class: "relative h-96 lg:h-[500px] overflow-hidden bg-gray-100",
                if !card.image.is_empty() {
                    img {
                        class: "w-full h-full object-cover transition-transform duration-700 group-hover:scale-110",
                        src: "{card.image}",
                        alt: "{card.name}",
                    }
                }
                div {
                    class: "absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500"
                }
                div {
                    class: "absolute bottom-0 left-0 right-0 p-8 transform translate-y-4 group-hover:translate-y-0 transition-transform duration-500",
                    h3 {
                        class: "text-3xl font-light text-white mb-3 tracking-wide",
                        "{card.name}"
                    }
                    p {
                        class: "text-white/90 font-light opacity-0 group-hover:opacity-100 transition-opacity duration-500",
                        "{card.description}"
                    }
                }
            }
            div {
                class: "py-6 text-center",
                h4 {
                    class: "text-xl font-medium text-black mb-2 tracking-wide",
                    "{card.name}"
                }
                p {
                    class: "text-gray-600 font-light",
                    "{card.description}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_empty_result_renders_three_fallback_entries() {
        let cards = display_cards(&[]);
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["New Arrivals", "Sunglasses", "Eyeglasses"]);
    }

    #[test]
    fn test_backend_collections_take_precedence() {
        let collections = vec![Collection {
            id: "c-1".to_string(),
            name: "Heritage".to_string(),
            slug: "heritage".to_string(),
            description: Some("Classic frames".to_string()),
            image: None,
            is_active: true,
            sort_order: 1,
            created_at: Utc::now(),
        }];

        let cards = display_cards(&collections);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Heritage");
        assert_eq!(cards[0].slug, "heritage");
        assert_eq!(cards[0].image, "");
    }
}
