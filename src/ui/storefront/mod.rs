// src/ui/storefront/mod.rs - Storefront sections and their shared render states

use dioxus::prelude::*;

mod about;
mod collection_detail;
mod collections;
mod featured;
mod hero;

pub use about::AboutSection;
pub use collection_detail::CollectionDetailSection;
pub use collections::CollectionsSection;
pub use featured::FeaturedSection;
pub use hero::HeroSection;

/// Loading skeleton for a card grid, sized to match the final layout so the
/// page does not jump when data arrives.
#[component]
pub fn SectionSkeleton(#[props(default = 3)] cards: usize) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 animate-pulse",
            for i in 0..cards {
                div {
                    key: "{i}",
                    div { class: "h-96 bg-gray-200 rounded" }
                    div { class: "h-4 bg-gray-200 rounded w-2/3 mt-4" }
                    div { class: "h-3 bg-gray-200 rounded w-1/2 mt-2" }
                }
            }
        }
    }
}

/// Inline error block shown in place of a section's content. No retry
/// button; storefront sections fail quietly.
#[component]
pub fn SectionError(message: String) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            p {
                class: "text-gray-500 font-light",
                "{message}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_creation() {
        let _skeleton = rsx! { SectionSkeleton { cards: 4 } };
    }

    #[test]
    fn test_error_creation() {
        let _error = rsx! { SectionError { message: "Failed to fetch collections".to_string() } };
    }
}
