// src/models/collection.rs - Collection entity and slug derivation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, ordered grouping of products with its own display slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Request body for `POST /collections` and `PUT /collections/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CollectionPayload {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

/// Derives a URL-safe slug from a collection name: lowercase, runs of
/// non-alphanumeric characters collapsed to a single hyphen, no leading or
/// trailing hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_lowercase() {
        assert_eq!(slugify("Heritage Collection"), "heritage-collection");
    }

    #[test]
    fn test_non_alphanumeric_runs_collapse() {
        assert_eq!(slugify("New -- Arrivals!!"), "new-arrivals");
        assert_eq!(slugify("Édition   Limitée"), "dition-limit-e");
    }

    #[test]
    fn test_no_leading_or_trailing_hyphen() {
        assert_eq!(slugify("  Sunglasses  "), "sunglasses");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slug_alphabet_property() {
        for name in ["Atelier 2026", "L'Ombra / Nera", "  ", "Véluna&Co."] {
            let slug = slugify(name);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad slug {:?}",
                slug
            );
            assert!(!slug.starts_with('-'));
            assert!(!slug.ends_with('-'));
        }
    }

    #[test]
    fn test_collection_deserializes_backend_shape() {
        let json = r#"{
            "id": "c-1",
            "name": "New Arrivals",
            "slug": "new-arrivals",
            "description": "The latest in luxury eyewear",
            "is_active": true,
            "sort_order": 1,
            "created_at": "2026-01-10T12:00:00Z"
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.slug, "new-arrivals");
        assert_eq!(collection.image, None);
    }
}
