// src/models/product.rs - Product entity, payloads and the ordered image list

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Men, Gender::Women, Gender::Unisex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Unisex => "Unisex",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Sunglasses,
    Eyeglasses,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Sunglasses, ProductType::Eyeglasses];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunglasses => "Sunglasses",
            Self::Eyeglasses => "Eyeglasses",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
    Draft,
    Scheduled,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 4] = [
        ProductStatus::Active,
        ProductStatus::Inactive,
        ProductStatus::Draft,
        ProductStatus::Scheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product as returned by the backend. The client never persists these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub collection: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub sku: String,
    pub gender: Gender,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub frame_color: String,
    pub lens_color: String,
    pub materials: String,
    #[serde(default)]
    pub made_in: String,
    #[serde(default)]
    pub is_limited_edition: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_on_homepage: bool,
    #[serde(default = "default_true")]
    pub is_in_catalog: bool,
    pub status: ProductStatus,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub main_image: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    pub short_description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// A product is on sale iff an original (pre-discount) price is set.
    /// Derived, never stored, so the two can never disagree.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// The combined, ordered image list: main image first, then the gallery.
    pub fn images(&self) -> ImageSet {
        ImageSet::seeded(&self.main_image, &self.gallery_images)
    }
}

/// Request body for `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub collection: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub sku: String,
    pub gender: Gender,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub frame_color: String,
    pub lens_color: String,
    pub materials: String,
    pub made_in: String,
    pub is_limited_edition: bool,
    pub is_featured: bool,
    pub is_on_homepage: bool,
    pub is_in_catalog: bool,
    pub is_on_sale: bool,
    pub status: ProductStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub main_image: String,
    pub gallery_images: Vec<String>,
    pub short_description: String,
    pub full_description: Option<String>,
    pub tags: Vec<String>,
}

impl ProductPayload {
    /// Applies the submit-time normalization rules: `is_on_sale` follows
    /// `original_price`, and `scheduled_at` only survives when the status is
    /// actually `scheduled`.
    pub fn finalize(mut self) -> Self {
        self.is_on_sale = self.original_price.is_some();
        if self.status != ProductStatus::Scheduled {
            self.scheduled_at = None;
        }
        self
    }
}

/// Parses the value of a `datetime-local` input into a UTC timestamp.
pub fn parse_schedule_input(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Renders a UTC timestamp back into `datetime-local` input format.
pub fn format_schedule_input(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

/// The ordered combined image list of a product. Index 0 is always the main
/// image; every other entry is gallery, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<String>,
}

impl ImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from a stored product: main image first, gallery after.
    pub fn seeded(main_image: &str, gallery: &[String]) -> Self {
        let mut images = Vec::with_capacity(gallery.len() + 1);
        if !main_image.is_empty() {
            images.push(main_image.to_string());
        }
        images.extend(gallery.iter().cloned());
        Self { images }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn all(&self) -> &[String] {
        &self.images
    }

    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn gallery(&self) -> &[String] {
        self.images.get(1..).unwrap_or(&[])
    }

    /// A newly uploaded single image becomes the main image; the previous
    /// main image (if any) slides into the gallery.
    pub fn set_main(&mut self, url: String) {
        self.images.insert(0, url);
    }

    /// Appends uploaded images to the end of the gallery.
    pub fn append(&mut self, urls: impl IntoIterator<Item = String>) {
        self.images.extend(urls);
    }

    /// Moves an image to a new position. Moving to index 0 promotes it to
    /// main image. Out-of-range indices are ignored.
    pub fn move_image(&mut self, from: usize, to: usize) {
        if from >= self.images.len() || to >= self.images.len() {
            return;
        }
        let image = self.images.remove(from);
        self.images.insert(to, image);
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// (main_image, gallery_images) as they are written back to the product.
    /// Removing every image clears both.
    pub fn into_fields(self) -> (String, Vec<String>) {
        let mut iter = self.images.into_iter();
        let main = iter.next().unwrap_or_default();
        (main, iter.collect())
    }
}

/// Filter dimensions for the admin products listing. Unset dimensions are
/// omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub collection: Option<String>,
    pub gender: Option<Gender>,
    pub product_type: Option<ProductType>,
    pub status: Option<ProductStatus>,
    pub is_featured: Option<bool>,
    pub is_on_sale: Option<bool>,
    pub search: Option<String>,
    pub limit: Option<u32>,
}

impl ProductQuery {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(collection) = &self.collection {
            pairs.push(("collection".to_string(), collection.clone()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender".to_string(), gender.as_str().to_string()));
        }
        if let Some(product_type) = self.product_type {
            pairs.push(("type".to_string(), product_type.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(featured) = self.is_featured {
            pairs.push(("is_featured".to_string(), featured.to_string()));
        }
        if let Some(on_sale) = self.is_on_sale {
            pairs.push(("is_on_sale".to_string(), on_sale.to_string()));
        }
        if let Some(search) = &self.search {
            if !search.trim().is_empty() {
                pairs.push(("search".to_string(), search.trim().to_string()));
            }
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Milano Aviator".to_string(),
            collection: "Signature".to_string(),
            price: 850.0,
            original_price: None,
            sku: "VLN-AV-001".to_string(),
            gender: Gender::Unisex,
            product_type: ProductType::Sunglasses,
            frame_color: "Gold".to_string(),
            lens_color: "Brown Gradient".to_string(),
            materials: "Italian Acetate, 18k Gold Plated".to_string(),
            made_in: "Italy".to_string(),
            is_limited_edition: false,
            is_featured: true,
            is_on_homepage: true,
            is_in_catalog: true,
            status: ProductStatus::Active,
            scheduled_at: None,
            main_image: "https://cdn.veluna.test/a.jpg".to_string(),
            gallery_images: vec![
                "https://cdn.veluna.test/b.jpg".to_string(),
                "https://cdn.veluna.test/c.jpg".to_string(),
            ],
            short_description: "Timeless aviator design".to_string(),
            full_description: None,
            tags: vec!["aviator".to_string()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_on_sale_follows_original_price() {
        let mut product = sample_product();
        assert!(!product.is_on_sale());

        product.original_price = Some(1000.0);
        assert!(product.is_on_sale());

        product.original_price = None;
        assert!(!product.is_on_sale());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Scheduled).unwrap(),
            "\"scheduled\""
        );
        assert_eq!(
            serde_json::from_str::<ProductStatus>("\"draft\"").unwrap(),
            ProductStatus::Draft
        );
    }

    #[test]
    fn test_payload_finalize_derives_on_sale() {
        let payload = ProductPayload {
            name: "Roma Classic".to_string(),
            collection: "Heritage".to_string(),
            price: 780.0,
            original_price: Some(950.0),
            sku: "VLN-RC-002".to_string(),
            gender: Gender::Men,
            product_type: ProductType::Eyeglasses,
            frame_color: "Tortoiseshell".to_string(),
            lens_color: "Clear".to_string(),
            materials: "Acetate".to_string(),
            made_in: "Italy".to_string(),
            is_limited_edition: false,
            is_featured: false,
            is_on_homepage: false,
            is_in_catalog: true,
            is_on_sale: false,
            status: ProductStatus::Active,
            scheduled_at: Some(Utc::now()),
            main_image: "https://cdn.veluna.test/a.jpg".to_string(),
            gallery_images: Vec::new(),
            short_description: "Round frames".to_string(),
            full_description: None,
            tags: Vec::new(),
        };

        let finalized = payload.finalize();
        assert!(finalized.is_on_sale);
        // Not scheduled, so the timestamp is dropped.
        assert_eq!(finalized.scheduled_at, None);
    }

    #[test]
    fn test_payload_finalize_keeps_schedule_when_scheduled() {
        let scheduled_at = parse_schedule_input("2026-09-01T10:00");
        let payload = ProductPayload {
            status: ProductStatus::Scheduled,
            scheduled_at,
            original_price: None,
            name: String::new(),
            collection: String::new(),
            price: 0.0,
            sku: String::new(),
            gender: Gender::Unisex,
            product_type: ProductType::Sunglasses,
            frame_color: String::new(),
            lens_color: String::new(),
            materials: String::new(),
            made_in: String::new(),
            is_limited_edition: false,
            is_featured: false,
            is_on_homepage: false,
            is_in_catalog: true,
            is_on_sale: true,
            main_image: String::new(),
            gallery_images: Vec::new(),
            short_description: String::new(),
            full_description: None,
            tags: Vec::new(),
        }
        .finalize();

        assert_eq!(payload.scheduled_at, scheduled_at);
        assert!(!payload.is_on_sale);
    }

    #[test]
    fn test_schedule_input_parsing() {
        let parsed = parse_schedule_input("2026-03-15T09:30").unwrap();
        assert_eq!(format_schedule_input(&parsed), "2026-03-15T09:30");
        assert_eq!(parse_schedule_input(""), None);
        assert_eq!(parse_schedule_input("not a date"), None);
    }

    #[test]
    fn test_image_set_seeding_puts_main_first() {
        let product = sample_product();
        let images = product.images();
        assert_eq!(images.main_image(), Some("https://cdn.veluna.test/a.jpg"));
        assert_eq!(images.gallery().len(), 2);
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_reorder_promotes_new_main_image() {
        let mut images = ImageSet::seeded(
            "a.jpg",
            &["b.jpg".to_string(), "c.jpg".to_string(), "d.jpg".to_string()],
        );

        // Move "c.jpg" (index 2) to the front.
        images.move_image(2, 0);
        assert_eq!(images.main_image(), Some("c.jpg"));
        assert_eq!(
            images.gallery(),
            &["a.jpg".to_string(), "b.jpg".to_string(), "d.jpg".to_string()]
        );
    }

    #[test]
    fn test_set_main_keeps_previous_in_gallery() {
        let mut images = ImageSet::seeded("a.jpg", &["b.jpg".to_string()]);
        images.set_main("new.jpg".to_string());
        assert_eq!(images.main_image(), Some("new.jpg"));
        assert_eq!(images.gallery(), &["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn test_removing_last_image_clears_both_fields() {
        let mut images = ImageSet::seeded("a.jpg", &[]);
        images.remove(0);
        assert!(images.is_empty());

        let (main, gallery) = images.into_fields();
        assert_eq!(main, "");
        assert!(gallery.is_empty());
    }

    #[test]
    fn test_remove_middle_preserves_relative_order() {
        let mut images = ImageSet::seeded("a.jpg", &["b.jpg".to_string(), "c.jpg".to_string()]);
        images.remove(1);
        assert_eq!(images.all(), &["a.jpg".to_string(), "c.jpg".to_string()]);
    }

    #[test]
    fn test_out_of_range_move_is_ignored() {
        let mut images = ImageSet::seeded("a.jpg", &["b.jpg".to_string()]);
        images.move_image(5, 0);
        assert_eq!(images.main_image(), Some("a.jpg"));
    }

    #[test]
    fn test_query_skips_unset_dimensions() {
        let query = ProductQuery {
            collection: Some("Heritage".to_string()),
            is_featured: Some(true),
            search: Some("  aviator ".to_string()),
            limit: Some(100),
            ..Default::default()
        };

        let pairs = query.to_query();
        assert_eq!(
            pairs,
            vec![
                ("collection".to_string(), "Heritage".to_string()),
                ("is_featured".to_string(), "true".to_string()),
                ("search".to_string(), "aviator".to_string()),
                ("limit".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let query = ProductQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(query.to_query().is_empty());
    }

    #[test]
    fn test_product_deserializes_backend_shape() {
        let json = r#"{
            "id": "p-9",
            "name": "Venetian Square",
            "collection": "Contemporary",
            "price": 780.0,
            "original_price": 950.0,
            "sku": "VLN-VS-003",
            "gender": "Women",
            "type": "Sunglasses",
            "frame_color": "Black",
            "lens_color": "Gradient Grey",
            "materials": "Premium Acetate",
            "made_in": "Italy",
            "is_limited_edition": true,
            "is_featured": true,
            "is_on_sale": true,
            "status": "active",
            "main_image": "https://cdn.veluna.test/v.jpg",
            "gallery_images": [],
            "short_description": "Bold square silhouette",
            "tags": ["limited"],
            "created_at": "2026-01-10T12:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_type, ProductType::Sunglasses);
        assert!(product.is_on_sale());
        assert!(product.is_in_catalog);
    }
}
