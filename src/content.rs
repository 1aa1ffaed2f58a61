// src/content.rs - Build-time storefront content and empty-state fallbacks

/// Hero section copy. The hero has no backend dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub video_url: &'static str,
    pub cta: &'static str,
}

pub const HERO: HeroContent = HeroContent {
    title: "VELUNA EYEWEAR",
    subtitle: "Luxury Crafted for Visionaries",
    description: "Discover our exclusive collection of handcrafted sunglasses and eyeglasses, where Italian artisanship meets contemporary design.",
    video_url: "https://videos.pexels.com/video-files/7710243/7710243-hd_1920_1080_30fps.mp4",
    cta: "Explore Collection",
};

/// A collection entry shown when the backend returns no collections, so the
/// storefront section is never blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCollection {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const FALLBACK_COLLECTIONS: [StaticCollection; 3] = [
    StaticCollection {
        name: "New Arrivals",
        slug: "new-arrivals",
        description: "The latest in luxury eyewear",
        image: "https://images.unsplash.com/photo-1589642380614-4a8c2147b857?w=1200&q=85",
    },
    StaticCollection {
        name: "Sunglasses",
        slug: "sunglasses",
        description: "Premium sun protection",
        image: "https://images.unsplash.com/photo-1639762485055-1565f145bf2d?w=1200&q=85",
    },
    StaticCollection {
        name: "Eyeglasses",
        slug: "eyeglasses",
        description: "Sophisticated vision clarity",
        image: "https://images.unsplash.com/photo-1591843336300-89d113fcacd8?w=1200&q=85",
    },
];

/// Featured product shown when the backend has no featured products yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticProduct {
    pub name: &'static str,
    pub collection: &'static str,
    pub price: f64,
    pub original_price: Option<f64>,
    pub sku: &'static str,
    pub short_description: &'static str,
    pub main_image: &'static str,
    pub is_limited_edition: bool,
}

pub const FALLBACK_FEATURED: [StaticProduct; 4] = [
    StaticProduct {
        name: "Milano Aviator",
        collection: "Signature",
        price: 850.0,
        original_price: None,
        sku: "VLN-AV-001",
        short_description: "Timeless aviator design with modern luxury refinement",
        main_image: "https://images.unsplash.com/photo-1589642380614-4a8c2147b857?w=1200&q=85",
        is_limited_edition: false,
    },
    StaticProduct {
        name: "Roma Classic",
        collection: "Heritage",
        price: 920.0,
        original_price: None,
        sku: "VLN-RC-002",
        short_description: "Sophisticated round frames for the modern gentleman",
        main_image: "https://images.unsplash.com/photo-1591843336300-89d113fcacd8?w=1200&q=85",
        is_limited_edition: false,
    },
    StaticProduct {
        name: "Venetian Square",
        collection: "Contemporary",
        price: 780.0,
        original_price: Some(950.0),
        sku: "VLN-VS-003",
        short_description: "Bold square silhouette with contemporary elegance",
        main_image: "https://images.unsplash.com/photo-1588769168184-657a0d0e3b00?w=1200&q=85",
        is_limited_edition: true,
    },
    StaticProduct {
        name: "Florence Vintage",
        collection: "Heritage",
        price: 1250.0,
        original_price: None,
        sku: "VLN-FV-004",
        short_description: "Vintage-inspired frames with 24k gold details",
        main_image: "https://images.unsplash.com/photo-1648861709330-fe5b3610029c?w=1200&q=85",
        is_limited_edition: false,
    },
];

/// About section copy and the craftsmanship process steps.
pub const ABOUT_LEAD: &str = "Veluna was born in a Florentine atelier, where three generations of frame makers still shape every silhouette by hand. Each pair carries the weight of that heritage and the lightness of modern design.";

pub const CRAFT_STEPS: [(&str, &str, &str); 3] = [
    (
        "01",
        "Design",
        "Every frame begins with a sketch, inspired by Italian artistry and contemporary vision.",
    ),
    (
        "02",
        "Craft",
        "Master artisans hand-shape each frame using traditional techniques passed down through generations.",
    ),
    (
        "03",
        "Perfect",
        "Meticulous quality control ensures every piece meets our exacting standards before reaching you.",
    ),
];

/// Options offered by the product form selects.
pub const FORM_COLLECTIONS: [&str; 5] = [
    "Signature",
    "Heritage",
    "Contemporary",
    "New Arrivals",
    "Limited Edition",
];

pub const FRAME_COLORS: [&str; 8] = [
    "Black",
    "Gold",
    "Silver",
    "Tortoiseshell",
    "Clear",
    "Blue Tortoise",
    "Brown",
    "Grey",
];

pub const LENS_COLORS: [&str; 7] = [
    "Clear",
    "Brown Gradient",
    "Grey Gradient",
    "Blue Tint",
    "Green Tint",
    "Polarized",
    "Photochromic",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_three_fallback_collections() {
        let names: Vec<&str> = FALLBACK_COLLECTIONS.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["New Arrivals", "Sunglasses", "Eyeglasses"]);
    }

    #[test]
    fn test_fallback_slugs_match_derivation() {
        for entry in FALLBACK_COLLECTIONS {
            assert_eq!(crate::models::slugify(entry.name), entry.slug);
        }
    }

    #[test]
    fn test_fallback_featured_sale_item_has_original_price() {
        let on_sale: Vec<&StaticProduct> = FALLBACK_FEATURED
            .iter()
            .filter(|p| p.original_price.is_some())
            .collect();
        assert_eq!(on_sale.len(), 1);
        assert_eq!(on_sale[0].sku, "VLN-VS-003");
    }
}
