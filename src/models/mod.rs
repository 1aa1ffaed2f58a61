// src/models/mod.rs - Backend-owned entities as the client sees them

pub mod admin;
pub mod collection;
pub mod product;

pub use admin::{
    BulkStatusRequest, DashboardStats, LoginRequest, MultiUploadResponse, RegisterRequest,
    TokenResponse, UploadResponse,
};
pub use collection::{slugify, Collection, CollectionPayload};
pub use product::{
    format_schedule_input, parse_schedule_input, Gender, ImageSet, Product, ProductPayload,
    ProductQuery, ProductStatus, ProductType,
};
