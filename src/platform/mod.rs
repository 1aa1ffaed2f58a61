// src/platform/mod.rs - Platform abstraction layer

pub mod network;
pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use network::{
    DynNetwork, FilePart, HttpBody, HttpRequest, HttpResponse, NetworkArc, NetworkProvider,
};
pub use storage::{DynStorage, MemoryStorage, StorageArc, StorageProvider};

use crate::error::Result;

/// The platform services the rest of the application runs on.
pub struct PlatformProviders {
    pub network: NetworkArc,
    pub storage: StorageArc,
}

/// Creates the providers for the current compilation target.
pub fn create_providers() -> Result<PlatformProviders> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        native::create_providers()
    }
    #[cfg(target_arch = "wasm32")]
    {
        web::create_providers()
    }
}
