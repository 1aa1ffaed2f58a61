// src/lib.rs

//! Veluna Eyewear - luxury eyewear storefront and admin console.

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]
#![allow(clippy::large_enum_variant)]

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::error_1(&format!("Failed to set up tracing: {:?}", e).into());
    }

    dioxus::launch(ui::App);
}

// Core modules (always available)
pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod models;
pub mod platform;
pub mod session;
pub mod ui;
pub mod uploads;

// Native-only modules
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
