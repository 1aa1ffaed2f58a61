// src/ui/app.rs - Application root: global providers plus the router

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;
use crate::ui::state::AppStateProvider;

/// Main application component.
#[component]
pub fn App() -> Element {
    rsx! {
        AppStateProvider {
            Router::<Route> {}
        }
    }
}
