// src/ui/layout/header.rs - Storefront header with mobile menu toggle

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;

/// Fixed storefront header. The only state is the mobile menu toggle.
#[component]
pub fn Header() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "fixed top-0 left-0 right-0 z-40 bg-white/95 backdrop-blur border-b border-gray-100",
            div {
                class: "max-w-7xl mx-auto px-6 lg:px-8",
                div {
                    class: "flex items-center justify-between h-20",

                    Link {
                        to: Route::Home {},
                        class: "text-2xl font-light tracking-[0.3em] text-black",
                        "VELUNA"
                    }

                    // Desktop navigation
                    nav {
                        class: "hidden md:flex items-center space-x-10",
                        NavLinks {}
                    }

                    // Mobile menu button
                    button {
                        r#type: "button",
                        class: "md:hidden p-2 text-gray-700 hover:text-black",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() {
                            span { class: "text-xl", "✕" }
                        } else {
                            span { class: "text-xl", "☰" }
                        }
                    }
                }
            }

            // Mobile navigation
            if menu_open() {
                nav {
                    class: "md:hidden bg-white border-t border-gray-100 px-6 py-6 space-y-4 flex flex-col",
                    NavLinks {}
                }
            }
        }
    }
}

#[component]
fn NavLinks() -> Element {
    rsx! {
        Link {
            to: Route::Home {},
            class: "text-sm tracking-wider text-gray-700 hover:text-black uppercase",
            "Home"
        }
        Link {
            to: Route::Collections {},
            class: "text-sm tracking-wider text-gray-700 hover:text-black uppercase",
            "Collections"
        }
        Link {
            to: Route::About {},
            class: "text-sm tracking-wider text-gray-700 hover:text-black uppercase",
            "About"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_creation() {
        let _header = rsx! { Header {} };
    }
}
