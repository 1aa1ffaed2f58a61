// src/ui/router.rs - Route table, storefront pages and the admin auth gate

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    admin::{
        AdminDashboard as AdminDashboardPage, AdminLogin as AdminLoginPage, AdminShell,
        CollectionsManager as CollectionsManagerPage, ProductForm as ProductFormPage,
        ProductsList as ProductsListPage, UploadCenter as UploadCenterPage,
    },
    layout::{Footer, Header},
    state::use_session,
    storefront::{
        AboutSection, CollectionDetailSection, CollectionsSection, FeaturedSection, HeroSection,
    },
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/collections")]
    Collections {},
    #[route("/collections/:slug")]
    CollectionBySlug { slug: String },
    #[route("/about")]
    About {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/products")]
    AdminProducts {},
    #[route("/admin/products/new")]
    AdminProductNew {},
    #[route("/admin/products/:id/edit")]
    AdminProductEdit { id: String },
    #[route("/admin/collections")]
    AdminCollections {},
    #[route("/admin/upload")]
    AdminUpload {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen",
            Header {}
            main {
                HeroSection {}
                CollectionsSection {}
                FeaturedSection {}
                AboutSection {}
            }
            Footer {}
        }
    }
}

#[component]
pub fn Collections() -> Element {
    rsx! {
        div {
            class: "min-h-screen",
            Header {}
            main {
                class: "pt-20",
                div {
                    class: "max-w-7xl mx-auto px-6 lg:px-8 py-24",
                    div {
                        class: "text-center mb-20",
                        h1 {
                            class: "text-5xl lg:text-6xl font-light tracking-wider text-black mb-6",
                            "All Collections"
                        }
                        div {
                            class: "w-24 h-px bg-black mx-auto mb-8"
                        }
                        p {
                            class: "text-lg text-gray-600 font-light max-w-2xl mx-auto leading-relaxed",
                            "Explore our complete range of luxury eyewear collections, from timeless classics to contemporary innovations."
                        }
                    }
                    CollectionsSection {}
                    FeaturedSection {}
                }
            }
            Footer {}
        }
    }
}

#[component]
pub fn CollectionBySlug(slug: String) -> Element {
    rsx! {
        div {
            class: "min-h-screen",
            Header {}
            main {
                class: "pt-20",
                CollectionDetailSection { slug: slug }
            }
            Footer {}
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "min-h-screen",
            Header {}
            main {
                class: "pt-20",
                AboutSection {}
            }
            Footer {}
        }
    }
}

#[component]
pub fn AdminLogin() -> Element {
    rsx! {
        AdminLoginPage {}
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                AdminDashboardPage {}
            }
        }
    }
}

#[component]
pub fn AdminProducts() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                ProductsListPage {}
            }
        }
    }
}

#[component]
pub fn AdminProductNew() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                ProductFormPage {}
            }
        }
    }
}

#[component]
pub fn AdminProductEdit(id: String) -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                ProductFormPage { id: id }
            }
        }
    }
}

#[component]
pub fn AdminCollections() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                CollectionsManagerPage {}
            }
        }
    }
}

#[component]
pub fn AdminUpload() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                UploadCenterPage {}
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50",
            div {
                class: "text-center",
                h1 {
                    class: "text-6xl font-light text-gray-300 mb-4",
                    "404"
                }
                p {
                    class: "text-gray-600 mb-6",
                    "No page at /{path}"
                }
                Link {
                    to: Route::Home {},
                    class: "inline-flex items-center px-4 py-2 bg-black text-white rounded-lg hover:bg-gray-800",
                    "Back to the storefront"
                }
            }
        }
    }
}

/// Wraps admin routes; unauthenticated sessions are redirected to login.
#[component]
pub fn AdminGuard(children: Element) -> Element {
    let session = use_session();
    let navigator = use_navigator();

    if session().is_some() {
        rsx! {
            {children}
        }
    } else {
        navigator.push(Route::AdminLogin {});
        rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-50",
                div {
                    class: "text-center",
                    div {
                        class: "animate-spin rounded-full h-16 w-16 border-b-2 border-black mx-auto"
                    }
                    p {
                        class: "mt-4 text-gray-600",
                        "Redirecting to login..."
                    }
                }
            }
        }
    }
}

pub mod nav {
    use super::*;

    pub fn route_title(route: &Route) -> &'static str {
        match route {
            Route::Home { .. } => "Home",
            Route::Collections { .. } | Route::CollectionBySlug { .. } => "Collections",
            Route::About { .. } => "About",
            Route::AdminLogin { .. } => "Admin Login",
            Route::AdminDashboard { .. } => "Dashboard",
            Route::AdminProducts { .. } => "Products",
            Route::AdminProductNew { .. } => "New Product",
            Route::AdminProductEdit { .. } => "Edit Product",
            Route::AdminCollections { .. } => "Collections Manager",
            Route::AdminUpload { .. } => "Image Upload",
            Route::NotFound { .. } => "Not Found",
        }
    }

    pub fn is_admin_route(route: &Route) -> bool {
        matches!(
            route,
            Route::AdminLogin { .. }
                | Route::AdminDashboard { .. }
                | Route::AdminProducts { .. }
                | Route::AdminProductNew { .. }
                | Route::AdminProductEdit { .. }
                | Route::AdminCollections { .. }
                | Route::AdminUpload { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_titles() {
        assert_eq!(nav::route_title(&Route::Home {}), "Home");
        assert_eq!(nav::route_title(&Route::AdminDashboard {}), "Dashboard");
        assert_eq!(
            nav::route_title(&Route::AdminProductEdit {
                id: "p-1".to_string()
            }),
            "Edit Product"
        );
    }

    #[test]
    fn test_admin_route_detection() {
        assert!(nav::is_admin_route(&Route::AdminProducts {}));
        assert!(!nav::is_admin_route(&Route::Home {}));
        assert!(!nav::is_admin_route(&Route::Collections {}));
    }

    #[test]
    fn test_route_equality() {
        assert_eq!(Route::AdminDashboard {}, Route::AdminDashboard {});
        assert_ne!(
            Route::AdminProductEdit {
                id: "a".to_string()
            },
            Route::AdminProductEdit {
                id: "b".to_string()
            }
        );
    }
}
