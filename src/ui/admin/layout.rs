// src/ui/admin/layout.rs - Admin shell: sidebar, user block, session revalidation

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::admin::ToastStack;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_session};

/// Sidebar shell around every admin page. The route guard has already
/// ensured a session exists; on mount the shell revalidates it against
/// `GET /admin/me`, so a stale restored token is discovered (and the 401
/// handler clears it) before the admin starts editing.
#[component]
pub fn AdminShell(children: Element) -> Element {
    let api = use_api();
    let mut session = use_session();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let mut revalidated = use_signal(|| false);
    if !revalidated() {
        revalidated.set(true);
        let api = api.clone();
        spawn(async move {
            if let Err(e) = api.admin().me().await {
                if e.is_session_expired() {
                    session.set(None);
                } else {
                    tracing::warn!("Admin revalidation failed: {}", e);
                }
            }
        });
    }

    let user = session().map(|s| s.user);

    let handle_logout = move |_| {
        let api = api.clone();
        spawn(async move {
            if let Err(e) = api.session().clear().await {
                tracing::warn!("Logout cleanup failed: {}", e);
            }
            session.set(None);
            navigator.push(Route::AdminLogin {});
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex",

            // Sidebar
            div {
                class: "w-64 bg-white shadow-lg flex flex-col",
                div {
                    class: "p-6 border-b border-gray-200",
                    div {
                        class: "text-2xl font-bold text-gray-900",
                        "Veluna Admin"
                    }
                }

                nav {
                    class: "flex-1 px-4 py-6 space-y-2",
                    SidebarLink { to: Route::AdminDashboard {}, icon: "🏠", label: "Dashboard", active: matches!(&route, Route::AdminDashboard {}) }
                    SidebarLink {
                        to: Route::AdminProducts {},
                        icon: "🕶",
                        label: "Products",
                        active: matches!(&route, Route::AdminProducts {} | Route::AdminProductNew {} | Route::AdminProductEdit { .. })
                    }
                    SidebarLink { to: Route::AdminCollections {}, icon: "🗂", label: "Collections", active: matches!(&route, Route::AdminCollections {}) }
                    SidebarLink { to: Route::AdminUpload {}, icon: "🖼", label: "Upload", active: matches!(&route, Route::AdminUpload {}) }
                }

                div {
                    class: "p-4 border-t border-gray-200",
                    if let Some(user) = user {
                        div {
                            class: "flex items-center mb-4",
                            div {
                                class: "w-8 h-8 bg-gray-300 rounded-full flex items-center justify-center",
                                "👤"
                            }
                            div {
                                class: "ml-3",
                                div {
                                    class: "text-sm font-medium text-gray-900",
                                    "{user.username}"
                                }
                                div {
                                    class: "text-xs text-gray-500 capitalize",
                                    "{user.role}"
                                }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "flex items-center w-full px-4 py-2 text-sm font-medium text-gray-600 hover:text-red-600 hover:bg-red-50 rounded-lg transition-colors duration-200",
                        onclick: handle_logout,
                        span { class: "mr-3", "↩" }
                        "Logout"
                    }
                }
            }

            // Main content
            div {
                class: "flex-1 p-8 overflow-y-auto",
                {children}
            }

            ToastStack {}
        }
    }
}

#[component]
fn SidebarLink(to: Route, icon: &'static str, label: &'static str, active: bool) -> Element {
    let classes = if active {
        "bg-gray-900 text-white"
    } else {
        "text-gray-600 hover:text-gray-900 hover:bg-gray-100"
    };

    rsx! {
        Link {
            to: to,
            class: "flex items-center px-4 py-3 text-sm font-medium rounded-lg transition-colors duration-200 {classes}",
            span { class: "mr-3", "{icon}" }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_link_creation() {
        let _link = rsx! {
            SidebarLink {
                to: Route::AdminDashboard {},
                icon: "🏠",
                label: "Dashboard",
                active: true
            }
        };
    }
}
