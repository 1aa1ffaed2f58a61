// src/ui/admin/mod.rs - Shared admin widgets and helpers

use dioxus::prelude::*;

use crate::error::Error;
use crate::models::ProductStatus;
use crate::session::AdminSession;
use crate::ui::state::{use_notifications, Notifier};

mod collections_manager;
mod dashboard;
mod layout;
mod login;
mod product_form;
mod products_list;
mod upload_center;

pub use collections_manager::CollectionsManager;
pub use dashboard::AdminDashboard;
pub use layout::AdminShell;
pub use login::AdminLogin;
pub use product_form::ProductForm;
pub use products_list::ProductsList;
pub use upload_center::UploadCenter;

/// EUR price formatting used across the admin tables and the storefront.
pub fn format_price(value: f64) -> String {
    format!("€{:.2}", value)
}

/// Routes a failed admin mutation: an expired session empties the session
/// signal (the guard then redirects to login), anything else becomes a
/// toast.
pub fn report_failure(
    mut session: Signal<Option<AdminSession>>,
    notifier: Notifier,
    context: &str,
    err: &Error,
) {
    if err.is_session_expired() {
        session.set(None);
    } else {
        notifier.error(context.to_string(), err.user_message().to_string());
    }
}

/// Colored pill for a product lifecycle status.
#[component]
pub fn StatusBadge(status: ProductStatus) -> Element {
    let (classes, icon) = match status {
        ProductStatus::Active => ("bg-green-100 text-green-800", "✓"),
        ProductStatus::Scheduled => ("bg-yellow-100 text-yellow-800", "🕑"),
        ProductStatus::Inactive => ("bg-red-100 text-red-800", "✕"),
        ProductStatus::Draft => ("bg-gray-100 text-gray-800", "✎"),
    };

    rsx! {
        span {
            class: "inline-flex items-center px-2 py-1 text-xs font-medium rounded-full {classes}",
            span { class: "mr-1", "{icon}" }
            "{status}"
        }
    }
}

/// Modal confirmation step required before destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            div {
                class: "bg-white rounded-lg p-6 w-full max-w-md mx-4",
                h2 {
                    class: "text-lg font-bold text-gray-900 mb-2",
                    "{title}"
                }
                p {
                    class: "text-gray-600 mb-6",
                    "{message}"
                }
                div {
                    class: "flex items-center justify-end space-x-4",
                    button {
                        r#type: "button",
                        class: "px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

/// Stack of transient toasts, rendered once in the admin shell.
#[component]
pub fn ToastStack() -> Element {
    let notifications = use_notifications();

    rsx! {
        div {
            class: "fixed bottom-6 right-6 z-50 space-y-3 w-80",
            for toast in notifications() {
                ToastItem { key: "{toast.id}", toast: toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: crate::ui::Notification) -> Element {
    let accent = toast.kind.classes();

    rsx! {
        div {
            class: "border rounded-lg shadow-lg p-4 {accent}",
            p {
                class: "text-sm font-medium",
                "{toast.title}"
            }
            p {
                class: "text-sm mt-1",
                "{toast.message}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(850.0), "€850.00");
        assert_eq!(format_price(1250.5), "€1250.50");
    }

    #[test]
    fn test_status_badge_creation() {
        let _badge = rsx! { StatusBadge { status: ProductStatus::Scheduled } };
    }
}
