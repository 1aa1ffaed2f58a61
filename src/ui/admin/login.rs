// src/ui/admin/login.rs - Admin authentication page

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::models::LoginRequest;
use crate::session::AdminSession;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_session};

/// Admin login page.
#[component]
pub fn AdminLogin() -> Element {
    let api = use_api();
    let mut session = use_session();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut login_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already authenticated sessions skip straight to the dashboard.
    use_effect(move || {
        if session().is_some() {
            navigator.push(Route::AdminDashboard {});
        }
    });

    let handle_submit = move |_| {
        login_error.set(None);

        if username().trim().is_empty() {
            login_error.set(Some("Username is required".to_string()));
            return;
        }
        if password().trim().is_empty() {
            login_error.set(Some("Password is required".to_string()));
            return;
        }

        let api = api.clone();
        let request = LoginRequest {
            username: username().trim().to_string(),
            password: password(),
        };

        submitting.set(true);
        spawn(async move {
            match api.admin().login(&request).await {
                Ok(token) => {
                    let established = AdminSession {
                        token: token.access_token,
                        user: token.user_info,
                    };
                    if let Err(e) = api.session().establish(established.clone()).await {
                        tracing::warn!("Failed to persist session: {}", e);
                    }
                    session.set(Some(established));
                    navigator.push(Route::AdminDashboard {});
                }
                Err(e) => {
                    login_error.set(Some(e.user_message().to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8",
            div {
                class: "max-w-md w-full space-y-8",

                div {
                    class: "text-center",
                    h1 {
                        class: "text-3xl font-light tracking-[0.3em] text-gray-900",
                        "VELUNA"
                    }
                    p {
                        class: "mt-2 text-sm text-gray-600",
                        "Sign in to the admin console."
                    }
                }

                form {
                    class: "mt-8 space-y-6",
                    onsubmit: handle_submit,

                    if let Some(error) = login_error() {
                        div {
                            class: "rounded-md bg-red-50 p-4",
                            h3 {
                                class: "text-sm font-medium text-red-800",
                                "Authentication Error"
                            }
                            p {
                                class: "mt-2 text-sm text-red-700",
                                "{error}"
                            }
                        }
                    }

                    div {
                        class: "space-y-4",
                        div {
                            label {
                                r#for: "username",
                                class: "block text-sm font-medium text-gray-700",
                                "Username"
                            }
                            input {
                                id: "username",
                                name: "username",
                                r#type: "text",
                                autocomplete: "username",
                                class: "mt-1 appearance-none rounded-md block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-black focus:border-black sm:text-sm",
                                placeholder: "Enter your username",
                                value: "{username}",
                                oninput: move |e| username.set(e.value())
                            }
                        }

                        div {
                            label {
                                r#for: "password",
                                class: "block text-sm font-medium text-gray-700",
                                "Password"
                            }
                            input {
                                id: "password",
                                name: "password",
                                r#type: "password",
                                autocomplete: "current-password",
                                class: "mt-1 appearance-none rounded-md block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-black focus:border-black sm:text-sm",
                                placeholder: "Enter your password",
                                value: "{password}",
                                oninput: move |e| password.set(e.value())
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-black hover:bg-gray-800 focus:outline-none disabled:opacity-50",
                        disabled: submitting(),
                        if submitting() {
                            "Signing in..."
                        } else {
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_component_creation() {
        let _login = rsx! { AdminLogin {} };
    }
}
