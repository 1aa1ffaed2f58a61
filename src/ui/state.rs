// src/ui/state.rs - Global providers: API client, session signal, notifications

use std::sync::Arc;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::platform;
use crate::session::{AdminSession, SessionStore};
use crate::ui::Notification;

/// Builds the platform providers, session store and API client once and
/// exposes them (plus the reactive session and notification state) to the
/// whole component tree.
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let api = use_hook(|| {
        let providers = platform::create_providers().expect("platform providers unavailable");
        let session = Arc::new(SessionStore::new(providers.storage.clone()));
        ApiClient::new(&AppConfig::from_env(), providers.network, session)
    });

    let mut session_signal = use_signal(|| None::<AdminSession>);
    let notifications = use_signal(Vec::<Notification>::new);

    use_context_provider(|| api.clone());
    use_context_provider(|| session_signal);
    use_context_provider(|| notifications);

    // Restore a persisted session once, before any admin route renders.
    let mut restored = use_signal(|| false);
    if !restored() {
        restored.set(true);
        let api = api.clone();
        spawn(async move {
            match api.session().restore().await {
                Ok(session) => session_signal.set(session),
                Err(e) => tracing::warn!("Session restore failed: {}", e),
            }
        });
    }

    rsx! {
        {children}
    }
}

/// Hook returning the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Hook returning the reactive admin session.
///
/// Setting it to `None` is how any component reports an expired session;
/// the admin guard observes the change and redirects to login.
pub fn use_session() -> Signal<Option<AdminSession>> {
    use_context::<Signal<Option<AdminSession>>>()
}

pub fn use_notifications() -> Signal<Vec<Notification>> {
    use_context::<Signal<Vec<Notification>>>()
}

/// Pushes toasts and removes each one again after a fixed display delay.
#[derive(Clone, Copy)]
pub struct Notifier {
    notifications: Signal<Vec<Notification>>,
}

impl Notifier {
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notification::success(title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notification::error(title, message));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notification::info(title, message));
    }

    fn push(&self, notification: Notification) {
        let id = notification.id;
        let mut notifications = self.notifications;
        notifications.with_mut(|list| list.push(notification));

        spawn(async move {
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(4000)).await;
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(4000).await;
            notifications.with_mut(|list| list.retain(|n| n.id != id));
        });
    }
}

pub fn use_notifier() -> Notifier {
    Notifier {
        notifications: use_notifications(),
    }
}
