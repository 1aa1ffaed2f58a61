// src/session.rs - Admin session state and persistence

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::StorageArc;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "admin_token";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "admin_user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Editor,
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Editor => write!(f, "editor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub username: String,
    pub role: AdminRole,
    #[serde(default)]
    pub email: Option<String>,
}

/// A live admin session: bearer token plus the user it belongs to.
///
/// Created at login, destroyed at logout or on any 401 from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub user: AdminUser,
}

/// Explicit session context handed to the HTTP client and the admin route
/// guard. Owns the in-memory session and mirrors it into persisted storage,
/// so a reload of the web app (or restart of the desktop app) can restore
/// the login.
pub struct SessionStore {
    storage: StorageArc,
    current: RwLock<Option<AdminSession>>,
}

pub type SessionArc = Arc<SessionStore>;

impl SessionStore {
    pub fn new(storage: StorageArc) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
        }
    }

    /// Loads a previously persisted session into memory.
    ///
    /// Both keys must be present and the user record must parse; anything
    /// else is treated as "not logged in" and the stale keys are ignored.
    pub async fn restore(&self) -> Result<Option<AdminSession>> {
        let token = self.storage.get(TOKEN_KEY).await?;
        let user = self.storage.get(USER_KEY).await?;

        let session = match (token, user) {
            (Some(token), Some(user_json)) => match serde_json::from_str::<AdminUser>(&user_json) {
                Ok(user) => Some(AdminSession { token, user }),
                Err(e) => {
                    tracing::warn!("Discarding unreadable stored session: {}", e);
                    None
                }
            },
            _ => None,
        };

        *self.current.write() = session.clone();
        Ok(session)
    }

    pub fn current(&self) -> Option<AdminSession> {
        self.current.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Stores a freshly authenticated session in memory and on disk.
    pub async fn establish(&self, session: AdminSession) -> Result<()> {
        let user_json = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token).await?;
        self.storage.set(USER_KEY, &user_json).await?;
        *self.current.write() = Some(session);
        Ok(())
    }

    /// Explicit logout.
    pub async fn clear(&self) -> Result<()> {
        self.current.write().take();
        self.storage.remove(TOKEN_KEY).await?;
        self.storage.remove(USER_KEY).await?;
        Ok(())
    }

    /// Invalidation triggered by a 401 response.
    ///
    /// Clears the in-memory session and both persisted keys exactly once:
    /// concurrent 401s observed in the same tick find the session already
    /// gone and return `false` without touching storage again.
    pub async fn invalidate(&self) -> bool {
        let had_session = self.current.write().take().is_some();
        if had_session {
            if let Err(e) = self.storage.remove(TOKEN_KEY).await {
                tracing::warn!("Failed to clear stored token: {}", e);
            }
            if let Err(e) = self.storage.remove(USER_KEY).await {
                tracing::warn!("Failed to clear stored user: {}", e);
            }
            tracing::info!("Admin session invalidated");
        }
        had_session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryStorage, StorageProvider};

    fn sample_session() -> AdminSession {
        AdminSession {
            token: "tok-123".to_string(),
            user: AdminUser {
                username: "giulia".to_string(),
                role: AdminRole::Admin,
                email: Some("giulia@veluna.test".to_string()),
            },
        }
    }

    fn store() -> (SessionStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (SessionStore::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn test_establish_persists_both_keys() {
        let (store, storage) = store();
        store.establish(sample_session()).await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("tok-123".to_string()));
        assert_eq!(
            storage.get(TOKEN_KEY).await.unwrap(),
            Some("tok-123".to_string())
        );
        assert!(storage.get(USER_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_restore_roundtrip() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let store = SessionStore::new(storage.clone());
            store.establish(sample_session()).await.unwrap();
        }

        let store = SessionStore::new(storage);
        let restored = store.restore().await.unwrap();
        assert_eq!(restored, Some(sample_session()));
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_with_corrupt_user_is_none() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok").await.unwrap();
        storage.set(USER_KEY, "{not json").await.unwrap();

        let store = SessionStore::new(storage);
        assert_eq!(store.restore().await.unwrap(), None);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_invalidate_clears_exactly_once() {
        let (store, storage) = store();
        store.establish(sample_session()).await.unwrap();

        assert!(store.invalidate().await);
        assert!(!store.invalidate().await);
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).await.unwrap(), None);
        assert_eq!(storage.get(USER_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_removes_persisted_state() {
        let (store, storage) = store();
        store.establish(sample_session()).await.unwrap();
        store.clear().await.unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).await.unwrap(), None);
    }
}
