use std::sync::{Arc, Mutex};

use crate::session::AuthSession;

/// Slot name for the persisted session snapshot.
pub const SESSION_STORAGE_KEY: &str = "hirelink.session";

/// One string slot of persistent storage. Implementations must not fail
/// loudly: a read that cannot be served is `None`, a write that cannot be
/// served is logged and dropped. The session layer treats storage as a
/// cache of the snapshot, never as an authority.
pub trait StorageBackend: Send + Sync {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn remove(&self);
}

/// The explicit serialize/deserialize boundary for the auth snapshot.
///
/// Loading tolerates anything: a missing record, unreadable storage, bad
/// JSON, or an unknown role all come back as `None` (Anonymous), and a bad
/// record is removed so it cannot keep tripping future loads. This is the
/// "corrupted storage falls back to Anonymous" branch, and it is the only
/// place that branch lives.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store that persists nothing beyond the process. Used in tests and as
    /// the fallback when no platform storage is available.
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// Pick the storage backend for the running platform: browser
    /// localStorage on wasm, a JSON file in the user config dir elsewhere.
    pub fn from_platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(Arc::new(LocalStorageBackend))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            match FileBackend::in_config_dir() {
                Some(backend) => Self::new(Arc::new(backend)),
                None => {
                    tracing::warn!("no config directory available, session will not persist");
                    Self::memory()
                }
            }
        }
    }

    /// Load the persisted snapshot, normalizing every failure to Anonymous.
    pub fn load(&self) -> Option<AuthSession> {
        let raw = self.backend.read()?;
        match serde_json::from_str::<AuthSession>(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(%err, "discarding corrupt session snapshot");
                self.backend.remove();
                None
            }
        }
    }

    /// Persist the whole snapshot. Called only from `set_auth`.
    pub fn save(&self, session: &AuthSession) {
        match serde_json::to_string(session) {
            Ok(raw) => self.backend.write(&raw),
            Err(err) => tracing::warn!(%err, "failed to serialize session snapshot"),
        }
    }

    /// Drop the persisted snapshot. Called only from `clear_auth`.
    pub fn clear(&self) {
        self.backend.remove();
    }
}

/// In-process backend.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn write(&self, value: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(value.to_string());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// JSON file in the platform config dir. Desktop builds survive restarts
/// with the same semantics the browser gets from localStorage.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileBackend {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileBackend {
    pub fn in_config_dir() -> Option<Self> {
        dirs::config_dir().map(|dir| Self {
            path: dir.join("hirelink").join("session.json"),
        })
    }

    pub fn at(path: std::path::PathBuf) -> Self {
        Self { path }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileBackend {
    fn read(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn write(&self, value: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = std::fs::write(&self.path, value) {
            tracing::warn!(%err, "failed to persist session snapshot");
        }
    }

    fn remove(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Browser localStorage.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn read(&self) -> Option<String> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::get::<String>(SESSION_STORAGE_KEY).ok()
    }

    fn write(&self, value: &str) {
        use gloo_storage::Storage;
        if let Err(err) = gloo_storage::LocalStorage::set(SESSION_STORAGE_KEY, value) {
            tracing::warn!(%err, "failed to persist session snapshot");
        }
    }

    fn remove(&self) {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::delete(SESSION_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_returns_none_when_empty() {
        let store = SessionStore::memory();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = SessionStore::memory();
        let session = AuthSession::new("a@x.com", Role::Admin, "tok");
        store.save(&session);
        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn clear_removes_the_snapshot() {
        let store = SessionStore::memory();
        store.save(&AuthSession::new("a@x.com", Role::Client, "tok"));
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_anonymous_and_is_removed() {
        let backend = MemoryBackend::default();
        backend.write("{not json");
        let store = SessionStore::new(Arc::new(backend.clone()));
        assert_eq!(store.load(), None);
        // The bad record is gone, not just skipped.
        assert_eq!(backend.read(), None);
    }

    #[test]
    fn snapshot_with_unknown_role_falls_back_to_anonymous() {
        let backend = MemoryBackend::default();
        backend.write(r#"{"email":"a@x.com","role":"owner","token":"t"}"#);
        let store = SessionStore::new(Arc::new(backend));
        assert_eq!(store.load(), None);
    }
}
