//! # Credential persistence
//!
//! The bearer token is the only durable client-side artifact. It lives under
//! a single fixed key from successful login until explicit logout or a 401
//! from any call.
//!
//! [`CredentialStore`] is the seam between the HTTP adapter and the storage
//! backend: [`BrowserCredentials`] persists into browser local storage on
//! the web build, while [`MemoryCredentials`] backs native builds and tests.

use std::sync::Arc;

/// Fixed local-storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

pub type SharedCredentials = Arc<dyn CredentialStore>;

/// In-memory store for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    token: Arc<std::sync::Mutex<Option<String>>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentials {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// Local-storage store for the web build.
///
/// Zero-size: the storage handle is reacquired on every operation, so the
/// struct stays `Send + Sync` and clone-friendly. A browser profile with
/// storage disabled degrades to "no credential" rather than failing.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct BrowserCredentials;

#[cfg(target_arch = "wasm32")]
impl BrowserCredentials {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserCredentials {
    fn get(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Platform-default store: local storage in the browser, memory elsewhere.
pub fn default_store() -> SharedCredentials {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserCredentials::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryCredentials::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryCredentials::new();
        assert!(store.get().is_none());

        store.set("abc123");
        assert_eq!(store.get().as_deref(), Some("abc123"));

        store.clear();
        assert!(store.get().is_none());

        // Clearing an empty store is a no-op.
        store.clear();
        assert!(store.get().is_none());
    }
}
