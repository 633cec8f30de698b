//! Key-value persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client reads the token from here on every request and the session
//! writes it on login/logout. Browser builds use `localStorage`; tests and
//! non-browser builds use the in-memory store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string key-value store. Writes are last-write-wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`. Storage failures (quota, privacy mode) are
/// logged and otherwise ignored.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable, {key} not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected write for {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
