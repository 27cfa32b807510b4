// ============================================================================
// STORAGE - Key/value persistence (localStorage in the browser)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::errors::SessionError;

/// Synchronous string store. Values are stored raw; callers serialize.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn raw() -> Result<web_sys::Storage, SessionError> {
        // gloo's raw() panics without a window; check first
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(SessionError::StorageUnavailable)?;
        Ok(<gloo_storage::LocalStorage as gloo_storage::Storage>::raw())
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Self::raw()?
            .get_item(key)
            .map_err(|_| SessionError::StorageUnavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        Self::raw()?
            .set_item(key, value)
            .map_err(|e| SessionError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        Self::raw()?
            .remove_item(key)
            .map_err(|e| SessionError::Write(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, SessionError> {
        Err(SessionError::StorageUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Err(SessionError::StorageUnavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), SessionError> {
        Err(SessionError::StorageUnavailable)
    }
}

/// In-memory store, shared between clones
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
