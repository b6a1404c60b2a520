//! キー・バリュー永続化
//!
//! ブラウザでは LocalStorage、テストではメモリ上の実装を使う

use crate::error::{js_error_message, AppError};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// window.localStorage
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        window.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = Self::storage()
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(js_error_message(&e)))
    }
}

/// メモリ上のストア（クローンは同じ中身を共有する）
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_shares_entries_between_clones() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));
        assert_eq!(other.get("missing"), None);
    }
}
