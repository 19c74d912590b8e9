use shared::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

/// `window.localStorage` as a [`KeyValueStore`].
///
/// The storage handle is looked up on every call so a page that disables
/// storage later on degrades instead of holding a stale handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage is disabled".to_string())),
            Err(e) => Err(StorageError::Unavailable(describe(&e))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Operation(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Operation(describe(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Operation(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_storage_round_trip() {
        let storage = BrowserStorage;
        let key = "loanSimulatorStorageTest";

        storage.set(key, "value").unwrap();
        assert_eq!(storage.get(key).unwrap(), Some("value".to_string()));

        storage.remove(key).unwrap();
        assert_eq!(storage.get(key).unwrap(), None);
    }
}
