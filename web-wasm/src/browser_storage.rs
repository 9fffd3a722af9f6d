//! localStorage バックエンド
//!
//! `web_sys::Storage` はスレッド間で共有できないため保持せず、
//! 呼び出しのたびに `window.localStorage` を取得する。

use microspotter_common::{Error, KeyValueStore, Result};
use web_sys::Storage;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage> {
        let window = web_sys::window()
            .ok_or_else(|| Error::Storage("No window object available".to_string()))?;

        window
            .local_storage()
            .map_err(|e| Error::Storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage not available".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("Failed to read from localStorage: {:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("Failed to save to localStorage: {:?}", e)))
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use microspotter_common::{ImageStore, STORAGE_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reset() {
        if let Ok(storage) = BrowserStorage::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn wasm_image_store_survives_reload() {
        reset();
        let mut store = ImageStore::load(BrowserStorage).expect("load failed");
        store
            .set_image("Hydra", "data:image/png;base64,AAAA".to_string())
            .expect("persist failed");

        let reloaded = ImageStore::load(BrowserStorage).expect("reload failed");
        assert_eq!(reloaded.images(), store.images());
        reset();
    }

    #[wasm_bindgen_test]
    fn wasm_corrupt_entry_falls_back_to_empty() {
        reset();
        let mut backend = BrowserStorage;
        backend.set_item(STORAGE_KEY, "{oops").expect("write failed");

        let store = ImageStore::load_or_empty(BrowserStorage);
        assert_eq!(store.spotted_count(), 0);
        reset();
    }
}
