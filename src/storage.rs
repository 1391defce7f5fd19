//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`. The storage handle is
//! looked up on every call so the adapter itself stays `Send + Sync`.

use notes_core::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> StoreResult<web_sys::Storage> {
    web_sys::window()
        .ok_or(StoreError::Unavailable)?
        .local_storage()
        .map_err(js_error)?
        .ok_or(StoreError::Unavailable)
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Backend(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}
