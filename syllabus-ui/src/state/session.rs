//! localStorage session store
//!
//! Browser counterpart of the file store: the record lives under a single
//! localStorage key.

use syllabus_sync::session::{SessionError, SessionResult, SessionStore};
use wasm_bindgen::JsValue;

/// Session record kept in `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> SessionResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> SessionError {
    SessionError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> SessionResult<Option<String>> {
        self.storage()?.get_item(&self.key).map_err(js_error)
    }

    fn save(&self, raw: &str) -> SessionResult<()> {
        self.storage()?.set_item(&self.key, raw).map_err(js_error)
    }

    fn clear(&self) -> SessionResult<()> {
        self.storage()?.remove_item(&self.key).map_err(js_error)
    }
}
