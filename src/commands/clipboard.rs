//! Clipboard Commands
//!
//! Frontend wrappers for clipboard operations.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::error::js_message;

/// Whether `navigator.clipboard` exists in this context
pub fn clipboard_available() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("clipboard")).unwrap_or(false))
        .unwrap_or(false)
}

/// Write `text` to the clipboard
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ()).map_err(|e| js_message(&e))
}
