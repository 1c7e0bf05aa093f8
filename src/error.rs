//! Error Types
//!
//! Failures of the two network paths: collection loads and the contact form.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("unreadable body: {0}")]
    Body(String),
    #[error("malformed collection: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("form endpoint is still the placeholder")]
    NotConfigured,
    #[error("rejected: {}", .0.join(" "))]
    Rejected(Vec<String>),
    #[error("server returned status {0}")]
    Server(u16),
    #[error("network error: {0}")]
    Network(String),
}

/// Readable text for a JS exception or rejection value
pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
