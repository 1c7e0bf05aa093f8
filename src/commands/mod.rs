//! Browser Command Wrappers
//!
//! Frontend bindings to network and browser APIs, organized by domain.

mod content;
mod contact;
mod clipboard;
mod analytics;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

use crate::error::js_message;

// Re-export all public items
pub use content::*;
pub use contact::*;
pub use clipboard::*;
pub use analytics::*;

/// Send `request` and wait for the response head
async fn fetch(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| js_message(&e))?;
    value.dyn_into::<Response>().map_err(|e| js_message(&e))
}

/// Read the whole response body as text
async fn response_text(response: &Response) -> Result<String, String> {
    let promise = response.text().map_err(|e| js_message(&e))?;
    let value = JsFuture::from(promise).await.map_err(|e| js_message(&e))?;
    value.as_string().ok_or_else(|| "body is not text".to_string())
}
