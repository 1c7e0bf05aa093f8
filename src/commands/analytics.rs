//! Analytics Commands
//!
//! Fire events into `window.gtag` when the page has it.

use wasm_bindgen::{JsCast, JsValue};

/// Report a CV download. Does nothing without `gtag`.
pub fn track_cv_download(label: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        return;
    };

    let params = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&params, &"event_category".into(), &"Resume".into());
    let _ = js_sys::Reflect::set(&params, &"event_label".into(), &label.into());
    if let Err(e) = gtag.call3(&JsValue::NULL, &"event".into(), &"download".into(), &params) {
        log::debug!("gtag call failed: {:?}", e);
    }
}
