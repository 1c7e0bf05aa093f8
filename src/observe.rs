//! Visibility Observers
//!
//! Thin wrappers around `IntersectionObserver`. Observers live for the
//! page lifetime, so their callbacks are leaked.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One visibility change
#[derive(Debug, Clone)]
pub struct Visibility {
    pub target: Element,
    pub intersecting: bool,
    pub ratio: f64,
}

fn build_observer<F>(root_margin: &str, threshold: f64, mut on_change: F) -> Option<IntersectionObserver>
where
    F: FnMut(Visibility, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                on_change(
                    Visibility {
                        target: entry.target(),
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    },
                    &observer,
                );
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            callback.forget();
            Some(observer)
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Report every visibility change of `targets`
pub fn watch_visibility<F>(targets: &[Element], root_margin: &str, threshold: f64, mut on_change: F)
where
    F: FnMut(Visibility) + 'static,
{
    let Some(observer) = build_observer(root_margin, threshold, move |v, _| on_change(v)) else {
        return;
    };
    for target in targets {
        observer.observe(target);
    }
}

/// Call `on_visible` once per target, the first time it intersects
pub fn reveal_each<F>(targets: &[Element], threshold: f64, mut on_visible: F)
where
    F: FnMut(&Element) + 'static,
{
    let Some(observer) = build_observer("0px", threshold, move |v, obs| {
        if v.intersecting {
            on_visible(&v.target);
            obs.unobserve(&v.target);
        }
    }) else {
        return;
    };
    for target in targets {
        observer.observe(target);
    }
}

/// Call `on_visible` once, the first time `target` intersects, then
/// disconnect.
pub fn observe_once<F>(target: &Element, root_margin: &str, threshold: f64, on_visible: F)
where
    F: FnOnce() + 'static,
{
    let mut on_visible = Some(on_visible);
    let Some(observer) = build_observer(root_margin, threshold, move |v, obs| {
        if v.intersecting {
            if let Some(f) = on_visible.take() {
                f();
            }
            obs.disconnect();
        }
    }) else {
        return;
    };
    observer.observe(target);
}
