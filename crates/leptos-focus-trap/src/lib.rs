//! Leptos Focus Trap Utilities
//!
//! Keeps keyboard focus inside a dialog while it is open.
//! The key decision is a pure function; the DOM side is a scoped
//! `TrapSession` that owns its keydown listener.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

/// Elements that can take keyboard focus inside a trap
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button, textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";

/// What the trap wants done with a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrapAction {
    /// Escape pressed - the owner should close
    Escape,
    /// Cancel the default and focus the focusable at this index
    FocusIndex(usize),
    /// Let the browser handle it
    PassThrough,
}

/// Decide what a key press means inside the trap.
///
/// `active` is the index of the focused element among the `count`
/// focusables, if focus is on one of them.
pub fn trap_key(key: &str, shift: bool, active: Option<usize>, count: usize) -> TrapAction {
    match key {
        "Escape" => TrapAction::Escape,
        "Tab" if count > 0 => {
            let first = 0;
            let last = count - 1;
            match active {
                Some(i) if shift && i == first => TrapAction::FocusIndex(last),
                Some(i) if !shift && i == last => TrapAction::FocusIndex(first),
                _ => TrapAction::PassThrough,
            }
        }
        _ => TrapAction::PassThrough,
    }
}

/// Collect focusable descendants of `root` in document order
pub fn focusable_within(root: &Element) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Index of the currently focused element among `focusables`
pub fn active_index(focusables: &[HtmlElement]) -> Option<usize> {
    let active = web_sys::window()?.document()?.active_element()?;
    focusables
        .iter()
        .position(|el| el.unchecked_ref::<Element>() == &active)
}

/// Element currently holding focus, if it is an `HtmlElement`
pub fn focused_element() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Move focus to the first focusable in `root`, else `fallback`, else `root`.
pub fn focus_initial(root: &HtmlElement, fallback: Option<&HtmlElement>) {
    let focusables = focusable_within(root);
    let target = focusables.first().or(fallback).unwrap_or(root);
    let _ = target.focus();
}

/// Whether focus can still be returned to `el`
pub fn can_receive_focus(el: &HtmlElement) -> bool {
    el.is_connected()
}

/// Active keyboard interceptor on a dialog root.
///
/// Created when the dialog opens, dropped when it closes. Dropping
/// removes the listener.
pub struct TrapSession {
    root: HtmlElement,
    callback: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl TrapSession {
    /// Attach `on_key` as the keydown listener on `root`
    pub fn start<F>(root: HtmlElement, on_key: F) -> Self
    where
        F: FnMut(KeyboardEvent) + 'static,
    {
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(on_key);
        let _ = root.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
        Self {
            root,
            callback: Some(callback),
        }
    }
}

impl Drop for TrapSession {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            let _ = self
                .root
                .remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
            // The session is usually dropped from inside its own listener
            // (Escape), so free the closure after the current event.
            gloo_timers::callback::Timeout::new(0, move || drop(callback)).forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_always_closes() {
        assert_eq!(trap_key("Escape", false, None, 0), TrapAction::Escape);
        assert_eq!(trap_key("Escape", true, Some(2), 3), TrapAction::Escape);
    }

    #[test]
    fn test_tab_wraps_from_last_to_first() {
        assert_eq!(trap_key("Tab", false, Some(2), 3), TrapAction::FocusIndex(0));
        assert_eq!(trap_key("Tab", false, Some(0), 3), TrapAction::PassThrough);
        assert_eq!(trap_key("Tab", false, Some(1), 3), TrapAction::PassThrough);
    }

    #[test]
    fn test_shift_tab_wraps_from_first_to_last() {
        assert_eq!(trap_key("Tab", true, Some(0), 3), TrapAction::FocusIndex(2));
        assert_eq!(trap_key("Tab", true, Some(2), 3), TrapAction::PassThrough);
    }

    #[test]
    fn test_single_focusable_stays_put() {
        assert_eq!(trap_key("Tab", false, Some(0), 1), TrapAction::FocusIndex(0));
        assert_eq!(trap_key("Tab", true, Some(0), 1), TrapAction::FocusIndex(0));
    }

    #[test]
    fn test_tab_with_no_focusables_passes_through() {
        assert_eq!(trap_key("Tab", false, None, 0), TrapAction::PassThrough);
    }

    #[test]
    fn test_other_keys_pass_through() {
        assert_eq!(trap_key("Enter", false, Some(0), 3), TrapAction::PassThrough);
        assert_eq!(trap_key("a", true, Some(2), 3), TrapAction::PassThrough);
    }

    #[test]
    fn test_repeated_tab_cycles_through_all() {
        // Simulate the browser moving focus forward unless the trap intervenes
        let count = 4;
        let mut active = 0;
        let mut visited = vec![active];
        for _ in 0..8 {
            active = match trap_key("Tab", false, Some(active), count) {
                TrapAction::FocusIndex(i) => i,
                TrapAction::PassThrough => active + 1,
                TrapAction::Escape => unreachable!(),
            };
            assert!(active < count);
            visited.push(active);
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    }
}
