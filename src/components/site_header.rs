//! Site Header Component
//!
//! Sticky header with section navigation, current-section highlighting
//! and the mobile menu toggle. Also the back-to-top button.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::context::use_app_context;
use crate::nav::{HeaderState, NavTracker, SectionId};
use crate::observe::watch_visibility;

/// Scroll-derived header flags, updated on every scroll event
fn use_header_state() -> ReadSignal<HeaderState> {
    let motion = use_app_context().motion();
    let compute = move || {
        let y = window().scroll_y().unwrap_or(0.0);
        HeaderState::from_scroll(y, motion.sticky_offset, motion.back_to_top_offset)
    };
    let (state, set_state) = signal(compute());
    let handle = window_event_listener(ev::scroll, move |_| set_state.set(compute()));
    on_cleanup(move || handle.remove());
    state
}

/// Current section, derived from which observed section is most visible
fn use_current_section() -> ReadSignal<Option<SectionId>> {
    let motion = use_app_context().motion();
    let (current, set_current) = signal(None::<SectionId>);
    let tracker = StoredValue::new(NavTracker::new());

    // Sections are siblings of the header, so wait for the first frame
    request_animation_frame(move || {
        let doc = document();
        let targets: Vec<Element> = SectionId::ALL
            .iter()
            .filter_map(|s| doc.get_element_by_id(s.id()))
            .collect();
        watch_visibility(&targets, &motion.nav_root_margin, motion.nav_threshold, move |v| {
            let Some(section) = SectionId::from_id(&v.target.id()) else {
                return;
            };
            tracker.update_value(|t| t.update(section, v.intersecting, v.ratio));
            if let Some(now) = tracker.with_value(|t| t.current()) {
                set_current.set(Some(now));
            }
        });
    });
    current
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();
    let owner = ctx.config().owner;
    let header = use_header_state();
    let current = use_current_section();
    let (menu_open, set_menu_open) = signal(false);
    let nav_ref = NodeRef::<html::Nav>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    // Close the mobile menu on clicks outside it
    let handle = window_event_listener(ev::click, move |ev| {
        if !menu_open.get_untracked() {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let in_nav = nav_ref.get_untracked().is_some_and(|nav| nav.contains(Some(&target)));
        let on_toggle = toggle_ref
            .get_untracked()
            .is_some_and(|btn| btn.contains(Some(&target)));
        if !in_nav && !on_toggle {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let links = SectionId::ALL
        .into_iter()
        .map(|section| {
            view! {
                <li>
                    <a
                        class="nav-link"
                        href=section.href()
                        data-link=section.id()
                        aria-current=move || (current.get() == Some(section)).then_some("true")
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header id="header" class=move || if header.get().sticky { "site-header is-sticky" } else { "site-header" }>
            <a class="brand" href="#home">{owner}</a>
            <button
                type="button"
                class="nav-toggle"
                aria-controls="primary-nav"
                aria-label="Toggle navigation"
                aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                node_ref=toggle_ref
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav
                id="primary-nav"
                class=move || if menu_open.get() { "nav is-open" } else { "nav" }
                aria-label="Primary"
                node_ref=nav_ref
            >
                <ul class="nav-list">{links}</ul>
            </nav>
        </header>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let header = use_header_state();
    view! {
        <a
            id="backToTop"
            href="#home"
            class=move || if header.get().back_to_top { "back-to-top visible" } else { "back-to-top" }
            aria-label="Back to top"
        >
            "↑"
        </a>
    }
}
