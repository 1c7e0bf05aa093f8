//! Project Modal Component
//!
//! Single accessible dialog showing one project. State transitions come
//! from `ModalMachine`; this module carries out the effects on the DOM.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_focus_trap::{
    active_index, can_receive_focus, focus_initial, focusable_within, focused_element, TrapSession,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

use crate::modal::{Dismissal, ModalEffect, ModalEvent, ModalMachine};
use crate::models::Project;

/// Handle to the page's one modal, provided via context
#[derive(Clone, Copy)]
pub struct ModalController {
    item: RwSignal<Option<Project>>,
    hidden: RwSignal<bool>,
    open: RwSignal<bool>,
    machine: StoredValue<ModalMachine<HtmlElement>, LocalStorage>,
    /// Keyboard interceptor, present only while open
    session: StoredValue<Option<TrapSession>, LocalStorage>,
    root: NodeRef<html::Div>,
    content: NodeRef<html::Div>,
    close_button: NodeRef<html::Button>,
    close_ms: u32,
}

impl ModalController {
    pub fn new(close_ms: u32) -> Self {
        Self {
            item: RwSignal::new(None),
            hidden: RwSignal::new(true),
            open: RwSignal::new(false),
            machine: StoredValue::new_local(ModalMachine::new()),
            session: StoredValue::new_local(None),
            root: NodeRef::new(),
            content: NodeRef::new(),
            close_button: NodeRef::new(),
            close_ms,
        }
    }

    /// Show `project`. Focus returns to `invoker` (or whatever had focus)
    /// when the dialog closes.
    pub fn open(&self, project: Project, invoker: Option<HtmlElement>) {
        let invoker = invoker.or_else(focused_element);
        self.dispatch(ModalEvent::Open {
            item: project,
            invoker,
        });
    }

    pub fn dismiss(&self, how: Dismissal) {
        self.dispatch(ModalEvent::Dismiss(how));
    }

    fn on_key(&self, ev: &KeyboardEvent) {
        let focusables = self.focusables();
        let prevented = self.dispatch(ModalEvent::Key {
            key: ev.key(),
            shift: ev.shift_key(),
            active: active_index(&focusables),
            focusable: focusables.len(),
        });
        if prevented {
            ev.prevent_default();
        }
    }

    fn focusables(&self) -> Vec<HtmlElement> {
        self.content
            .get_untracked()
            .map(|content| focusable_within(&content))
            .unwrap_or_default()
    }

    /// Run one event through the machine and apply its effects.
    /// Returns whether the triggering event's default should be cancelled.
    fn dispatch(&self, event: ModalEvent<Project, HtmlElement>) -> bool {
        let effects = self
            .machine
            .try_update_value(|m| m.step(event))
            .unwrap_or_default();

        let mut prevented = false;
        for effect in effects {
            match effect {
                ModalEffect::Populate(project) => {
                    log::debug!("Modal showing {}", project.title);
                    self.item.set(Some(project));
                }
                ModalEffect::Show => {
                    self.hidden.set(false);
                    set_scroll_lock(true);
                    let open = self.open;
                    request_animation_frame(move || open.set(true));
                }
                ModalEffect::FocusInitial => {
                    let this = *self;
                    request_animation_frame(move || this.focus_initial());
                }
                ModalEffect::StartTrap => self.start_trap(),
                ModalEffect::StopTrap => {
                    // Dropping the session detaches its listener
                    let session = self.session.try_update_value(|s| s.take()).flatten();
                    drop(session);
                }
                ModalEffect::BeginHide(ticket) => self.begin_hide(ticket),
                ModalEffect::PreventDefault => prevented = true,
                ModalEffect::FocusAt(i) => {
                    if let Some(el) = self.focusables().get(i) {
                        let _ = el.focus();
                    }
                }
                ModalEffect::RestoreFocus(invoker) => {
                    if can_receive_focus(&invoker) {
                        let _ = invoker.focus();
                    }
                }
            }
        }
        prevented
    }

    fn focus_initial(&self) {
        let Some(content) = self.content.get_untracked() else {
            return;
        };
        let close = self.close_button.get_untracked();
        let fallback = close.as_ref().map(|b| b.unchecked_ref::<HtmlElement>());
        focus_initial(&content, fallback);
    }

    fn start_trap(&self) {
        let Some(root) = self.root.get_untracked() else {
            log::warn!("Modal root not mounted; keyboard trap not started");
            return;
        };
        let this = *self;
        let session = TrapSession::start(root.into(), move |ev: KeyboardEvent| this.on_key(&ev));
        self.session.set_value(Some(session));
    }

    fn begin_hide(&self, ticket: u64) {
        self.open.set(false);
        let this = *self;
        Timeout::new(self.close_ms, move || {
            // Reopened, or closed again, during the transition
            let current = this
                .machine
                .try_with_value(|m| m.should_hide(ticket))
                .unwrap_or(false);
            if !current {
                return;
            }
            this.hidden.set(true);
            set_scroll_lock(false);
        })
        .forget();
    }
}

pub fn use_modal() -> ModalController {
    expect_context::<ModalController>()
}

fn set_scroll_lock(locked: bool) {
    if let Some(body) = document().body() {
        let _ = body.class_list().toggle_with_force("no-scroll", locked);
    }
}

/// The dialog markup. Expects a `ModalController` in context.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let modal = use_modal();
    let item = modal.item;
    let hidden = modal.hidden;
    let open = modal.open;
    let root_ref = modal.root;
    let content_ref = modal.content;
    let close_ref = modal.close_button;

    let modal_class = move || match (hidden.get(), open.get()) {
        (true, _) => "modal hidden",
        (false, true) => "modal open",
        (false, false) => "modal",
    };

    let title = move || item.with(|p| p.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let description = move || item.with(|p| p.as_ref().map(|p| p.description.clone()).unwrap_or_default());

    let media = move || {
        item.get().map(|p| {
            view! {
                <img src=p.thumbnail.clone() alt=format!("Screenshot of {}", p.title) loading="lazy" />
            }
        })
    };

    let tags = move || {
        item.get().map(|p| {
            p.tech
                .into_iter()
                .map(|t| view! { <span class="tag">{t}</span> })
                .collect_view()
        })
    };

    let links = move || {
        item.get().map(|p| {
            let live = p.live_url().map(str::to_string);
            view! {
                {live.map(|url| view! {
                    <a class="btn btn-secondary" href=url target="_blank" rel="noopener noreferrer">"Live Demo"</a>
                })}
                <a class="btn btn-primary" href=p.repo target="_blank" rel="noopener noreferrer">"Source Code"</a>
            }
        })
    };

    view! {
        <div
            id="project-modal"
            node_ref=root_ref
            class=modal_class
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            aria-describedby="modal-desc"
            aria-hidden=move || if hidden.get() { "true" } else { "false" }
        >
            // Backdrop: only clicks landing on it directly dismiss
            <div
                class="modal-overlay"
                on:click=move |ev| {
                    if ev.target() == ev.current_target() {
                        modal.dismiss(Dismissal::Backdrop);
                    }
                }
            ></div>
            <div class="modal-content" tabindex="-1" node_ref=content_ref>
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Close dialog"
                    node_ref=close_ref
                    on:click=move |_| modal.dismiss(Dismissal::CloseControl)
                >
                    "×"
                </button>
                <div class="modal-media">{media}</div>
                <h3 id="modal-title">{title}</h3>
                <p id="modal-desc">{description}</p>
                <div class="modal-tech">{tags}</div>
                <div class="modal-links">{links}</div>
            </div>
        </div>
    }
}
