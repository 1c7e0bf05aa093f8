//! Contact Form Component
//!
//! Posts to the configured form endpoint and reports the outcome below
//! the form. Also hosts the copyable contact email.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::commands;
use crate::contact::FormStatus;
use crate::context::use_app_context;

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let configured = config.form_configured();
    let endpoint = config.form_endpoint;
    let (status, set_status) = signal(FormStatus::default());

    let endpoint_for_submit = endpoint.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = ev.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
            return;
        };
        let endpoint = endpoint_for_submit.clone();
        if configured {
            set_status.set(FormStatus::Sending);
        }
        spawn_local(async move {
            let result = commands::submit_contact_form(&form, &endpoint).await;
            if result == FormStatus::Sent {
                form.reset();
            } else if result.is_error() {
                log::info!("Contact form not sent: {}", result.message());
            }
            set_status.set(result);
        });
    };

    view! {
        <form id="contact-form" class="contact-form" action=endpoint method="POST" on:submit=on_submit>
            <label for="contact-name">"Name"</label>
            <input id="contact-name" name="name" type="text" autocomplete="name" required />
            <label for="contact-email">"Email"</label>
            <input id="contact-email" name="email" type="email" autocomplete="email" required />
            <label for="contact-message">"Message"</label>
            <textarea id="contact-message" name="message" rows="5" required></textarea>
            <button type="submit" class="btn btn-primary">"Send"</button>
            <p
                id="form-status"
                class=move || if status.get().is_error() { "form-status error" } else { "form-status" }
                role="status"
                aria-live="polite"
            >
                {move || status.get().message()}
            </p>
        </form>
    }
}

/// Email link. Shift+click copies the address instead of opening mail.
#[component]
pub fn ContactEmail() -> impl IntoView {
    let ctx = use_app_context();
    let email = ctx.config().email;
    let reset_ms = ctx.motion().copied_reset_ms;
    let (label, set_label) = signal(email.clone());

    let address = email.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        if !ev.shift_key() || !commands::clipboard_available() {
            return;
        }
        ev.prevent_default();
        let address = address.clone();
        spawn_local(async move {
            match commands::copy_text(&address).await {
                Ok(()) => {
                    set_label.set("✓ Copied!".to_string());
                    TimeoutFuture::new(reset_ms).await;
                    set_label.set(address);
                }
                Err(e) => log::debug!("Clipboard copy failed: {}", e),
            }
        });
    };

    view! {
        <p class="contact-email">
            <a href=format!("mailto:{}", email) on:click=on_click>{move || label.get()}</a>
        </p>
    }
}
