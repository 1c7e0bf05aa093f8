//! Hero Section
//!
//! Name, typed tagline, zoomable headshot and the CV download link.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::collection_view::is_activation_key;
use crate::commands;
use crate::context::use_app_context;
use crate::reveal::typewriter_frames;

fn prefers_reduced_motion() -> bool {
    window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let speed = ctx.motion().typewriter_ms;

    let tagline = config.tagline.clone();
    let (typed, set_typed) = signal(String::new());
    if prefers_reduced_motion() {
        set_typed.set(tagline.clone());
    } else {
        let text = tagline.clone();
        spawn_local(async move {
            for frame in typewriter_frames(&text) {
                set_typed.set(frame.to_string());
                TimeoutFuture::new(speed).await;
            }
        });
    }

    let (zoomed, set_zoomed) = signal(false);
    let toggle_zoom = move || set_zoomed.update(|z| *z = !*z);
    let cv_label = config.cv_label.clone();

    view! {
        <section id="home" class="hero">
            <div class="hero-text">
                <h1 class="hero-title">{config.owner.clone()}</h1>
                <p id="typewriter" class="hero-tagline" data-text=tagline aria-live="off">
                    {move || typed.get()}
                </p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href="#projects">"View Projects"</a>
                    <a
                        class="btn btn-secondary"
                        href=config.cv_url.clone()
                        download=""
                        data-analytics="download-cv"
                        on:click=move |_| commands::track_cv_download(&cv_label)
                    >
                        "Download CV"
                    </a>
                </div>
            </div>
            <div id="heroVisual" class=move || if zoomed.get() { "hero-visual is-zoomed" } else { "hero-visual" }>
                <img
                    src=config.headshot.clone()
                    alt=format!("Portrait of {}", config.owner)
                    tabindex="0"
                    role="button"
                    aria-pressed=move || if zoomed.get() { "true" } else { "false" }
                    on:click=move |_| toggle_zoom()
                    on:keydown=move |ev| {
                        if is_activation_key(&ev.key()) {
                            ev.prevent_default();
                            toggle_zoom();
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let paragraphs = use_app_context()
        .config()
        .about
        .into_iter()
        .map(|p| view! { <p>{p}</p> })
        .collect_view();

    view! {
        <section id="about" class="section reveal">
            <h2 class="section-title">"About"</h2>
            <div class="about-body">{paragraphs}</div>
        </section>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    let items = use_app_context()
        .config()
        .achievements
        .into_iter()
        .map(|a| view! { <li class="achievement">{a}</li> })
        .collect_view();

    view! {
        <section id="achievements" class="section reveal">
            <h2 class="section-title">"Achievements"</h2>
            <ul class="achievement-list">{items}</ul>
        </section>
    }
}
