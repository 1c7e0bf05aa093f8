//! Project Grid
//!
//! Project cards; activating one opens the project modal.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::collection_view::{is_activation_key, CollectionView};
use super::project_modal::use_modal;
use crate::models::{Collection, Project};
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let store = use_page_store();
    let state = Signal::derive(move || store.projects().get());

    view! {
        <div id="projects-grid" class="projects-grid">
            <CollectionView
                state=state
                collection=Collection::Projects
                render=|_: usize, project: Project| view! { <ProjectCard project=project /> }
            />
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let modal = use_modal();
    let for_click = project.clone();
    let for_key = project.clone();

    let tech_summary = format!("Technologies used: {}", project.tech_summary());
    let badges = project
        .tech_badges()
        .into_iter()
        .map(|t| view! { <span class="tag" aria-hidden="true">{t}</span> })
        .collect_view();
    let live = project.live_url().map(str::to_string);

    view! {
        <article
            class="project-card"
            tabindex="0"
            aria-label=project.card_label()
            on:click=move |ev| {
                let invoker = ev.current_target().and_then(|t| t.dyn_into::<HtmlElement>().ok());
                modal.open(for_click.clone(), invoker);
            }
            on:keydown=move |ev| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    let invoker = ev.current_target().and_then(|t| t.dyn_into::<HtmlElement>().ok());
                    modal.open(for_key.clone(), invoker);
                }
            }
        >
            <div class="project-media">
                <img
                    src=project.thumbnail.clone()
                    alt=format!("Thumbnail for {}", project.title)
                    loading="lazy"
                />
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title.clone()}</h3>
                <p class="project-summary">{project.short.clone()}</p>
                <div class="project-tags">
                    <span class="sr-only">{tech_summary}</span>
                    {badges}
                </div>
                <div class="project-actions">
                    {live.map(|url| view! {
                        <a
                            class="btn btn-secondary"
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            on:click=|ev| ev.stop_propagation()
                            on:keydown=|ev| ev.stop_propagation()
                        >
                            "Live Demo"
                        </a>
                    })}
                    <a
                        class="btn btn-primary"
                        href=project.repo.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                        on:keydown=|ev| ev.stop_propagation()
                    >
                        "Source Code"
                    </a>
                </div>
            </div>
        </article>
    }
}
