//! Blog Grid
//!
//! Blog post cards; activating one opens the post in a new tab.

use leptos::prelude::*;

use super::collection_view::{is_activation_key, CollectionView};
use crate::models::{BlogPost, Collection};
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn BlogGrid() -> impl IntoView {
    let store = use_page_store();
    let state = Signal::derive(move || store.blog().get());

    view! {
        <div id="blog-grid" class="projects-grid">
            <CollectionView
                state=state
                collection=Collection::Blog
                render=|_: usize, post: BlogPost| view! { <BlogCard post=post /> }
            />
        </div>
    }
}

/// Host name of `url`, empty when it does not parse
fn host_of(url: &str) -> String {
    web_sys::Url::new(url).map(|u| u.hostname()).unwrap_or_default()
}

fn open_in_new_tab(url: &str) {
    if let Err(e) = window().open_with_url_and_target_and_features(url, "_blank", "noopener") {
        log::warn!("Could not open {}: {:?}", url, e);
    }
}

#[component]
fn BlogCard(post: BlogPost) -> impl IntoView {
    let domain = host_of(&post.url);
    let published = post.published_label();
    let for_click = post.url.clone();
    let for_key = post.url.clone();

    view! {
        <article
            class="project-card"
            tabindex="0"
            aria-label=post.card_label()
            on:click=move |_| open_in_new_tab(&for_click)
            on:keydown=move |ev| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    open_in_new_tab(&for_key);
                }
            }
        >
            <div class="project-body">
                <h3 class="project-title">{post.title.clone()}</h3>
                <p class="project-summary">{post.summary.clone().unwrap_or_default()}</p>
                <div class="project-tags">
                    {published.map(|date| view! { <span class="tag">{date}</span> })}
                    {(!domain.is_empty()).then(|| view! { <span class="tag">{domain.clone()}</span> })}
                </div>
                <div class="project-actions">
                    <a
                        class="btn btn-primary"
                        href=post.url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                        on:keydown=|ev| ev.stop_propagation()
                    >
                        "Read Post"
                    </a>
                </div>
            </div>
        </article>
    }
}
