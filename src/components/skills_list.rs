//! Skills List
//!
//! Skill badges, revealed in a staggered sequence the first time the
//! skills section scrolls into view.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::collection_view::CollectionView;
use crate::context::use_app_context;
use crate::models::{Collection, Skill};
use crate::observe::observe_once;
use crate::reveal::RevealLatch;
use crate::store::{use_page_store, LoadState, PageStateStoreFields};

/// Skills grid. `section` is the enclosing section whose visibility
/// starts the reveal.
#[component]
pub fn SkillsList(section: NodeRef<html::Section>) -> impl IntoView {
    let store = use_page_store();
    let motion = use_app_context().motion();
    let state = Signal::derive(move || store.skills().get());

    // Number of badges revealed so far
    let revealed = RwSignal::new(0usize);
    let latch = StoredValue::new(RevealLatch::new());

    Effect::new(move |_| {
        let LoadState::Loaded(skills) = state.get() else {
            return;
        };
        let Some(section_el) = section.get() else {
            return;
        };
        if latch.with_value(|l| l.has_fired()) || skills.is_empty() {
            return;
        }
        let count = skills.len();
        let step = motion.skill_stagger_ms;
        observe_once(&section_el, &motion.skill_root_margin, motion.skill_threshold, move || {
            let Some(delays) = latch.try_update_value(|l| l.trigger(true, count, step)).flatten() else {
                return;
            };
            log::debug!("Revealing {} skills", delays.len());
            for (i, delay) in delays.into_iter().enumerate() {
                Timeout::new(delay, move || revealed.update(|n| *n = (*n).max(i + 1))).forget();
            }
        });
    });

    view! {
        <ul id="skills-grid" class="skills-grid">
            <CollectionView
                state=state
                collection=Collection::Skills
                render=move |i: usize, skill: Skill| {
                    let visible = Signal::derive(move || revealed.get() > i);
                    view! { <SkillBadge skill=skill visible=visible /> }
                }
            />
        </ul>
    }
}

#[component]
fn SkillBadge(skill: Skill, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <li
            class=move || if visible.get() { "skill-badge is-visible" } else { "skill-badge" }
            tabindex="0"
        >
            <span aria-hidden="true">{skill.icon}</span>
            " "
            {skill.name}
        </li>
    }
}
