//! Education & Experience Timelines
//!
//! Display-only lists sharing the same card layout.

use leptos::prelude::*;

use super::collection_view::CollectionView;
use crate::models::{Collection, EducationEntry, ExperienceEntry};
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn EducationList() -> impl IntoView {
    let store = use_page_store();
    let state = Signal::derive(move || store.education().get());

    view! {
        <ul id="education-list" class="education-list">
            <CollectionView
                state=state
                collection=Collection::Education
                render=|_: usize, entry: EducationEntry| view! { <EducationCard entry=entry /> }
            />
        </ul>
    }
}

#[component]
pub fn ExperienceList() -> impl IntoView {
    let store = use_page_store();
    let state = Signal::derive(move || store.experience().get());

    view! {
        <ul id="experience-list" class="education-list">
            <CollectionView
                state=state
                collection=Collection::Experience
                render=|_: usize, entry: ExperienceEntry| view! { <ExperienceCard entry=entry /> }
            />
        </ul>
    }
}

#[component]
fn EducationCard(entry: EducationEntry) -> impl IntoView {
    let dates = entry.date_range();
    let label = entry.card_label();
    view! {
        <li class="education-item">
            <article class="education-card" aria-label=label>
                <div class="education-icon" aria-hidden="true">
                    <svg width="32" height="32" viewBox="0 0 24 24" fill="currentColor">
                        <path d="M12 3L1 9l11 6 9-4.91V17h2V9M5 13.18v4L12 21l7-3.82v-4L12 17l-7-3.82z" />
                    </svg>
                </div>
                <div class="education-content">
                    <h3 class="education-degree">{entry.degree}</h3>
                    <p class="education-school">{entry.school}</p>
                    <p class="education-date">{dates}</p>
                    {entry.notes.map(|notes| view! { <p class="education-notes">{notes}</p> })}
                </div>
            </article>
        </li>
    }
}

#[component]
fn ExperienceCard(entry: ExperienceEntry) -> impl IntoView {
    let heading = entry.heading();
    let label = entry.card_label();
    let dates = entry.date_range();
    let duties = entry
        .responsibilities
        .into_iter()
        .map(|r| view! { <li>{r}</li> })
        .collect_view();

    view! {
        <li class="education-item">
            <article class="education-card" aria-label=label>
                <div class="education-icon" aria-hidden="true">
                    <svg width="32" height="32" viewBox="0 0 24 24" fill="currentColor">
                        <path d="M20 6h-4V4c0-1.11-.89-2-2-2h-4c-1.11 0-2 .89-2 2v2H4c-1.11 0-1.99.89-1.99 2L2 19c0 1.11.89 2 2 2h16c1.11 0 2-.89 2-2V8c0-1.11-.89-2-2-2zm-6 0h-4V4h4v2z" />
                    </svg>
                </div>
                <div class="education-content">
                    <h3 class="education-degree">{heading}</h3>
                    <p class="education-date">{dates}</p>
                    <ul class="experience-details">{duties}</ul>
                </div>
            </article>
        </li>
    }
}
