//! Portfolio App
//!
//! Page layout, collection loading and the one-shot section reveal.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::commands;
use crate::components::{
    About, Achievements, BackToTop, BlogGrid, ContactEmail, ContactForm, EducationList, ExperienceList,
    Hero, ModalController, ProjectGrid, ProjectModal, SiteHeader, SkillsList,
};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::models::Collection;
use crate::observe::reveal_each;
use crate::store::{LoadState, PageState, PageStateStoreFields, PageStore};

/// Fetch one collection and hand its settled state to `apply`
fn spawn_collection_load<T, F>(data_dir: &str, collection: Collection, apply: F)
where
    T: for<'de> Deserialize<'de> + 'static,
    F: FnOnce(LoadState<T>) + 'static,
{
    let url = collection.url(data_dir);
    spawn_local(async move {
        let result = commands::load_collection::<T>(&url).await;
        match &result {
            Ok(items) => log::info!("Loaded {} items from {}", items.len(), url),
            Err(e) => log::warn!("{} ({})", collection.fallback_message(), e),
        }
        apply(LoadState::from_result(result));
    });
}

/// Start all five loads; they settle independently
fn load_collections(store: PageStore, data_dir: &str) {
    spawn_collection_load(data_dir, Collection::Projects, move |s| *store.projects().write() = s);
    spawn_collection_load(data_dir, Collection::Blog, move |s| *store.blog().write() = s);
    spawn_collection_load(data_dir, Collection::Skills, move |s| *store.skills().write() = s);
    spawn_collection_load(data_dir, Collection::Education, move |s| *store.education().write() = s);
    spawn_collection_load(data_dir, Collection::Experience, move |s| *store.experience().write() = s);
}

/// Add `is-visible` to each `.reveal` element the first time it shows
fn setup_section_reveal(threshold: f64) {
    let Ok(list) = document().query_selector_all(".reveal") else {
        return;
    };
    let targets: Vec<Element> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect();
    reveal_each(&targets, threshold, |el| {
        let _ = el.class_list().add_1("is-visible");
    });
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let data_dir = config.data_dir.clone();
    let motion = config.motion.clone();

    let store = Store::new(PageState::default());
    provide_context(store);
    provide_context(AppContext::new(config));
    provide_context(ModalController::new(motion.modal_close_ms));

    load_collections(store, &data_dir);
    request_animation_frame(move || setup_section_reveal(motion.reveal_threshold));

    let skills_ref = NodeRef::<html::Section>::new();

    view! {
        <SiteHeader />
        <main id="main">
            <Hero />
            <About />
            <section id="education" class="section reveal">
                <h2 class="section-title">"Education"</h2>
                <EducationList />
            </section>
            <section id="skills" class="section reveal" node_ref=skills_ref>
                <h2 class="section-title">"Skills"</h2>
                <SkillsList section=skills_ref />
            </section>
            <section id="experience" class="section reveal">
                <h2 class="section-title">"Experience"</h2>
                <ExperienceList />
            </section>
            <section id="projects" class="section reveal">
                <h2 class="section-title">"Projects"</h2>
                <ProjectGrid />
            </section>
            <Achievements />
            <section id="blog" class="section reveal">
                <h2 class="section-title">"Blog"</h2>
                <BlogGrid />
            </section>
            <section id="contact" class="section reveal">
                <h2 class="section-title">"Contact"</h2>
                <ContactEmail />
                <ContactForm />
            </section>
        </main>
        <BackToTop />
        <ProjectModal />
    }
}
