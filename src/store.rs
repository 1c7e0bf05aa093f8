//! Global Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each
//! collection field is written exactly once, when its load settles.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::LoadError;
use crate::models::{BlogPost, EducationEntry, ExperienceEntry, Project, Skill};

/// Progress of one collection load
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(Vec<T>),
    Failed,
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<Vec<T>, LoadError>) -> Self {
        match result {
            Ok(items) => LoadState::Loaded(items),
            Err(_) => LoadState::Failed,
        }
    }
}

/// Loaded content for the whole page
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    pub projects: LoadState<Project>,
    pub blog: LoadState<BlogPost>,
    pub skills: LoadState<Skill>,
    pub education: LoadState<EducationEntry>,
    pub experience: LoadState<ExperienceEntry>,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
