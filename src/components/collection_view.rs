//! Collection View Component
//!
//! Renders a collection's load state: nothing while loading, one view
//! per item in source order once loaded, or a single fallback message.

use leptos::prelude::*;

use crate::models::Collection;
use crate::store::LoadState;

/// What a collection's container holds for a given load state
#[derive(Debug, PartialEq)]
pub enum CollectionBody<T> {
    Pending,
    /// One entry per item, indexed in source order
    Items(Vec<(usize, T)>),
    /// The collection's single fallback message
    Fallback(&'static str),
}

impl<T> CollectionBody<T> {
    pub fn of(state: LoadState<T>, collection: Collection) -> Self {
        match state {
            LoadState::Loading => CollectionBody::Pending,
            LoadState::Loaded(items) => CollectionBody::Items(items.into_iter().enumerate().collect()),
            LoadState::Failed => CollectionBody::Fallback(collection.fallback_message()),
        }
    }
}

#[component]
pub fn CollectionView<T, F, IV>(
    #[prop(into)] state: Signal<LoadState<T>>,
    collection: Collection,
    /// Builds the view for item `i`
    render: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(usize, T) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    move || match CollectionBody::of(state.get(), collection) {
        CollectionBody::Pending => ().into_any(),
        CollectionBody::Items(items) => items
            .into_iter()
            .map(|(i, item)| render(i, item))
            .collect::<Vec<_>>()
            .into_any(),
        CollectionBody::Fallback(message) => view! {
            <p class="load-error" role="status">{message}</p>
        }
        .into_any(),
    }
}

/// True for the keys that activate a focused card
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    #[test]
    fn test_loaded_items_keep_source_order() {
        let state = LoadState::from_result(Ok(vec!["a", "b", "c"]));
        assert_eq!(
            CollectionBody::of(state, Collection::Projects),
            CollectionBody::Items(vec![(0, "a"), (1, "b"), (2, "c")])
        );
    }

    #[test]
    fn test_empty_collection_renders_nothing() {
        let state: LoadState<&str> = LoadState::Loaded(Vec::new());
        assert_eq!(CollectionBody::of(state, Collection::Blog), CollectionBody::Items(Vec::new()));
    }

    #[test]
    fn test_failure_renders_only_the_fallback() {
        for collection in Collection::ALL {
            let state: LoadState<&str> = LoadState::from_result(Err(LoadError::Status(500)));
            assert_eq!(
                CollectionBody::of(state, collection),
                CollectionBody::Fallback(collection.fallback_message())
            );
        }
        let state: LoadState<&str> = LoadState::Failed;
        assert_eq!(
            CollectionBody::of(state, Collection::Projects),
            CollectionBody::Fallback("Failed to load projects.")
        );
    }

    #[test]
    fn test_loading_renders_nothing() {
        let state: LoadState<&str> = LoadState::Loading;
        assert_eq!(CollectionBody::of(state, Collection::Skills), CollectionBody::Pending);
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Spacebar"));
    }
}
