//! Category Tree Store
//!
//! Page state with field-level reactivity (Leptos reactive_stores), plus the
//! plain mutations behind it.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::CategoryApi;
use crate::error::FetchError;
use crate::models::{Category, ReorderRequest};
use crate::tree::sort_tree;

/// State of one categories page activation
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Categories in display order, loaded once on activation
    pub categories: Vec<Category>,
    /// Ids of collapsed category blocks; absent means expanded
    pub collapsed: HashSet<String>,
}

impl PageState {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            collapsed: HashSet::new(),
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Fetch the whole tree, weight-sorted at both levels
pub async fn load_tree(api: &CategoryApi) -> Result<Vec<Category>, FetchError> {
    let mut categories = api.list_categories().await?;
    sort_tree(&mut categories);
    log::info!("[STORE] loaded {} categories", categories.len());
    Ok(categories)
}

/// Adopt a persisted order: weights come from the request, subcategories are
/// re-sorted. Ids not in the category are ignored. Returns false when the
/// category is unknown.
pub fn apply_reorder(categories: &mut [Category], category_id: &str, request: &ReorderRequest) -> bool {
    let Some(category) = categories.iter_mut().find(|c| c.id == category_id) else {
        return false;
    };
    for entry in request.entries() {
        if let Some(sub) = category.subcategories.iter_mut().find(|s| s.id == entry.id) {
            sub.weight = entry.weight;
        }
    }
    category.subcategories.sort_by_key(|s| s.weight);
    true
}

/// Flip one category block. Returns true when it is expanded afterwards.
pub fn toggle_collapsed(collapsed: &mut HashSet<String>, category_id: &str) -> bool {
    if collapsed.remove(category_id) {
        true
    } else {
        collapsed.insert(category_id.to_string());
        false
    }
}

// ========================
// Store Helper Functions
// ========================

/// Apply a successfully persisted order to the store.
/// False when the category is unknown or the page is already torn down.
pub fn store_apply_reorder(store: &PageStore, category_id: &str, request: &ReorderRequest) -> bool {
    store
        .try_update(|state| apply_reorder(&mut state.categories, category_id, request))
        .unwrap_or(false)
}

/// Toggle a category block between expanded and collapsed
pub fn store_toggle_category(store: &PageStore, category_id: &str) -> bool {
    let field = store.collapsed();
    let mut collapsed = field.write();
    toggle_collapsed(&mut collapsed, category_id)
}

/// Untracked snapshot of the loaded tree
pub fn store_categories(store: &PageStore) -> Vec<Category> {
    store.categories().get_untracked()
}

/// Tracked read of a block's expanded state
pub fn store_is_expanded(store: &PageStore, category_id: &str) -> bool {
    let field = store.collapsed();
    let collapsed = field.read();
    !collapsed.contains(category_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subcategory;
    use crate::testing::{config, RecordingTransport};
    use crate::tree::display_ids;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn shoes() -> Category {
        Category {
            id: "1".to_string(),
            title: "Shoes".to_string(),
            weight: 1,
            subcategories: vec![
                Subcategory { id: "a".to_string(), title: "Boots".to_string(), count: 3, weight: 1 },
                Subcategory { id: "b".to_string(), title: "Sandals".to_string(), count: 5, weight: 2 },
            ],
        }
    }

    #[test]
    fn test_load_tree_sorts_both_levels() {
        let transport = Rc::new(RecordingTransport::new());
        transport.respond(Ok(r#"[
            {"id":"2","title":"Hats","weight":2,"subcategories":[]},
            {"id":"1","title":"Shoes","weight":1,"subcategories":[
                {"id":"b","title":"Sandals","count":5,"weight":2},
                {"id":"a","title":"Boots","count":3,"weight":1}
            ]}
        ]"#));
        let api = CategoryApi::new(transport, config());

        let categories = block_on(load_tree(&api)).unwrap();
        assert_eq!(categories[0].id, "1");
        assert_eq!(display_ids(&categories[0]), vec!["a", "b"]);
        assert_eq!(categories[1].id, "2");
    }

    #[test]
    fn test_load_tree_failure_yields_no_tree() {
        let transport = Rc::new(RecordingTransport::new());
        transport.respond(Err(FetchError::Network("offline".to_string())));
        let api = CategoryApi::new(transport, config());

        assert_eq!(
            block_on(load_tree(&api)),
            Err(FetchError::Network("offline".to_string()))
        );
    }

    #[test]
    fn test_apply_reorder() {
        let mut categories = vec![shoes()];
        let applied = apply_reorder(&mut categories, "1", &ReorderRequest::from_ids(["b", "a"]));

        assert!(applied);
        assert_eq!(display_ids(&categories[0]), vec!["b", "a"]);
        let weights: Vec<i32> = categories[0].subcategories.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![1, 2]);
    }

    #[test]
    fn test_apply_reorder_unknown_category() {
        let mut categories = vec![shoes()];
        assert!(!apply_reorder(&mut categories, "9", &ReorderRequest::from_ids(["b", "a"])));
        assert_eq!(categories, vec![shoes()]);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut collapsed = HashSet::new();
        assert!(!toggle_collapsed(&mut collapsed, "1"));
        assert!(collapsed.contains("1"));
        assert!(toggle_collapsed(&mut collapsed, "1"));
        assert!(collapsed.is_empty());
    }

    #[test]
    fn test_toggle_is_per_category() {
        let mut collapsed = HashSet::new();
        toggle_collapsed(&mut collapsed, "1");
        toggle_collapsed(&mut collapsed, "2");
        toggle_collapsed(&mut collapsed, "1");
        assert_eq!(collapsed, HashSet::from(["2".to_string()]));
    }

    #[test]
    fn test_store_helpers() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(PageState::new(vec![shoes()]));

            assert!(store_is_expanded(&store, "1"));
            assert!(!store_toggle_category(&store, "1"));
            assert!(!store_is_expanded(&store, "1"));
            assert!(store_toggle_category(&store, "1"));
            assert!(store_is_expanded(&store, "1"));

            assert!(!store_apply_reorder(&store, "9", &ReorderRequest::from_ids(["b", "a"])));
            assert!(store_apply_reorder(&store, "1", &ReorderRequest::from_ids(["b", "a"])));
            assert_eq!(display_ids(&store_categories(&store)[0]), vec!["b", "a"]);
        });
    }
}
