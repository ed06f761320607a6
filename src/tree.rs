//! Tree Utilities
//!
//! Ordering helpers shared by the store and the renderer.

use crate::models::{Category, Subcategory};

/// Sort categories and every category's subcategories by weight.
/// Stable, so equal weights keep backend order.
pub fn sort_tree(categories: &mut [Category]) {
    categories.sort_by_key(|c| c.weight);
    for category in categories.iter_mut() {
        category.subcategories.sort_by_key(|s| s.weight);
    }
}

/// Subcategories in display order
pub fn ordered_subcategories(category: &Category) -> Vec<&Subcategory> {
    let mut subcategories: Vec<&Subcategory> = category.subcategories.iter().collect();
    subcategories.sort_by_key(|s| s.weight);
    subcategories
}

/// Ids as they appear when the category is rendered
pub fn display_ids(category: &Category) -> Vec<String> {
    ordered_subcategories(category)
        .into_iter()
        .map(|s| s.id.clone())
        .collect()
}
