//! Category Order Frontend
//!
//! Categories page: renders the category/subcategory tree, lets the user
//! drag subcategories into a new order and saves that order to the backend.
//!
//! Layers:
//! - commands: backend transport and REST endpoints
//! - store / tree: loaded tree and its ordering rules
//! - reorder / sync: drag completion to persisted order
//! - components / page: Leptos views and the activation lifecycle

pub mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod page;
pub mod reorder;
pub mod store;
pub mod sync;
pub mod tree;

#[cfg(test)]
mod testing;

pub use config::BackendConfig;
pub use error::FetchError;
pub use page::{activate, activate_with, CategoriesPage};
