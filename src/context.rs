//! Page Context
//!
//! Handles shared by every component of one page activation, provided via
//! the Leptos Context API and disposed with the page's owner.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::NotificationHub;
use crate::reorder::ReorderCoordinator;
use crate::store::{store_apply_reorder, PageStore};

#[derive(Clone, Copy)]
pub struct PageContext {
    pub store: PageStore,
    pub notifications: NotificationHub,
    /// Holds the non-`Send` transport, hence local storage
    coordinator: StoredValue<ReorderCoordinator, LocalStorage>,
}

impl PageContext {
    pub fn new(store: PageStore, notifications: NotificationHub, coordinator: ReorderCoordinator) -> Self {
        Self {
            store,
            notifications,
            coordinator: StoredValue::new_local(coordinator),
        }
    }

    /// Persist the order now shown in `list` for `category_id`.
    /// Every call is its own request; nothing is queued or cancelled.
    pub fn reorder(&self, list: web_sys::HtmlElement, category_id: String) {
        let coordinator = self.coordinator.get_value();
        let store = self.store;
        spawn_local(async move {
            let container: &web_sys::Element = &list;
            let outcome = coordinator.on_reorder_completed(container, &category_id).await;
            if outcome.is_saved() && !store_apply_reorder(&store, &outcome.category_id, &outcome.request) {
                log::warn!("[REORDER] saved order not applied to category {}", outcome.category_id);
            }
        });
    }
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
