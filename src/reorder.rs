//! Reorder Coordinator
//!
//! Turns a finished drag into a persisted order. The rendered list is the
//! only source of the new order: its items are read in document order and
//! weighted 1..=n.

use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::commands::CategoryApi;
use crate::error::FetchError;
use crate::models::ReorderRequest;
use crate::sync::{persist, Notifier};

/// Anything that can list the ids of its items in visual order
pub trait ItemContainer {
    fn item_ids(&self) -> Vec<String>;
}

/// Rendered list: `li` descendants carrying `data-id`
impl ItemContainer for web_sys::Element {
    fn item_ids(&self) -> Vec<String> {
        let Ok(items) = self.query_selector_all("li") else {
            return Vec::new();
        };
        let mut ids = Vec::with_capacity(items.length() as usize);
        for index in 0..items.length() {
            let Some(item) = items.get(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            match item.get_attribute("data-id") {
                Some(id) => ids.push(id),
                None => log::warn!("[REORDER] list item {} has no data-id", index),
            }
        }
        ids
    }
}

impl<S: AsRef<str>> ItemContainer for Vec<S> {
    fn item_ids(&self) -> Vec<String> {
        self.iter().map(|id| id.as_ref().to_string()).collect()
    }
}

/// `{ id, weight: position + 1 }` for every item, in container order
pub fn build_reorder_request<C: ItemContainer + ?Sized>(container: &C) -> ReorderRequest {
    ReorderRequest::from_ids(container.item_ids())
}

/// Result of handling one reorder-completion signal
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderOutcome {
    pub category_id: String,
    pub request: ReorderRequest,
    pub result: Result<(), FetchError>,
}

impl ReorderOutcome {
    pub fn is_saved(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Clone)]
pub struct ReorderCoordinator {
    api: CategoryApi,
    notifier: Rc<dyn Notifier>,
}

impl ReorderCoordinator {
    pub fn new(api: CategoryApi, notifier: Rc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// Handle a finished drag in `category_id`'s list.
    ///
    /// An empty list still sends an empty ordering. Failures are reported
    /// through the notifier and returned in the outcome, never raised.
    pub async fn on_reorder_completed(&self, container: &dyn ItemContainer, category_id: &str) -> ReorderOutcome {
        let request = build_reorder_request(container);
        log::debug!(
            "[REORDER] category {}: {:?}",
            category_id,
            request.ids().collect::<Vec<_>>()
        );
        let result = persist(&self.api, self.notifier.as_ref(), &request).await;
        ReorderOutcome {
            category_id: category_id.to_string(),
            request,
            result,
        }
    }
}
