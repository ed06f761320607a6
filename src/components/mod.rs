//! UI Components
//!
//! Leptos components of the categories page.

mod category_tree;
mod notification;

pub use category_tree::{on_header_click, toggled_category_id, CategoryTree};
pub use notification::{NotificationHub, NotificationToast, Toast, ToastKind, NOTIFICATION_TIMEOUT_MS};
