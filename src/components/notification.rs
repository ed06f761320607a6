//! Notification Component
//!
//! Transient toast for persist results. One toast at a time; a newer toast
//! replaces the shown one and outlives the older one's timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::FetchError;
use crate::models::ReorderRequest;
use crate::sync::Notifier;

/// How long a toast stays visible
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

pub const SAVED_MESSAGE: &str = "Category order saved";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "notification notification_success show",
            ToastKind::Error => "notification notification_error show",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Clear the slot only if it still holds toast `id`
pub fn clear_if_current(slot: &mut Option<Toast>, id: u32) -> bool {
    if slot.as_ref().map(|t| t.id) == Some(id) {
        *slot = None;
        true
    } else {
        false
    }
}

#[derive(Clone, Copy)]
pub struct NotificationHub {
    pub current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u32>,
    timeout_ms: u32,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::with_timeout(NOTIFICATION_TIMEOUT_MS)
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let Some(id) = self.next_id.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        self.current.try_set(Some(Toast {
            id,
            kind,
            message: message.into(),
        }));

        let current = self.current;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            // Page may be gone by now
            current.try_update(|slot| clear_if_current(slot, id));
        });
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationHub {
    fn saved(&self, _request: &ReorderRequest) {
        self.show(ToastKind::Success, SAVED_MESSAGE);
    }

    fn failed(&self, err: &FetchError) {
        self.show(ToastKind::Error, format!("Could not save category order: {}", err));
    }
}

/// Renders the current toast, if any
#[component]
pub fn NotificationToast(hub: NotificationHub) -> impl IntoView {
    move || {
        hub.current.get().map(|toast| {
            view! {
                <div class=toast.kind.class()>
                    <div class="notification__content">{toast.message}</div>
                </div>
            }
        })
    }
}
