//! Leptos Sortable List
//!
//! Pointer-driven reordering of `<li>` items inside a single list.
//! Uses a movement threshold to distinguish click from drag. The dragged item
//! is moved in the DOM as the pointer travels, so the list's child order is
//! always the current visual order when the drag ends.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node, PointerEvent};

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

const ITEM_SELECTOR: &str = "li";
const DRAGGING_ITEM_CLASS: &str = "sortable-list__item_dragging";

/// Where the dragged item lands relative to the item under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Upper half of the target puts the dragged item before it, lower half after.
pub fn placement(pointer_y: f64, target_top: f64, target_height: f64) -> Placement {
    if pointer_y < target_top + target_height / 2.0 {
        Placement::Before
    } else {
        Placement::After
    }
}

/// Drag state for one list
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
    /// Item under the initial pointerdown (pending until the threshold is crossed)
    pub grabbed: StoredValue<Option<HtmlElement>, LocalStorage>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_sort_signals() -> SortSignals {
    let (dragging_read, dragging_write) = signal(false);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_read,
        dragging_write,
        grabbed: StoredValue::new_local(None),
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation, clearing pending and active state
pub fn end_drag(sort: &SortSignals) {
    if let Some(item) = sort.grabbed.get_value() {
        let _ = item.class_list().remove_1(DRAGGING_ITEM_CLASS);
    }
    sort.grabbed.set_value(None);
    sort.dragging_write.set(false);
}

/// Create pointerdown handler for the list.
/// Records a pending drag on the item under the pointer and captures the pointer,
/// so move/up events keep arriving even when the pointer leaves the list.
pub fn make_on_pointerdown(
    sort: SortSignals,
    list_ref: NodeRef<html::Ul>,
) -> impl Fn(PointerEvent) + Copy + 'static {
    move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        // Ignore if target is input or button
        if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
            return;
        }
        if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
            return;
        }
        let Some(list) = list_ref.get_untracked() else {
            return;
        };
        let Ok(Some(item)) = target.closest(ITEM_SELECTOR) else {
            return;
        };
        if !list.contains(Some(item.as_ref())) {
            return;
        }
        let Ok(item) = item.dyn_into::<HtmlElement>() else {
            return;
        };

        sort.grabbed.set_value(Some(item));
        sort.start_x_write.set(ev.client_x());
        sort.start_y_write.set(ev.client_y());
        let _ = list.set_pointer_capture(ev.pointer_id());
    }
}

/// Create pointermove handler - starts the drag once past the threshold,
/// then keeps the dragged item next to whichever item is under the pointer.
pub fn make_on_pointermove(
    sort: SortSignals,
    list_ref: NodeRef<html::Ul>,
) -> impl Fn(PointerEvent) + Copy + 'static {
    move |ev: PointerEvent| {
        let Some(item) = sort.grabbed.get_value() else {
            return;
        };

        if !sort.dragging_read.get_untracked() {
            let start = (sort.start_x_read.get_untracked(), sort.start_y_read.get_untracked());
            if !exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                return;
            }
            sort.dragging_write.set(true);
            let _ = item.class_list().add_1(DRAGGING_ITEM_CLASS);
        }

        if let Some(list) = list_ref.get_untracked() {
            move_under_pointer(&list, &item, ev.client_x(), ev.client_y());
        }
    }
}

/// Create pointerup handler.
/// Emits `on_reorder` with the list element only when an actual drag happened;
/// a press without movement stays a click.
pub fn make_on_pointerup(
    sort: SortSignals,
    list_ref: NodeRef<html::Ul>,
    on_reorder: Callback<HtmlElement>,
) -> impl Fn(PointerEvent) + Copy + 'static {
    move |ev: PointerEvent| {
        let was_dragging = sort.dragging_read.get_untracked() && sort.grabbed.with_value(Option::is_some);
        end_drag(&sort);

        let Some(list) = list_ref.get_untracked() else {
            return;
        };
        let _ = list.release_pointer_capture(ev.pointer_id());
        if was_dragging {
            log::debug!("[SORT] drag finished, emitting reorder");
            on_reorder.run(list.into());
        }
    }
}

/// Create pointercancel handler - drops the drag without emitting
pub fn make_on_pointercancel(
    sort: SortSignals,
    list_ref: NodeRef<html::Ul>,
) -> impl Fn(PointerEvent) + Copy + 'static {
    move |ev: PointerEvent| {
        end_drag(&sort);
        if let Some(list) = list_ref.get_untracked() {
            let _ = list.release_pointer_capture(ev.pointer_id());
        }
    }
}

fn move_under_pointer(list: &Element, dragged: &HtmlElement, x: i32, y: i32) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(hit) = doc.element_from_point(x as f32, y as f32) else {
        return;
    };
    let Ok(Some(target)) = hit.closest(ITEM_SELECTOR) else {
        return;
    };
    if target.is_same_node(Some(dragged.as_ref())) || !list.contains(Some(target.as_ref())) {
        return;
    }
    let Some(parent) = target.parent_node() else {
        return;
    };

    let rect = target.get_bounding_client_rect();
    let anchor: Option<Node> = match placement(y as f64, rect.top(), rect.height()) {
        Placement::Before => Some(target.into()),
        Placement::After => target.next_sibling(),
    };
    let _ = parent.insert_before(dragged, anchor.as_ref());
}

/// Sortable list: renders its `<li>` children inside one `<ul>` and reports
/// the list element after every completed drag.
#[component]
pub fn SortableList(
    /// Called with the list element once a drag has finished
    on_reorder: Callback<HtmlElement>,
    children: Children,
) -> impl IntoView {
    let list_ref = NodeRef::<html::Ul>::new();
    let sort = create_sort_signals();

    let list_class = move || {
        let mut c = String::from("sortable-list");
        if sort.dragging_read.get() {
            c.push_str(" sortable-list_dragging");
        }
        c
    };

    view! {
        <ul
            class=list_class
            node_ref=list_ref
            on:pointerdown=make_on_pointerdown(sort, list_ref)
            on:pointermove=make_on_pointermove(sort, list_ref)
            on:pointerup=make_on_pointerup(sort, list_ref, on_reorder)
            on:pointercancel=make_on_pointercancel(sort, list_ref)
        >
            {children()}
        </ul>
    }
}
