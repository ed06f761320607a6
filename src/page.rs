//! Categories Page
//!
//! Activation lifecycle: load the tree, mount the view, wire events.
//! Everything a page creates lives under the mount's reactive owner and is
//! released on `deactivate`.

use std::rc::Rc;

use any_spawner::Executor;
use leptos::mount::{mount_to, UnmountHandle};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use reactive_stores::Store;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::commands::{BrowserTransport, CategoryApi, Transport};
use crate::components::{on_header_click, CategoryTree, NotificationHub, NotificationToast};
use crate::config::BackendConfig;
use crate::context::PageContext;
use crate::error::FetchError;
use crate::models::Category;
use crate::reorder::ReorderCoordinator;
use crate::store::{load_tree, PageState};

/// A mounted categories page
pub struct CategoriesPage {
    handle: UnmountHandle<AnyViewState>,
    element: Option<HtmlElement>,
}

impl CategoriesPage {
    /// Root element of the page
    pub fn element(&self) -> Option<&HtmlElement> {
        self.element.as_ref()
    }

    /// Detach the page and dispose all of its reactive state
    pub fn deactivate(self) {
        log::info!("[PAGE] deactivated");
        drop(self.handle);
    }

    /// Keep the page mounted for the rest of the program
    pub fn forget(self) {
        self.handle.forget();
    }
}

/// Load categories from the configured backend and mount the page into `parent`
pub async fn activate(parent: HtmlElement, config: BackendConfig) -> Result<CategoriesPage, FetchError> {
    activate_with(parent, Rc::new(BrowserTransport), config).await
}

/// Same as `activate` with an explicit transport.
/// A failed load mounts nothing.
pub async fn activate_with(
    parent: HtmlElement,
    transport: Rc<dyn Transport>,
    config: BackendConfig,
) -> Result<CategoriesPage, FetchError> {
    let _ = Executor::init_wasm_bindgen();

    let api = CategoryApi::new(transport, config);
    let categories = load_tree(&api).await?;

    let handle = mount_to(parent.clone(), move || {
        view! { <CategoriesView categories=categories api=api /> }.into_any()
    });
    let element = parent
        .last_element_child()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    log::info!("[PAGE] activated");
    Ok(CategoriesPage { handle, element })
}

#[component]
fn CategoriesView(categories: Vec<Category>, api: CategoryApi) -> impl IntoView {
    let store = Store::new(PageState::new(categories));
    let notifications = NotificationHub::new();
    let coordinator = ReorderCoordinator::new(api, Rc::new(notifications));
    provide_context(PageContext::new(store, notifications, coordinator));

    view! {
        <div class="categories" on:click=on_header_click(store)>
            <div class="content__top-panel">
                <h1 class="page-title">"Product categories"</h1>
            </div>
            <p>"Subcategories can be dragged to change their order within their category."</p>
            <CategoryTree />
            <NotificationToast hub=notifications />
        </div>
    }
}
