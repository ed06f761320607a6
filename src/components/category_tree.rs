//! Category Tree Component
//!
//! One collapsible block per category, each holding a sortable list of its
//! subcategories. Blocks and items carry their ids in `data-id` so the visual
//! order can be read back after a drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use leptos_sortable::SortableList;

use crate::context::use_page_context;
use crate::models::{Category, Subcategory};
use crate::store::{store_categories, store_is_expanded, store_toggle_category, PageStore};
use crate::tree::ordered_subcategories;

const HEADER_SELECTOR: &str = ".category__header";
const BLOCK_SELECTOR: &str = ".category";

/// Id of the category whose header contains `target`, if any
pub fn toggled_category_id(target: &Element) -> Option<String> {
    let header = target.closest(HEADER_SELECTOR).ok()??;
    let block = header.closest(BLOCK_SELECTOR).ok()??;
    block.get_attribute("data-id")
}

/// Click handler for the page root. One listener serves every header,
/// however many categories there are.
pub fn on_header_click(store: PageStore) -> impl Fn(MouseEvent) + 'static {
    move |ev: MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(id) = toggled_category_id(&target) {
            let expanded = store_toggle_category(&store, &id);
            log::debug!("[TREE] category {} expanded={}", id, expanded);
        }
    }
}

/// Whole tree, rendered once from the store's loaded categories.
/// Later order changes happen in the DOM, not through a re-render.
#[component]
pub fn CategoryTree() -> impl IntoView {
    let ctx = use_page_context();
    let categories = store_categories(&ctx.store);

    view! {
        <div data-element="categoriesContainer">
            {categories
                .into_iter()
                .map(|category| view! { <CategoryBlock category=category /> })
                .collect_view()}
        </div>
    }
}

/// Single category: header plus sortable subcategory list
#[component]
fn CategoryBlock(category: Category) -> impl IntoView {
    let ctx = use_page_context();
    let id = category.id.clone();

    let is_open = {
        let id = id.clone();
        move || store_is_expanded(&ctx.store, &id)
    };

    let on_reorder = {
        let id = id.clone();
        Callback::new(move |list: HtmlElement| ctx.reorder(list, id.clone()))
    };

    let items = ordered_subcategories(&category)
        .into_iter()
        .cloned()
        .map(|subcategory| view! { <SubcategoryItem subcategory=subcategory /> })
        .collect_view();

    view! {
        <div class="category" class:category_open=is_open data-id=id>
            <header class="category__header">{category.title}</header>
            <div class="category__body">
                <div class="subcategory-list">
                    <SortableList on_reorder=on_reorder>{items}</SortableList>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SubcategoryItem(subcategory: Subcategory) -> impl IntoView {
    view! {
        <li class="categories__sortable-list-item" data-id=subcategory.id data-grab-handle="">
            <strong>{subcategory.title}</strong>
            <span><b>{subcategory.count}</b>" products"</span>
        </li>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn block(id: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let block = document.create_element("div").unwrap();
        block.set_inner_html(
            r#"<header class="category__header"><span>Shoes</span></header>
               <div class="category__body"><ul><li data-id="a">Boots</li></ul></div>"#,
        );
        block.set_class_name("category");
        block.set_attribute("data-id", id).unwrap();
        block
    }

    #[wasm_bindgen_test]
    fn test_header_descendant_names_its_block() {
        let block = block("7");
        let title = block.query_selector(".category__header span").unwrap().unwrap();
        let header = block.query_selector(".category__header").unwrap().unwrap();

        assert_eq!(toggled_category_id(&title), Some("7".to_string()));
        assert_eq!(toggled_category_id(&header), Some("7".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_body_and_outside_clicks_name_nothing() {
        let block = block("7");
        let item = block.query_selector("li").unwrap().unwrap();

        assert_eq!(toggled_category_id(&item), None);
        assert_eq!(toggled_category_id(&block), None);
    }
}
