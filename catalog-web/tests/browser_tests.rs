#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use catalog_core::{CatalogKind, ItemId, ItemSummary};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew::Renderer;

use catalog_web::app::App;
use catalog_web::components::item_card::{self, ItemCard};
use catalog_web::components::modal::{self, Modal};
use catalog_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
async fn app_renders_shell_with_main_landmark() {
    catalog_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    yew::platform::time::sleep(std::time::Duration::from_millis(50)).await;

    let doc = dom::document().expect("document");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert!(doc.get_element_by_id("lang-select").is_some());
}

#[wasm_bindgen_test]
async fn language_select_switches_bundle() {
    catalog_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    yew::platform::time::sleep(std::time::Duration::from_millis(50)).await;

    catalog_web::i18n::set_lang("ru");
    assert_eq!(catalog_web::i18n::current_lang(), "ru");
    let stored = dom::local_storage()
        .expect("storage")
        .get_item("catalog.locale")
        .expect("read locale");
    assert_eq!(stored.as_deref(), Some("ru"));
    catalog_web::i18n::set_lang("en");

    let skip = dom::document()
        .expect("document")
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists")
        .dyn_into::<HtmlElement>()
        .expect("skip link is an element");
    assert!(!skip.inner_text().is_empty());
}

fn fresh_root(id: &str) -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

fn click(root: &web_sys::Element, selector: &str) {
    root.query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} rendered"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

async fn settle() {
    yew::platform::time::sleep(std::time::Duration::from_millis(50)).await;
}

#[wasm_bindgen_test]
async fn card_body_and_details_button_each_open_once() {
    catalog_web::i18n::set_lang("en");
    let opened = Rc::new(Cell::new(0_u32));
    let on_open = {
        let opened = opened.clone();
        Callback::from(move |id: ItemId| {
            assert_eq!(id, ItemId::from(7));
            opened.set(opened.get() + 1);
        })
    };
    let props = item_card::Props {
        kind: CatalogKind::Movies,
        item: ItemSummary {
            id: ItemId::from(7),
            title: "X".into(),
            image: "/static/images/7.jpg".into(),
            creator: None,
            genres: vec!["drama".into()],
            rating: None,
            description: None,
            reviews: Vec::new(),
        },
        on_open,
    };
    let root = fresh_root("card-root");
    Renderer::<ItemCard>::with_root_and_props(root.clone(), props).render();
    settle().await;

    click(&root, ".show-more-btn");
    assert_eq!(opened.get(), 1);
    click(&root, ".item-card");
    assert_eq!(opened.get(), 2);
    click(&root, ".item-title");
    assert_eq!(opened.get(), 3);
}

#[wasm_bindgen_test]
async fn modal_closes_on_backdrop_but_not_on_content() {
    catalog_web::i18n::set_lang("en");
    let closed = Rc::new(Cell::new(0_u32));
    let on_close = {
        let closed = closed.clone();
        Callback::from(move |()| closed.set(closed.get() + 1))
    };
    let props = modal::Props {
        open: true,
        id: "movieModal".into(),
        title: "X".into(),
        on_close,
        busy: false,
        return_focus_id: None,
        children: Children::new(vec![html! { <p class="inside">{"body"}</p> }]),
    };
    let root = fresh_root("modal-root");
    Renderer::<Modal>::with_root_and_props(root.clone(), props).render();
    settle().await;

    click(&root, ".modal-content");
    click(&root, ".inside");
    assert_eq!(closed.get(), 0);
    click(&root, ".modal");
    assert_eq!(closed.get(), 1);
    click(&root, ".close-btn");
    assert_eq!(closed.get(), 2);
}

#[wasm_bindgen_test]
fn console_logging_installs_once_and_accepts_core_records() {
    catalog_web::init_logging();
    catalog_web::init_logging();
    assert!(log::max_level() >= log::LevelFilter::Info);
    log::error!("core records reach the console");
}
