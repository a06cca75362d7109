#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use pricing_core::{Catalog, ViewState};
use pricing_web::app::{CatalogPage, LoadState};
use pricing_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::platform::time::sleep;
use yew::prelude::*;
use yew::{AppHandle, Renderer};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    order: AttrValue,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let catalog = use_memo(props.order.clone(), |order| {
        Catalog::from_sources(
            include_str!("../../static/data/cards.json"),
            include_str!("../../static/data/links.json"),
            Some(order.as_str()),
        )
        .expect("fixture catalog")
    });
    let view = use_state(ViewState::default);
    let on_change = {
        let view = view.clone();
        Callback::from(move |next: ViewState| view.set(next))
    };
    html! {
        <CatalogPage
            load={LoadState::Ready(catalog.clone())}
            view={(*view).clone()}
            {on_change}
        />
    }
}

fn ensure_app_root() -> Element {
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

async fn render_page() -> AppHandle<Harness> {
    render_page_with_order(include_str!("../../static/data/order.json")).await
}

async fn render_page_with_order(order: &'static str) -> AppHandle<Harness> {
    let handle = Renderer::<Harness>::with_root_and_props(
        ensure_app_root(),
        HarnessProps {
            order: AttrValue::from(order),
        },
    )
    .render();
    settle().await;
    handle
}

async fn settle() {
    sleep(Duration::ZERO).await;
    sleep(Duration::ZERO).await;
}

fn element(selector: &str) -> HtmlElement {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn modal_hidden() -> bool {
    element("#qr-modal").class_list().contains("hidden")
}

fn body_locked() -> bool {
    dom::document()
        .and_then(|doc| doc.body())
        .is_some_and(|body| body.class_list().contains(dom::NO_SCROLL_CLASS))
}

async fn open_modal() {
    element("#grid button[data-action='qr']:not([disabled])").click();
    settle().await;
    assert!(!modal_hidden(), "QR control opens the modal");
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    dom::document()
        .expect("document")
        .dispatch_event(&event)
        .expect("dispatch");
}

#[wasm_bindgen_test]
async fn qr_control_opens_modal_and_locks_scroll() {
    render_page().await;
    assert!(modal_hidden());
    open_modal().await;
    assert!(body_locked());
    let link = element("#qr-open-link");
    assert_eq!(
        link.get_attribute("href").unwrap_or_default(),
        "https://pay.example.com/legado-anual/avista"
    );
}

#[wasm_bindgen_test]
async fn escape_closes_modal_and_restores_scroll() {
    render_page().await;
    open_modal().await;
    press("Enter");
    settle().await;
    assert!(!modal_hidden(), "other keys keep the modal open");
    press("Escape");
    settle().await;
    assert!(modal_hidden());
    assert!(!body_locked());
}

#[wasm_bindgen_test]
async fn close_button_and_backdrop_close_but_content_does_not() {
    render_page().await;
    open_modal().await;
    element("#qr-modal .modal-content").click();
    settle().await;
    assert!(!modal_hidden(), "content clicks keep the modal open");

    element("#qr-close").click();
    settle().await;
    assert!(modal_hidden());

    open_modal().await;
    element("#qr-modal .modal-backdrop").click();
    settle().await;
    assert!(modal_hidden());
}

#[wasm_bindgen_test]
async fn navigation_closes_modal() {
    render_page().await;
    open_modal().await;
    element("a.nav-link-page[data-page='collapsed']").click();
    settle().await;
    assert!(modal_hidden());
    assert!(element("#page-full").class_list().contains("hidden"));
}

fn qr_src() -> String {
    element("#qr-img").get_attribute("src").unwrap_or_default()
}

#[wasm_bindgen_test]
async fn qr_image_falls_back_once_on_error() {
    render_page().await;
    open_modal().await;
    assert!(qr_src().starts_with(pricing_core::constants::QR_PRIMARY_ENDPOINT));

    let img = element("#qr-img");
    img.dispatch_event(&Event::new("error").expect("event"))
        .expect("dispatch");
    settle().await;
    let fallback = qr_src();
    assert!(
        fallback.starts_with(pricing_core::constants::QR_FALLBACK_ENDPOINT),
        "{fallback}"
    );

    element("#qr-img")
        .dispatch_event(&Event::new("error").expect("event"))
        .expect("dispatch");
    settle().await;
    assert_eq!(qr_src(), fallback, "second error keeps the fallback");
}

fn grid_cards() -> Vec<String> {
    let list = dom::document()
        .expect("document")
        .query_selector_all("#grid > .card")
        .expect("query cards");
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| el.get_attribute("data-card"))
        .collect()
}

#[wasm_bindgen_test]
async fn repeated_ids_survive_category_round_trip() {
    render_page_with_order(r#"{"full":["legado-mensal","alianca-essencial","legado-mensal"]}"#)
        .await;
    assert_eq!(grid_cards(), vec!["legado-mensal", "legado-mensal"]);

    element("a.nav-link-cat[data-cat='alianca']").click();
    settle().await;
    assert_eq!(grid_cards(), vec!["alianca-essencial"]);

    element("a.nav-link-cat[data-cat='legado']").click();
    settle().await;
    assert_eq!(grid_cards(), vec!["legado-mensal", "legado-mensal"]);
}

#[wasm_bindgen_test]
async fn unmounting_open_modal_releases_scroll_lock() {
    let handle = render_page().await;
    open_modal().await;
    assert!(body_locked());
    handle.destroy();
    settle().await;
    assert!(!body_locked());
}
