//! Browser tests: `wasm-pack test --headless --firefox catalog_web`

#![cfg(target_arch = "wasm32")]

use catalog_core::memory::MemoryStore;
use catalog_core::{CatalogConfig, CatalogPage, KeyPress, PreferenceStore, ReadyState, Theme};
use catalog_web::{DomSurface, LocalStore};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<button class="theme-toggle"></button>
<input id="searchInput" />
<div class="filter-pill" data-category="all"></div>
<div class="filter-pill" data-category="tools"></div>
<main id="main-content">
  <div class="tool-card" data-category="tools" data-keywords="pdf merge">
    PDF Merger <button class="tool-btn" data-url="https://one.example">Open</button>
  </div>
  <div class="tool-card" data-category="docs" data-keywords="pdf" data-url="https://ignored.example">
    Handbook
  </div>
  <div class="tool-card" data-category="tools">
    Color Picker <button class="tool-btn" data-url="https://two.example">Open</button>
  </div>
</main>
<div id="emptyState"></div>
<div id="helpModal"></div>
"#;

const MOUNTED_FIXTURE: &str = r#"
<button class="theme-toggle"></button>
<button class="help-btn">?</button>
<input id="searchInput" />
<div class="filter-pill" data-category="all"></div>
<div class="filter-pill" data-category="docs"></div>
<main id="main-content">
  <div class="tool-card" data-category="tools" data-keywords="pdf merge">PDF Merger</div>
  <div class="tool-card" data-category="docs" data-keywords="pdf">Handbook</div>
  <div class="tool-card" data-category="media">Audio Trimmer</div>
</main>
<div id="emptyState"></div>
<div id="helpModal"><p class="help-content">Shortcuts</p></div>
"#;

fn document_with(markup: &str) -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(markup);
    document
}

fn document() -> Document {
    document_with(FIXTURE)
}

fn html(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

/// Dispatch a cancelable keydown on the document; returns `defaultPrevented`.
fn press(document: &Document, key: &str, ctrl: bool) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn call_global(name: &str, args: &[JsValue]) {
    let window = web_sys::window().unwrap();
    let function: Function = Reflect::get(&window, &JsValue::from_str(name))
        .unwrap()
        .dyn_into()
        .unwrap();
    match args {
        [] => function.call0(&JsValue::NULL).unwrap(),
        [arg] => function.call1(&JsValue::NULL, arg).unwrap(),
        _ => unreachable!(),
    };
}

fn display_of(document: &Document, selector: &str) -> String {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn page(document: &Document) -> CatalogPage<DomSurface, MemoryStore> {
    let config = CatalogConfig::default();
    let window = web_sys::window().unwrap();
    let surface = DomSurface::attach(window, document, &config.selectors);
    let items = surface.scan_items(&config.selectors.item_action);
    CatalogPage::new(config, items, surface, MemoryStore::new())
}

#[wasm_bindgen_test]
fn scans_cards_from_markup() {
    let document = document();
    let page = page(&document);
    let items = page.filter().items();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].category, "tools");
    assert_eq!(items[0].link.as_deref(), Some("https://one.example"));
    assert_eq!(items[1].link, None, "card data-url is not an action control");
    assert!(items[2].keywords.is_empty());
}

#[wasm_bindgen_test]
fn filtering_updates_card_display() {
    let document = document();
    let mut page = page(&document);

    page.filter_by_category("tools");
    assert_eq!(page.search_input("pdf"), 1);
    assert_eq!(display_of(&document, "[data-keywords='pdf merge']"), "flex");
    assert_eq!(display_of(&document, "[data-category='docs']"), "none");

    page.search_input("nothing");
    assert_eq!(display_of(&document, "#main-content"), "none");
    assert_eq!(display_of(&document, "#emptyState"), "block");

    page.handle_key(&KeyPress::new("Escape"));
    assert_eq!(display_of(&document, "#main-content"), "grid");
    let pill = document.query_selector(".filter-pill[data-category='all']").unwrap().unwrap();
    assert!(pill.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn theme_toggle_updates_body_and_indicator() {
    let document = document();
    let mut page = page(&document);
    page.init(ReadyState::Complete);

    page.toggle_theme();
    let body = document.body().unwrap();
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("light"));
    let toggle = document.query_selector(".theme-toggle").unwrap().unwrap();
    assert_eq!(toggle.get_attribute("aria-pressed").as_deref(), Some("true"));
    assert_eq!(page.store().get("theme"), Some("light"));

    page.toggle_theme();
    assert_eq!(page.theme(), Theme::Dark);
    assert_eq!(body.get_attribute("data-theme"), None);
}

#[wasm_bindgen_test]
fn help_overlay_uses_show_class() {
    let document = document();
    let mut page = page(&document);
    page.handle_key(&KeyPress::new("?"));
    let modal = document.get_element_by_id("helpModal").unwrap();
    assert!(modal.class_list().contains("show"));
    page.handle_key(&KeyPress::new("Escape"));
    assert!(!modal.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn local_store_round_trip() {
    let mut store = LocalStore;
    store.save("catalog-test-key", "light").unwrap();
    assert_eq!(store.load("catalog-test-key").unwrap().as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn actions_cover_every_control_in_document_order() {
    let document = document_with(
        r#"
        <div class="tool-card" data-category="tools">
          A <button class="tool-btn" data-url="https://a.example">Open</button>
            <button class="tool-btn" data-url="https://a.example/docs">Docs</button>
        </div>
        <div class="tool-card" data-category="docs" data-url="https://card.example">B</div>
        <aside><button class="tool-btn" data-url="https://aside.example">Open</button></aside>
        <button class="tool-btn" data-url="">Broken</button>
        "#,
    );
    let config = CatalogConfig::default();
    let actions = DomSurface::scan_actions(&document, &config.selectors.item_action);
    let urls: Vec<_> = actions.iter().filter_map(|a| a.get_attribute("data-url")).collect();
    assert_eq!(
        urls,
        vec!["https://a.example", "https://a.example/docs", "https://aside.example"]
    );

    let window = web_sys::window().unwrap();
    let surface = DomSurface::attach(window, &document, &config.selectors);
    let items = surface.scan_items(&config.selectors.item_action);
    let page = CatalogPage::new(config, items, surface, MemoryStore::new()).with_actions(urls);
    assert_eq!(page.actions().len(), 3);
    assert_eq!(page.filter().items()[0].link.as_deref(), Some("https://a.example"));
}

#[wasm_bindgen_test]
fn pill_highlight_ignores_case() {
    let document = document();
    let mut page = page(&document);
    assert_eq!(page.filter_by_category("Tools"), 2);
    let pill = document.query_selector(".filter-pill[data-category='tools']").unwrap().unwrap();
    assert!(pill.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn mounted_page_wires_listeners() {
    let document = document_with(MOUNTED_FIXTURE);
    catalog_web::mount();
    catalog_web::mount();

    // One `?` toggles once, so listeners were registered a single time.
    let modal = html(&document, "#helpModal");
    assert!(press(&document, "?", false));
    assert!(modal.class_list().contains("show"));

    html(&document, ".help-content").click();
    html(&document, ".help-btn").click();
    assert!(modal.class_list().contains("show"), "content and trigger clicks keep it open");
    modal.click();
    assert!(!modal.class_list().contains("show"), "backdrop click closes it");

    assert!(press(&document, "/", false));
    let input: HtmlInputElement = html(&document, "#searchInput").dyn_into().unwrap();
    assert_eq!(document.active_element().map(JsValue::from), Some(JsValue::from(input.clone())));

    let body = document.body().unwrap();
    let before = body.get_attribute("data-theme");
    assert!(press(&document, "k", true));
    assert_ne!(body.get_attribute("data-theme"), before);
    call_global("toggleTheme", &[]);
    assert_eq!(body.get_attribute("data-theme"), before);

    input.set_value("PDF");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(display_of(&document, "[data-category='media']"), "none");
    assert_eq!(display_of(&document, "[data-category='tools']"), "flex");

    call_global("filterByCategory", &[JsValue::from_str("docs")]);
    assert_eq!(display_of(&document, "[data-category='tools']"), "none");
    assert_eq!(display_of(&document, ".tool-card[data-category='docs']"), "flex");

    assert!(!press(&document, "Escape", false));
    assert_eq!(input.value(), "");
    assert_eq!(display_of(&document, "[data-category='media']"), "flex");
}
