//! WASM bindings that bring a static catalog page to life.
//!
//! On start the module reads the optional JSON config from
//! `<script type="application/json" id="catalog-config">`, scans the cards,
//! wires the DOM listeners once and installs `toggleTheme`, `toggleHelp`,
//! `filterByCategory` and `resetFilters` on `window` for inline handlers.
//! All behaviour lives in `catalog-core`; this crate only adapts the DOM.

mod dom;
mod events;
mod logging;
mod storage;

use std::cell::{Cell, RefCell};

use catalog_core::{CatalogConfig, CatalogPage, InitOutcome, ReadyState};
use js_sys::Reflect;
use tracing::level_filters::LevelFilter;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub use dom::{Bindings, DomSurface};
pub use storage::LocalStore;

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "catalog-config";

pub type DomPage = CatalogPage<DomSurface, LocalStore>;

thread_local! {
    static PAGE: RefCell<Option<DomPage>> = const { RefCell::new(None) };
    /// A `DOMContentLoaded` attach is queued.
    static PENDING: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` against the mounted page. `None` before mount, or when an event
/// fires while another handler still holds the page.
pub(crate) fn with_page<R>(f: impl FnOnce(&mut DomPage) -> R) -> Option<R> {
    PAGE.with(|slot| match slot.try_borrow_mut() {
        Ok(mut page) => page.as_mut().map(f),
        Err(_) => {
            tracing::debug!("page busy; dropping re-entrant event");
            None
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    mount();
}

/// Attach to the current document. Safe to call more than once.
///
/// While the document is still parsing, attaching waits for
/// `DOMContentLoaded` so the scan sees the whole page.
#[wasm_bindgen]
pub fn mount() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if is_mounted() || PENDING.with(Cell::get) {
        tracing::debug!("catalog already mounted");
        return;
    }

    if attach_now(&document.ready_state()) {
        attach(&window, &document);
        return;
    }

    PENDING.with(|pending| pending.set(true));
    let listener_document = document.clone();
    let closure = Closure::once(Box::new(move || {
        PENDING.with(|pending| pending.set(false));
        if !is_mounted() {
            attach(&window, &listener_document);
        }
    }) as Box<dyn FnOnce()>);
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
    {
        PENDING.with(|pending| pending.set(false));
        tracing::warn!(
            "could not wait for DOMContentLoaded: {}",
            storage::describe_js_error(&e)
        );
        return;
    }
    closure.forget();
}

/// Cards are only all present once parsing finishes.
fn attach_now(ready_state: &str) -> bool {
    ReadyState::parse(ready_state) != ReadyState::Loading
}

fn is_mounted() -> bool {
    PAGE.with(|slot| slot.try_borrow().map_or(true, |page| page.is_some()))
}

/// Scan the parsed document, build the page and wire its listeners.
fn attach(window: &web_sys::Window, document: &web_sys::Document) {
    let config = load_config(document);
    let surface = DomSurface::attach(window.clone(), document, &config.selectors);
    let items = surface.scan_items(&config.selectors.item_action);
    let actions = DomSurface::scan_actions(document, &config.selectors.item_action);
    let links = actions
        .iter()
        .filter_map(|action| action.get_attribute("data-url"))
        .collect();
    let bindings = surface.bindings(actions);
    let bind_controls = config.bind_controls;

    let mut page = CatalogPage::new(config, items, surface, LocalStore).with_actions(links);
    let ready = ReadyState::parse(&document.ready_state());
    let InitOutcome::Ready { wait_for_load } = page.init(ready) else {
        return;
    };
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));

    events::register(&events::Wiring {
        window,
        document,
        bindings: &bindings,
        wait_for_load,
        bind_controls,
    });
    install_globals(window);
}

/// Read the page config and start logging at its level.
fn load_config(document: &web_sys::Document) -> CatalogConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|raw| !raw.trim().is_empty());
    let parsed = raw.as_deref().map(CatalogConfig::from_json);

    let level = match &parsed {
        Some(Ok(config)) => config.level_filter().unwrap_or(LevelFilter::INFO),
        _ => LevelFilter::INFO,
    };
    logging::init(level);

    match parsed {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!("{e}; falling back to defaults");
            CatalogConfig::default()
        }
        None => CatalogConfig::default(),
    }
}

/// Module export for bundled callers; inline markup uses `window.toggleTheme`.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    with_page(|page| page.toggle_theme());
}

/// Module export for bundled callers; inline markup uses `window.toggleHelp`.
#[wasm_bindgen(js_name = toggleHelp)]
pub fn toggle_help() {
    with_page(|page| page.toggle_help());
}

/// Module export for bundled callers; inline markup uses `window.filterByCategory`.
#[wasm_bindgen(js_name = filterByCategory)]
pub fn filter_by_category(category: &str) {
    with_page(|page| page.filter_by_category(category));
}

/// Module export for bundled callers; inline markup uses `window.resetFilters`.
#[wasm_bindgen(js_name = resetFilters)]
pub fn reset_filters() {
    with_page(|page| page.reset_filters());
}

/// Expose the page operations as window globals for inline `onclick` markup.
fn install_globals(window: &web_sys::Window) {
    let globals: [(&str, JsValue); 4] = [
        ("toggleTheme", no_arg(toggle_theme)),
        ("toggleHelp", no_arg(toggle_help)),
        ("resetFilters", no_arg(reset_filters)),
        ("filterByCategory", {
            let closure = Closure::wrap(Box::new(|category: JsValue| {
                let category = category.as_string().unwrap_or_default();
                filter_by_category(&category);
            }) as Box<dyn Fn(JsValue)>);
            closure.into_js_value()
        }),
    ];

    for (name, function) in globals {
        if Reflect::set(window, &JsValue::from_str(name), &function).is_err() {
            tracing::warn!("could not install window.{name}");
        }
    }
}

fn no_arg(f: fn()) -> JsValue {
    Closure::wrap(Box::new(f) as Box<dyn Fn()>).into_js_value()
}
