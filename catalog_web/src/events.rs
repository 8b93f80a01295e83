//! DOM listener registration.
//!
//! Called once from [`crate::mount`]. Every handler forwards to the page held
//! in the thread-local slot; closures are leaked with `forget` because they
//! live as long as the document.

use catalog_core::{ClickTarget, KeyPress};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, KeyboardEvent, MediaQueryListEvent, Window};

use crate::dom::Bindings;
use crate::storage::describe_js_error;
use crate::with_page;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct Wiring<'a> {
    pub window: &'a Window,
    pub document: &'a Document,
    pub bindings: &'a Bindings,
    /// Dismiss the loading overlay on `load`
    pub wait_for_load: bool,
    /// Click listeners for pills, theme toggle and help trigger
    pub bind_controls: bool,
}

pub fn register(wiring: &Wiring<'_>) {
    let window = wiring.window;
    let document = wiring.document;
    let bindings = wiring.bindings;

    listen(document, "keydown", |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let press = KeyPress {
            key: event.key(),
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
        };
        if with_page(|page| page.handle_key(&press)).is_some_and(|outcome| outcome.prevent_default)
        {
            event.prevent_default();
        }
    });

    if let Some(input) = bindings.search_input.clone() {
        let target = input.clone();
        listen(&target, "input", move |_| {
            let term = input.value();
            with_page(|page| page.search_input(&term));
        });
    }

    let overlay = bindings.help_overlay.clone().map(JsValue::from);
    let trigger = bindings.help_trigger.clone().map(JsValue::from);
    listen(document, "click", move |event| {
        let target = classify_click(&event, overlay.as_ref(), trigger.as_ref());
        if target != ClickTarget::Elsewhere {
            with_page(|page| page.handle_click(target));
        }
    });

    let scroll_window = window.clone();
    listen(window, "scroll", move |_| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        with_page(|page| page.handle_scroll(scroll_y));
    });

    if let Some(button) = &bindings.back_to_top {
        listen(button, "click", |_| {
            with_page(|page| page.back_to_top());
        });
    }

    for (index, action) in bindings.item_actions.iter().enumerate() {
        listen(action, "click", move |_| {
            with_page(|page| page.activate_action(index));
        });
    }

    if wiring.wait_for_load {
        listen(window, "load", |_| {
            with_page(|page| page.document_loaded());
        });
    }

    watch_color_scheme(window);

    if wiring.bind_controls {
        bind_controls(bindings);
    }
}

fn bind_controls(bindings: &Bindings) {
    for pill in &bindings.pills {
        let Some(category) = pill.get_attribute("data-category") else {
            continue;
        };
        listen(pill, "click", move |_| {
            with_page(|page| page.filter_by_category(&category));
        });
    }
    if let Some(toggle) = &bindings.theme_toggle {
        listen(toggle, "click", |_| {
            with_page(|page| page.toggle_theme());
        });
    }
    if let Some(trigger) = &bindings.help_trigger {
        listen(trigger, "click", |_| {
            with_page(|page| page.toggle_help());
        });
    }
}

fn watch_color_scheme(window: &Window) {
    let query = match window.match_media(DARK_SCHEME_QUERY) {
        Ok(Some(query)) => query,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!("matchMedia unavailable: {}", describe_js_error(&e));
            return;
        }
    };
    listen(&query, "change", |event| {
        let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
            return;
        };
        let prefers_dark = event.matches();
        with_page(|page| page.system_theme_changed(prefers_dark));
    });
}

/// The overlay only closes when the click lands on the backdrop itself,
/// never on its content or on the control that opened it.
fn classify_click(
    event: &Event,
    overlay: Option<&JsValue>,
    trigger: Option<&JsValue>,
) -> ClickTarget {
    let Some(target) = event.target().map(JsValue::from) else {
        return ClickTarget::Elsewhere;
    };
    if trigger.is_some_and(|t| *t == target) {
        ClickTarget::HelpTrigger
    } else if overlay.is_some_and(|o| *o == target) {
        ClickTarget::HelpBackdrop
    } else {
        ClickTarget::Elsewhere
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!("could not listen for {event}: {}", describe_js_error(&e));
    }
    closure.forget();
}
