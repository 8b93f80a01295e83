//! DOM implementation of the catalog [`Surface`].
//!
//! Elements are looked up once at attach time. Anything the page does not
//! contain stays `None` and the matching operations quietly do nothing.

use std::time::Duration;

use catalog_core::{Item, Role, Selectors, Surface, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::storage::describe_js_error;

/// Class toggled on the help overlay while it is open.
const HELP_OPEN_CLASS: &str = "show";
/// Class toggled on the back-to-top control while it is shown.
const BACK_TO_TOP_CLASS: &str = "visible";
/// Class that starts the loading overlay's fade-out transition.
const LOADING_HIDDEN_CLASS: &str = "hidden";
const ACTIVE_PILL_CLASS: &str = "active";

pub struct DomSurface {
    window: Window,
    body: Option<HtmlElement>,
    cards: Vec<HtmlElement>,
    pills: Vec<Element>,
    theme_toggle: Option<Element>,
    help_trigger: Option<Element>,
    search_input: Option<HtmlInputElement>,
    listing: Option<HtmlElement>,
    empty_state: Option<HtmlElement>,
    help_overlay: Option<HtmlElement>,
    back_to_top: Option<HtmlElement>,
    loading_overlay: Option<HtmlElement>,
}

/// Element handles the event wiring needs. Cheap to clone (JS references).
#[derive(Clone, Default)]
pub struct Bindings {
    pub search_input: Option<HtmlInputElement>,
    pub help_overlay: Option<HtmlElement>,
    pub help_trigger: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub back_to_top: Option<HtmlElement>,
    pub pills: Vec<Element>,
    /// Every action control in document order; position is the action index.
    pub item_actions: Vec<Element>,
}

impl DomSurface {
    pub fn attach(window: Window, document: &Document, selectors: &Selectors) -> Self {
        Self {
            body: document.body(),
            cards: query_all(document, &selectors.card)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect(),
            pills: query_all(document, &selectors.pill),
            theme_toggle: query(document, &selectors.theme_toggle),
            help_trigger: query(document, &selectors.help_trigger),
            search_input: query_as(document, &selectors.search_input),
            listing: query_as(document, &selectors.listing),
            empty_state: query_as(document, &selectors.empty_state),
            help_overlay: query_as(document, &selectors.help_overlay),
            back_to_top: query_as(document, &selectors.back_to_top),
            loading_overlay: query_as(document, &selectors.loading_overlay),
            window,
        }
    }

    /// Build the item list from the cards' data attributes and text.
    pub fn scan_items(&self, action_selector: &str) -> Vec<Item> {
        self.cards
            .iter()
            .map(|card| Item {
                category: card.get_attribute("data-category").unwrap_or_default(),
                keywords: card.get_attribute("data-keywords").unwrap_or_default(),
                display_text: card.text_content().unwrap_or_default(),
                link: card
                    .query_selector(action_selector)
                    .ok()
                    .flatten()
                    .and_then(|action| action.get_attribute("data-url")),
                visible: true,
            })
            .collect()
    }

    /// Action controls anywhere in the document, with links that are not empty.
    pub fn scan_actions(document: &Document, action_selector: &str) -> Vec<Element> {
        query_all(document, action_selector)
            .into_iter()
            .filter(|el| el.get_attribute("data-url").is_some_and(|url| !url.is_empty()))
            .collect()
    }

    pub fn bindings(&self, actions: Vec<Element>) -> Bindings {
        Bindings {
            search_input: self.search_input.clone(),
            help_overlay: self.help_overlay.clone(),
            help_trigger: self.help_trigger.clone(),
            theme_toggle: self.theme_toggle.clone(),
            back_to_top: self.back_to_top.clone(),
            pills: self.pills.clone(),
            item_actions: actions,
        }
    }

    fn element(&self, role: Role) -> Option<&HtmlElement> {
        match role {
            Role::SearchInput => self.search_input.as_deref(),
            Role::Listing => self.listing.as_ref(),
            Role::EmptyState => self.empty_state.as_ref(),
            Role::HelpOverlay => self.help_overlay.as_ref(),
            Role::BackToTop => self.back_to_top.as_ref(),
            Role::LoadingOverlay => self.loading_overlay.as_ref(),
            Role::ThemeToggle => self.theme_toggle.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()),
        }
    }
}

impl Surface for DomSurface {
    fn set_shown(&mut self, role: Role, shown: bool) -> bool {
        let Some(el) = self.element(role) else {
            return false;
        };
        match role {
            Role::Listing => set_display(el, if shown { "grid" } else { "none" }),
            Role::EmptyState => set_display(el, if shown { "block" } else { "none" }),
            Role::HelpOverlay => set_class(el, HELP_OPEN_CLASS, shown),
            Role::BackToTop => set_class(el, BACK_TO_TOP_CLASS, shown),
            Role::LoadingOverlay => set_class(el, LOADING_HIDDEN_CLASS, !shown),
            Role::SearchInput | Role::ThemeToggle => {
                set_display(el, if shown { "" } else { "none" })
            }
        }
        true
    }

    fn set_item_shown(&mut self, index: usize, shown: bool) {
        if let Some(card) = self.cards.get(index) {
            set_display(card, if shown { "flex" } else { "none" });
        }
    }

    fn mark_active_category(&mut self, category: &str) {
        for pill in &self.pills {
            let active = pill
                .get_attribute("data-category")
                .is_some_and(|c| same_category(&c, category));
            let _ = pill.class_list().toggle_with_force(ACTIVE_PILL_CLASS, active);
        }
    }

    fn apply_theme(&mut self, theme: Theme) -> bool {
        if let Some(body) = &self.body {
            let _ = match theme.body_attribute() {
                Some(value) => body.set_attribute("data-theme", value),
                None => body.remove_attribute("data-theme"),
            };
        }

        let Some(toggle) = &self.theme_toggle else {
            return false;
        };
        toggle.set_text_content(Some(theme.indicator_label()));
        let pressed = if theme.indicator_pressed() { "true" } else { "false" };
        let _ = toggle.set_attribute("aria-pressed", pressed);
        true
    }

    fn set_search_text(&mut self, text: &str) -> bool {
        let Some(input) = &self.search_input else {
            return false;
        };
        input.set_value(text);
        true
    }

    fn focus(&mut self, role: Role) -> bool {
        let Some(el) = self.element(role) else {
            return false;
        };
        el.focus().is_ok()
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn fade_out(&mut self, role: Role, delay: Duration) -> bool {
        let Some(el) = self.element(role).cloned() else {
            return false;
        };
        self.set_shown(role, false);

        let closure = Closure::once(Box::new(move || {
            set_display(&el, "none");
        }) as Box<dyn FnOnce()>);
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
        {
            tracing::warn!("could not schedule {} removal: {}", role.as_label(), describe_js_error(&e));
        }
        closure.forget();
        true
    }

    fn open_link(&mut self, url: &str) {
        if let Err(e) = self.window.open_with_url_and_target(url, "_blank") {
            tracing::warn!("could not open {url}: {}", describe_js_error(&e));
        }
    }
}

/// Pills compare like [`Item::matches_category`]: ignoring case.
fn same_category(pill: &str, active: &str) -> bool {
    pill.to_lowercase() == active.to_lowercase()
}

fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

fn set_class(el: &HtmlElement, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!("invalid selector `{selector}`: {}", describe_js_error(&e));
            None
        }
    }
}

fn query_as<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    query(document, selector).and_then(|el| el.dyn_into::<T>().ok())
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("invalid selector `{selector}`: {}", describe_js_error(&e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_category_ignores_case() {
        assert!(same_category("tools", "Tools"));
        assert!(same_category("ALL", "all"));
        assert!(!same_category("tools", "docs"));
        assert!(!same_category("tools", ""));
    }
}
