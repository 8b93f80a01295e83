//! The catalog page: one owner for every controller and the event entry points.

use crate::config::CatalogConfig;
use crate::filter::CatalogFilter;
use crate::item::Item;
use crate::shortcuts::{KeyOutcome, KeyPress, Shortcut};
use crate::surface::{PreferenceStore, Role, Surface};
use crate::theme::{Theme, ThemeController};
use crate::widgets::{BackToTop, ClickTarget, HelpOverlay, LoadingOverlay, ReadyState};

/// Result of [`CatalogPage::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// First call; the caller should register its listeners.
    /// `wait_for_load` asks for a load listener to dismiss the loading overlay.
    Ready { wait_for_load: bool },
    /// `init` already ran; nothing to register.
    AlreadyInitialized,
}

pub struct CatalogPage<S, P> {
    config: CatalogConfig,
    surface: S,
    store: P,
    theme: ThemeController,
    filter: CatalogFilter,
    /// Action control links in document order; digit shortcuts index this.
    actions: Vec<String>,
    help: HelpOverlay,
    back_to_top: BackToTop,
    loading: LoadingOverlay,
    initialized: bool,
}

impl<S: Surface, P: PreferenceStore> CatalogPage<S, P> {
    /// Action links default to each linked item's link, in item order.
    pub fn new(config: CatalogConfig, items: Vec<Item>, surface: S, store: P) -> Self {
        let actions = items
            .iter()
            .filter(|item| item.has_link())
            .filter_map(|item| item.link.clone())
            .collect();
        Self {
            theme: ThemeController::new(config.theme_key.clone()),
            actions,
            filter: CatalogFilter::new(items),
            help: HelpOverlay::default(),
            back_to_top: BackToTop::new(config.back_to_top_threshold),
            loading: LoadingOverlay::new(config.loading_fade()),
            config,
            surface,
            store,
            initialized: false,
        }
    }

    /// One-time startup: apply the saved theme and dismiss the loading overlay
    /// if the document is already complete. Later calls are no-ops.
    pub fn init(&mut self, ready: ReadyState) -> InitOutcome {
        if self.initialized {
            tracing::debug!("catalog page already initialized");
            return InitOutcome::AlreadyInitialized;
        }
        self.initialized = true;

        let theme = self.theme.load(&self.store, &mut self.surface);
        tracing::info!(
            items = self.filter.items().len(),
            theme = theme.as_str(),
            "catalog page ready"
        );

        let wait_for_load = ready != ReadyState::Complete;
        if !wait_for_load {
            self.loading.dismiss(&mut self.surface);
        }
        InitOutcome::Ready { wait_for_load }
    }

    /// Replace the action links with the page's own list of action controls.
    /// Empty links are dropped.
    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.actions = actions.into_iter().filter(|url| !url.is_empty()).collect();
        self
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn help_open(&self) -> bool {
        self.help.is_open()
    }

    pub fn back_to_top_shown(&self) -> bool {
        self.back_to_top.is_shown()
    }

    pub fn loading_dismissed(&self) -> bool {
        self.loading.is_dismissed()
    }

    // === Theme ===

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle(&mut self.store, &mut self.surface)
    }

    /// System colour-scheme signal changed.
    pub fn system_theme_changed(&mut self, prefers_dark: bool) -> bool {
        self.theme
            .follow_system(prefers_dark, &self.store, &mut self.surface)
    }

    // === Filter ===

    pub fn filter_by_category(&mut self, category: &str) -> usize {
        self.filter.filter_by_category(category, &mut self.surface)
    }

    pub fn search_input(&mut self, term: &str) -> usize {
        self.filter.search(term, &mut self.surface)
    }

    pub fn reset_filters(&mut self) -> usize {
        self.filter.reset(&mut self.surface)
    }

    // === Widgets ===

    pub fn toggle_help(&mut self) -> bool {
        self.help.toggle(&mut self.surface)
    }

    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        self.help.on_click(target, &mut self.surface)
    }

    pub fn handle_scroll(&mut self, scroll_y: f64) -> bool {
        self.back_to_top.on_scroll(scroll_y, &mut self.surface)
    }

    pub fn back_to_top(&mut self) {
        self.back_to_top.activate(&mut self.surface);
    }

    /// Document `load` event.
    pub fn document_loaded(&mut self) {
        self.loading.dismiss(&mut self.surface);
    }

    /// Action control `index` clicked, or digit shortcut `index + 1`.
    /// Out-of-range indexes do nothing.
    pub fn activate_action(&mut self, index: usize) -> bool {
        let Some(link) = self.actions.get(index).cloned() else {
            tracing::debug!(index, "no action control at index");
            return false;
        };
        self.surface.open_link(&link);
        true
    }

    // === Shortcuts ===

    pub fn handle_key(&mut self, press: &KeyPress) -> KeyOutcome {
        let Some(shortcut) = Shortcut::resolve(press, self.config.shortcut_slots) else {
            return KeyOutcome::ignored();
        };

        match shortcut {
            Shortcut::ToggleTheme => {
                self.toggle_theme();
            }
            Shortcut::FocusSearch => {
                if !self.surface.focus(Role::SearchInput) {
                    tracing::debug!("no search input to focus");
                }
            }
            Shortcut::Dismiss => {
                if self.help.is_open() {
                    self.help.close(&mut self.surface);
                } else {
                    self.reset_filters();
                }
            }
            Shortcut::OpenItem(slot) => {
                self.activate_action(slot);
            }
            Shortcut::ToggleHelp => {
                self.toggle_help();
            }
        }
        KeyOutcome::handled(shortcut)
    }
}
