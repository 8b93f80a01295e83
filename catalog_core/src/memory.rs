//! In-memory [`Surface`] and [`PreferenceStore`] implementations.
//!
//! Used by the test suites and handy for driving the controllers headlessly.
//! Every call is recorded so assertions can inspect what the logic did.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::error::StoreError;
use crate::surface::{PreferenceStore, Role, Surface};
use crate::theme::Theme;

/// Records the presentation state the controllers asked for.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    /// Roles the simulated page does not contain
    pub missing: HashSet<Role>,
    pub shown: HashMap<Role, bool>,
    pub items_shown: Vec<bool>,
    pub active_category: Option<String>,
    pub theme: Option<Theme>,
    /// Indicator label, as the theme toggle would render it
    pub indicator_label: Option<&'static str>,
    pub indicator_pressed: Option<bool>,
    pub search_text: String,
    pub focused: Option<Role>,
    pub scrolled_to_top: usize,
    pub fades: Vec<(Role, Duration)>,
    pub opened: Vec<String>,
}

impl MemorySurface {
    /// A page with `item_count` cards and every optional element present.
    pub fn with_items(item_count: usize) -> Self {
        Self {
            items_shown: vec![true; item_count],
            ..Default::default()
        }
    }

    /// Drop `role` from the simulated page.
    pub fn without(mut self, role: Role) -> Self {
        self.missing.insert(role);
        self
    }

    pub fn is_shown(&self, role: Role) -> Option<bool> {
        self.shown.get(&role).copied()
    }

    pub fn visible_items(&self) -> Vec<usize> {
        self.items_shown
            .iter()
            .enumerate()
            .filter_map(|(i, shown)| shown.then_some(i))
            .collect()
    }

    fn has(&self, role: Role) -> bool {
        !self.missing.contains(&role)
    }
}

impl Surface for MemorySurface {
    fn set_shown(&mut self, role: Role, shown: bool) -> bool {
        if !self.has(role) {
            return false;
        }
        self.shown.insert(role, shown);
        true
    }

    fn set_item_shown(&mut self, index: usize, shown: bool) {
        if let Some(slot) = self.items_shown.get_mut(index) {
            *slot = shown;
        }
    }

    fn mark_active_category(&mut self, category: &str) {
        self.active_category = Some(category.to_string());
    }

    fn apply_theme(&mut self, theme: Theme) -> bool {
        self.theme = Some(theme);
        if !self.has(Role::ThemeToggle) {
            return false;
        }
        self.indicator_label = Some(theme.indicator_label());
        self.indicator_pressed = Some(theme.indicator_pressed());
        true
    }

    fn set_search_text(&mut self, text: &str) -> bool {
        if !self.has(Role::SearchInput) {
            return false;
        }
        self.search_text = text.to_string();
        true
    }

    fn focus(&mut self, role: Role) -> bool {
        if !self.has(role) {
            return false;
        }
        self.focused = Some(role);
        true
    }

    fn scroll_to_top(&mut self) {
        self.scrolled_to_top += 1;
    }

    fn fade_out(&mut self, role: Role, delay: Duration) -> bool {
        if !self.has(role) {
            return false;
        }
        self.shown.insert(role, false);
        self.fades.push((role, delay));
        true
    }

    fn open_link(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

/// HashMap-backed preference store that can simulate an unavailable backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    unavailable: bool,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every read and write fails, like disabled `localStorage`.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// Reads succeed, writes are rejected.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory store disabled".into()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory store disabled".into()));
        }
        if self.read_only {
            return Err(StoreError::Rejected {
                key: key.to_string(),
                reason: "read-only".into(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
