//! Capability traits between the catalog logic and the page.
//!
//! The controllers never touch a document directly. They address page-level
//! elements by [`Role`], items by index, and persisted values by key. The web
//! crate implements these over the DOM and `localStorage`; [`crate::memory`]
//! implements them in memory for tests and headless use.
//!
//! Methods that target an optional element return `false` when the page has
//! no such element. Callers treat that as a no-op, never as an error.

use std::time::Duration;

use crate::error::StoreError;
use crate::theme::Theme;

/// Page-level elements the logic addresses by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Free-text search field
    SearchInput,
    /// Container holding the item cards
    Listing,
    /// Placeholder shown when no item is visible
    EmptyState,
    /// Keyboard-shortcut help modal
    HelpOverlay,
    /// Floating back-to-top control
    BackToTop,
    /// Full-page overlay shown until the document has loaded
    LoadingOverlay,
    /// Theme indicator button
    ThemeToggle,
}

impl Role {
    pub fn as_label(&self) -> &'static str {
        match self {
            Role::SearchInput => "search-input",
            Role::Listing => "listing",
            Role::EmptyState => "empty-state",
            Role::HelpOverlay => "help-overlay",
            Role::BackToTop => "back-to-top",
            Role::LoadingOverlay => "loading-overlay",
            Role::ThemeToggle => "theme-toggle",
        }
    }
}

/// Presentation capabilities used by the controllers.
pub trait Surface {
    /// Show or hide the element playing `role`.
    fn set_shown(&mut self, role: Role, shown: bool) -> bool;

    /// Show or hide the item card at `index` (document order).
    fn set_item_shown(&mut self, index: usize, shown: bool);

    /// Highlight the category selector for `category`, clearing the others.
    fn mark_active_category(&mut self, category: &str);

    /// Apply `theme` to the page and sync the theme indicator.
    /// Returns `false` when the indicator is missing; the page theme still applies.
    fn apply_theme(&mut self, theme: Theme) -> bool;

    /// Replace the text of the search field.
    fn set_search_text(&mut self, text: &str) -> bool;

    /// Move keyboard focus to the element playing `role`.
    fn focus(&mut self, role: Role) -> bool;

    /// Smooth-scroll the viewport to the top.
    fn scroll_to_top(&mut self);

    /// Start hiding `role` now and drop it from layout after `delay`.
    /// Fire-and-forget: nothing waits for the removal.
    fn fade_out(&mut self, role: Role, delay: Duration) -> bool;

    /// Open an external link in a new browsing context.
    fn open_link(&mut self, url: &str);
}

/// Key-value store holding persisted preferences.
pub trait PreferenceStore {
    /// `Ok(None)` when nothing is saved under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
