//! Category + search filtering over the catalog items.
//!
//! Visibility is always recomputed from scratch for every item: an item is
//! shown iff it matches both the active category and the search term. Nothing
//! else feeds into it, so the result does not depend on the order in which
//! category clicks and keystrokes arrive.

use crate::item::{ALL_CATEGORIES, Item};
use crate::surface::{Role, Surface};

/// The pair (active category, search term) driving visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub active_category: String,
    /// Stored lowercased
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn matches(&self, item: &Item) -> bool {
        item.matches_category(&self.active_category) && item.matches_term(&self.search_term)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Owns the items and the filter state; pushes visibility to the surface.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    state: FilterState,
    items: Vec<Item>,
    visible_count: usize,
}

impl CatalogFilter {
    pub fn new(items: Vec<Item>) -> Self {
        let visible_count = items.len();
        Self {
            state: FilterState::default(),
            items,
            visible_count,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Select a category pill. Re-selecting the active one still recomputes.
    pub fn filter_by_category(&mut self, category: &str, surface: &mut impl Surface) -> usize {
        self.state.active_category = category.to_string();
        surface.mark_active_category(category);
        self.recompute(surface)
    }

    /// Search input changed.
    pub fn search(&mut self, term: &str, surface: &mut impl Surface) -> usize {
        self.state.search_term = term.to_lowercase();
        self.recompute(surface)
    }

    /// Clear the search field and go back to all categories.
    pub fn reset(&mut self, surface: &mut impl Surface) -> usize {
        self.state.search_term.clear();
        if !surface.set_search_text("") {
            tracing::debug!("no search input to clear");
        }
        self.filter_by_category(ALL_CATEGORIES, surface)
    }

    /// Re-evaluate every item against the current state.
    pub fn recompute(&mut self, surface: &mut impl Surface) -> usize {
        let mut visible_count = 0;
        for (index, item) in self.items.iter_mut().enumerate() {
            item.visible = self.state.matches(item);
            if item.visible {
                visible_count += 1;
            }
            surface.set_item_shown(index, item.visible);
        }
        self.visible_count = visible_count;
        update_empty_state(visible_count, surface);
        visible_count
    }
}

fn update_empty_state(visible_count: usize, surface: &mut impl Surface) {
    let empty = visible_count == 0;
    surface.set_shown(Role::Listing, !empty);
    surface.set_shown(Role::EmptyState, empty);
}
