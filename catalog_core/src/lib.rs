//! # catalog-core
//!
//! Headless logic behind an interactive static catalog page: category pills,
//! live search, light/dark theme, keyboard shortcuts, help overlay,
//! back-to-top control and the initial loading overlay.
//!
//! The logic never touches a document. It drives the page through two small
//! capability traits, [`Surface`] and [`PreferenceStore`], so everything here
//! runs and tests natively. The `catalog-web` crate implements both over the
//! DOM and `localStorage`.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_core::memory::{MemoryStore, MemorySurface};
//! use catalog_core::{CatalogConfig, CatalogPage, Item, KeyPress, ReadyState};
//!
//! let items = vec![
//!     Item::new("tools", "PDF Merger").with_keywords("pdf").with_link("https://example.org"),
//!     Item::new("docs", "User Guide"),
//! ];
//! let surface = MemorySurface::with_items(items.len());
//! let mut page = CatalogPage::new(CatalogConfig::default(), items, surface, MemoryStore::new());
//! page.init(ReadyState::Complete);
//!
//! assert_eq!(page.search_input("pdf"), 1);
//! page.handle_key(&KeyPress::new("Escape"));
//! assert_eq!(page.filter().visible_count(), 2);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod item;
pub mod memory;
pub mod page;
pub mod shortcuts;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use config::{CatalogConfig, Selectors};
pub use error::{ConfigError, StoreError};
pub use filter::{CatalogFilter, FilterState};
pub use item::{ALL_CATEGORIES, Item};
pub use page::{CatalogPage, InitOutcome};
pub use shortcuts::{KeyOutcome, KeyPress, Shortcut};
pub use surface::{PreferenceStore, Role, Surface};
pub use theme::{Theme, ThemeController};
pub use widgets::{BackToTop, ClickTarget, HelpOverlay, LoadingOverlay, ReadyState};
