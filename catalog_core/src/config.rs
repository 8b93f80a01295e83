//! Configuration for the catalog page.
//!
//! Every field has a default matching the stock catalog markup, so an empty
//! object (or no config at all) yields a working setup. Pages can override
//! values with a JSON blob; see [`CatalogConfig::from_json`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;

/// Digit shortcuts are single keys, so at most `1`..`9`.
pub const MAX_SHORTCUT_SLOTS: usize = 9;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Key under which the theme preference is persisted
    pub theme_key: String,
    /// Scroll offset past which the back-to-top control appears
    pub back_to_top_threshold: f64,
    /// Delay between hiding the loading overlay and removing it from layout
    pub loading_fade_ms: u64,
    /// How many digit keys (`1`..) open linked items
    pub shortcut_slots: usize,
    /// Minimum level forwarded to the browser console
    pub log_level: String,
    /// Attach click listeners to pills, theme toggle and help trigger.
    /// Leave off when the markup already calls the global functions inline.
    pub bind_controls: bool,
    pub selectors: Selectors,
}

/// CSS selectors used to locate page elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub card: String,
    pub pill: String,
    /// Action control inside a card; must carry `data-url`
    pub item_action: String,
    pub theme_toggle: String,
    pub help_trigger: String,
    pub search_input: String,
    pub listing: String,
    pub empty_state: String,
    pub help_overlay: String,
    pub back_to_top: String,
    pub loading_overlay: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            theme_key: "theme".to_string(),
            back_to_top_threshold: 300.0,
            loading_fade_ms: 300,
            shortcut_slots: 6,
            log_level: "info".to_string(),
            bind_controls: false,
            selectors: Selectors::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            card: ".tool-card".to_string(),
            pill: ".filter-pill".to_string(),
            item_action: ".tool-btn[data-url]".to_string(),
            theme_toggle: ".theme-toggle".to_string(),
            help_trigger: ".help-btn".to_string(),
            search_input: "#searchInput".to_string(),
            listing: "#main-content".to_string(),
            empty_state: "#emptyState".to_string(),
            help_overlay: "#helpModal".to_string(),
            back_to_top: "#backToTop".to_string(),
            loading_overlay: "#loadingOverlay".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from an optional JSON payload.
    /// Returns default config if the payload is absent or invalid.
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_key must not be empty".into()));
        }
        if self.shortcut_slots > MAX_SHORTCUT_SLOTS {
            return Err(ConfigError::Invalid(format!(
                "shortcut_slots is {}, at most {} digit keys exist",
                self.shortcut_slots, MAX_SHORTCUT_SLOTS
            )));
        }
        if !self.back_to_top_threshold.is_finite() || self.back_to_top_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "back_to_top_threshold must be a non-negative number, got {}",
                self.back_to_top_threshold
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn loading_fade(&self) -> Duration {
        Duration::from_millis(self.loading_fade_ms)
    }

    /// `log_level` as a tracing filter (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level `{}`", self.log_level)))
    }
}
