//! Light/dark theme preference and its controller.

use serde::{Deserialize, Serialize};

use crate::surface::{PreferenceStore, Surface};

/// Display theme. Dark is the page default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value written to the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `light` reads as the default.
    pub fn from_stored(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of the body `data-theme` attribute; dark mode removes it.
    pub fn body_attribute(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light"),
        }
    }

    /// Toggle label: the icon of the theme a click switches to.
    pub fn indicator_label(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    /// `aria-pressed` state of the toggle; pressed means light mode.
    pub fn indicator_pressed(&self) -> bool {
        matches!(self, Theme::Light)
    }
}

/// Owns the current theme and keeps page and store in sync with it.
#[derive(Debug, Clone)]
pub struct ThemeController {
    theme: Theme,
    key: String,
}

impl ThemeController {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            theme: Theme::default(),
            key: key.into(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted preference once at startup and apply it.
    pub fn load(&mut self, store: &impl PreferenceStore, surface: &mut impl Surface) -> Theme {
        self.theme = match store.load(&self.key) {
            Ok(Some(saved)) => Theme::from_stored(&saved),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("{e}; using default theme");
                Theme::default()
            }
        };
        self.apply(surface);
        self.theme
    }

    /// Flip the theme, apply it and persist it. Store failures are logged only.
    pub fn toggle(
        &mut self,
        store: &mut impl PreferenceStore,
        surface: &mut impl Surface,
    ) -> Theme {
        self.theme = self.theme.toggled();
        self.apply(surface);
        if let Err(e) = store.save(&self.key, self.theme.as_str()) {
            tracing::warn!("{e}; theme change will not survive a reload");
        }
        self.theme
    }

    /// React to a system colour-scheme change.
    ///
    /// Applies only while nothing is saved; an explicit choice always wins.
    /// Returns whether the theme was applied.
    pub fn follow_system(
        &mut self,
        prefers_dark: bool,
        store: &impl PreferenceStore,
        surface: &mut impl Surface,
    ) -> bool {
        match store.load(&self.key) {
            Ok(None) => {
                self.theme = Theme::from_prefers_dark(prefers_dark);
                self.apply(surface);
                true
            }
            Ok(Some(_)) => false,
            Err(e) => {
                tracing::warn!("{e}; ignoring system theme change");
                false
            }
        }
    }

    fn apply(&self, surface: &mut impl Surface) {
        if !surface.apply_theme(self.theme) {
            tracing::debug!("theme toggle missing; applied {} to page only", self.theme.as_str());
        }
    }
}
