//! Keyboard shortcut table.
//!
//! | Key                  | Action                                    |
//! |----------------------|-------------------------------------------|
//! | Ctrl/Cmd + `k`       | toggle theme                              |
//! | `/`                  | focus the search field                    |
//! | `Escape`             | close help if open, otherwise reset       |
//! | `1`..`N`             | open the N-th linked item                 |
//! | `?`                  | toggle help                               |
//!
//! Resolution is pure; [`crate::CatalogPage::handle_key`] runs the result.

/// The parts of a key event the shortcut table looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key` value (`"k"`, `"/"`, `"Escape"`, ...)
    pub key: String,
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
    FocusSearch,
    /// Close help, or reset filters when help is closed
    Dismiss,
    /// Zero-based slot of a linked item
    OpenItem(usize),
    ToggleHelp,
}

impl Shortcut {
    /// Map a key press to a shortcut. `slots` caps the digit keys.
    pub fn resolve(press: &KeyPress, slots: usize) -> Option<Self> {
        match press.key.as_str() {
            "Escape" => Some(Shortcut::Dismiss),
            "/" if !press.command() => Some(Shortcut::FocusSearch),
            "?" if !press.command() => Some(Shortcut::ToggleHelp),
            key if press.command() && key.eq_ignore_ascii_case("k") => Some(Shortcut::ToggleTheme),
            key => digit_slot(key)
                .filter(|slot| *slot < slots)
                .map(Shortcut::OpenItem),
        }
    }

    /// Whether the browser's default action for the key is suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            Shortcut::ToggleTheme | Shortcut::FocusSearch | Shortcut::ToggleHelp
        )
    }
}

/// `"1"` -> 0, `"9"` -> 8. `"0"` and everything else -> `None`.
fn digit_slot(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || digit == 0 {
        return None;
    }
    Some(digit as usize - 1)
}

/// What handling a key press did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub shortcut: Option<Shortcut>,
    pub prevent_default: bool,
}

impl KeyOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled(shortcut: Shortcut) -> Self {
        Self {
            shortcut: Some(shortcut),
            prevent_default: shortcut.prevents_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(press: KeyPress) -> Option<Shortcut> {
        Shortcut::resolve(&press, 6)
    }

    #[test]
    fn theme_toggle_needs_modifier() {
        assert_eq!(resolve(KeyPress::new("k").with_ctrl()), Some(Shortcut::ToggleTheme));
        assert_eq!(resolve(KeyPress::new("K").with_meta()), Some(Shortcut::ToggleTheme));
        assert_eq!(resolve(KeyPress::new("k")), None);
    }

    #[test]
    fn slash_and_question_mark_without_modifier() {
        assert_eq!(resolve(KeyPress::new("/")), Some(Shortcut::FocusSearch));
        assert_eq!(resolve(KeyPress::new("/").with_ctrl()), None);
        assert_eq!(resolve(KeyPress::new("?")), Some(Shortcut::ToggleHelp));
        assert_eq!(resolve(KeyPress::new("?").with_meta()), None);
    }

    #[test]
    fn escape_always_dismisses() {
        assert_eq!(resolve(KeyPress::new("Escape")), Some(Shortcut::Dismiss));
        assert_eq!(resolve(KeyPress::new("Escape").with_ctrl()), Some(Shortcut::Dismiss));
    }

    #[test]
    fn digits_map_to_slots() {
        assert_eq!(resolve(KeyPress::new("1")), Some(Shortcut::OpenItem(0)));
        assert_eq!(resolve(KeyPress::new("6")), Some(Shortcut::OpenItem(5)));
        assert_eq!(resolve(KeyPress::new("7")), None);
        assert_eq!(resolve(KeyPress::new("0")), None);
        assert_eq!(Shortcut::resolve(&KeyPress::new("9"), 9), Some(Shortcut::OpenItem(8)));
        assert_eq!(Shortcut::resolve(&KeyPress::new("1"), 0), None);
    }

    #[test]
    fn other_keys_pass_through() {
        for key in ["a", "Enter", "F1", "12", "ArrowUp", " ", ""] {
            assert_eq!(resolve(KeyPress::new(key)), None, "{key:?}");
        }
    }

    #[test]
    fn default_suppression() {
        assert!(KeyOutcome::handled(Shortcut::ToggleTheme).prevent_default);
        assert!(KeyOutcome::handled(Shortcut::FocusSearch).prevent_default);
        assert!(KeyOutcome::handled(Shortcut::ToggleHelp).prevent_default);
        assert!(!KeyOutcome::handled(Shortcut::Dismiss).prevent_default);
        assert!(!KeyOutcome::handled(Shortcut::OpenItem(2)).prevent_default);
        assert!(!KeyOutcome::ignored().prevent_default);
    }
}
