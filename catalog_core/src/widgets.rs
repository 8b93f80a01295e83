//! Help overlay, back-to-top control and loading overlay.
//!
//! Each widget is an independent binary toggle; none depends on another.

use std::time::Duration;

use crate::surface::{Role, Surface};

/// Where a document click landed, as far as the help overlay cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay element itself, outside its content box
    HelpBackdrop,
    /// The control that opens the overlay
    HelpTrigger,
    Elsewhere,
}

#[derive(Debug, Clone, Default)]
pub struct HelpOverlay {
    open: bool,
}

impl HelpOverlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, surface: &mut impl Surface) -> bool {
        if surface.set_shown(Role::HelpOverlay, !self.open) {
            self.open = !self.open;
        }
        self.open
    }

    pub fn close(&mut self, surface: &mut impl Surface) {
        if self.open {
            self.toggle(surface);
        }
    }

    /// Backdrop clicks close an open overlay. Returns whether it closed.
    pub fn on_click(&mut self, target: ClickTarget, surface: &mut impl Surface) -> bool {
        if self.open && target == ClickTarget::HelpBackdrop {
            self.close(surface);
            return true;
        }
        false
    }
}

#[derive(Debug, Clone)]
pub struct BackToTop {
    threshold: f64,
    shown: bool,
}

impl BackToTop {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            shown: false,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Show the control past the threshold, hide it otherwise.
    pub fn on_scroll(&mut self, scroll_y: f64, surface: &mut impl Surface) -> bool {
        let shown = scroll_y > self.threshold;
        if shown != self.shown && surface.set_shown(Role::BackToTop, shown) {
            self.shown = shown;
        }
        self.shown
    }

    pub fn activate(&self, surface: &mut impl Surface) {
        surface.scroll_to_top();
    }
}

/// `document.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "complete" => ReadyState::Complete,
            "interactive" => ReadyState::Interactive,
            _ => ReadyState::Loading,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadingOverlay {
    fade: Duration,
    dismissed: bool,
}

impl LoadingOverlay {
    pub fn new(fade: Duration) -> Self {
        Self {
            fade,
            dismissed: false,
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Hide now, drop from layout after the fade. Repeated calls do nothing.
    pub fn dismiss(&mut self, surface: &mut impl Surface) {
        if self.dismissed {
            return;
        }
        self.dismissed = true;
        if !surface.fade_out(Role::LoadingOverlay, self.fade) {
            tracing::debug!("no loading overlay on this page");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySurface;

    #[test]
    fn help_toggles() {
        let mut help = HelpOverlay::default();
        let mut surface = MemorySurface::default();

        assert!(help.toggle(&mut surface));
        assert_eq!(surface.is_shown(Role::HelpOverlay), Some(true));
        assert!(!help.toggle(&mut surface));
        assert_eq!(surface.is_shown(Role::HelpOverlay), Some(false));
    }

    #[test]
    fn help_missing_stays_closed() {
        let mut help = HelpOverlay::default();
        let mut surface = MemorySurface::default().without(Role::HelpOverlay);
        assert!(!help.toggle(&mut surface));
        assert!(!help.is_open());
    }

    #[test]
    fn only_backdrop_clicks_close_help() {
        let mut help = HelpOverlay::default();
        let mut surface = MemorySurface::default();

        assert!(!help.on_click(ClickTarget::HelpBackdrop, &mut surface), "closed already");
        help.toggle(&mut surface);
        assert!(!help.on_click(ClickTarget::HelpTrigger, &mut surface));
        assert!(!help.on_click(ClickTarget::Elsewhere, &mut surface));
        assert!(help.is_open());
        assert!(help.on_click(ClickTarget::HelpBackdrop, &mut surface));
        assert!(!help.is_open());
    }

    #[test]
    fn back_to_top_threshold() {
        let mut widget = BackToTop::new(300.0);
        let mut surface = MemorySurface::default();

        assert!(!widget.on_scroll(300.0, &mut surface));
        assert_eq!(surface.is_shown(Role::BackToTop), None);
        assert!(widget.on_scroll(301.0, &mut surface));
        assert_eq!(surface.is_shown(Role::BackToTop), Some(true));
        assert!(!widget.on_scroll(0.0, &mut surface));
        assert_eq!(surface.is_shown(Role::BackToTop), Some(false));
    }

    #[test]
    fn back_to_top_scrolls() {
        let widget = BackToTop::new(300.0);
        let mut surface = MemorySurface::default();
        widget.activate(&mut surface);
        assert_eq!(surface.scrolled_to_top, 1);
    }

    #[test]
    fn loading_dismiss_once() {
        let mut overlay = LoadingOverlay::new(Duration::from_millis(300));
        let mut surface = MemorySurface::default();

        overlay.dismiss(&mut surface);
        overlay.dismiss(&mut surface);
        assert!(overlay.is_dismissed());
        assert_eq!(
            surface.fades,
            vec![(Role::LoadingOverlay, Duration::from_millis(300))]
        );
    }

    #[test]
    fn ready_state_parse() {
        assert_eq!(ReadyState::parse("complete"), ReadyState::Complete);
        assert_eq!(ReadyState::parse("interactive"), ReadyState::Interactive);
        assert_eq!(ReadyState::parse("loading"), ReadyState::Loading);
    }
}
