//! Splash Gate
//!
//! One-way gate in front of the dashboard. Starts visible (unless configured
//! off) and can only ever be dismissed.

use serde::Serialize;

/// Label of the single dismiss action on the overlay
pub const DISMISS_LABEL: &str = "GET STARTED";

/// Default tagline under the logo
pub const DEFAULT_TAGLINE: &str = "Early warning for herd health, before symptoms show.";

/// Visibility state of the landing overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashGate {
    visible: bool,
}

impl SplashGate {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the overlay for the rest of the session.
    ///
    /// Returns `true` only on the call that actually hid it.
    pub fn dismiss(&mut self) -> bool {
        let changed = self.visible;
        self.visible = false;
        changed
    }
}

impl Default for SplashGate {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Content of the full-screen landing overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplashOverlay {
    pub tagline: String,
    pub action_label: &'static str,
}

impl SplashOverlay {
    pub fn new(tagline: impl Into<String>) -> Self {
        Self {
            tagline: tagline.into(),
            action_label: DISMISS_LABEL,
        }
    }
}
