//! Render output of the shell
//!
//! A [`ShellView`] names the one subtree the host has to mount. Hosts match
//! on it to pick components; headless drivers serialize it.

use serde::Serialize;
use std::fmt;

use super::router::Route;
use super::splash::SplashOverlay;
use super::tab::{Panel, Tab};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ShellView {
    /// Landing overlay only; nothing else is mounted
    Splash(SplashOverlay),
    /// Panel rendered without the sidebar layout
    FullWidth { panel: Panel },
    /// Sidebar layout wrapping a single panel
    Framed { current_tab: Tab, panel: Panel },
}

impl ShellView {
    pub fn is_splash(&self) -> bool {
        matches!(self, ShellView::Splash(_))
    }

    /// Mounted panel, `None` while the overlay is up
    pub fn panel(&self) -> Option<Panel> {
        match self {
            ShellView::Splash(_) => None,
            ShellView::FullWidth { panel } | ShellView::Framed { panel, .. } => Some(*panel),
        }
    }

    pub fn has_layout(&self) -> bool {
        matches!(self, ShellView::Framed { .. })
    }
}

impl From<Route> for ShellView {
    fn from(route: Route) -> Self {
        match route {
            Route::FullWidth { panel } => ShellView::FullWidth { panel },
            Route::Framed { current_tab, panel } => ShellView::Framed { current_tab, panel },
        }
    }
}

/// Indented tree form, as printed by `tauron replay`
impl fmt::Display for ShellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellView::Splash(overlay) => {
                writeln!(f, "SplashOverlay")?;
                writeln!(f, "  tagline: {}", overlay.tagline)?;
                write!(f, "  action: [{}]", overlay.action_label)
            }
            ShellView::FullWidth { panel } => write!(f, "{} (full-width)", panel),
            ShellView::Framed { current_tab, panel } => {
                writeln!(f, "Layout (current_tab: {})", current_tab)?;
                write!(f, "  {}", panel)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_has_no_panel() {
        let view = ShellView::Splash(SplashOverlay::new("tagline"));
        assert!(view.is_splash());
        assert_eq!(view.panel(), None);
        assert!(!view.has_layout());
    }

    #[test]
    fn test_from_route() {
        let view = ShellView::from(Route::Framed {
            current_tab: Tab::Log,
            panel: Panel::DataEntryLog,
        });
        assert!(view.has_layout());
        assert_eq!(view.panel(), Some(Panel::DataEntryLog));
    }

    #[test]
    fn test_serialize_framed() {
        let view = ShellView::Framed {
            current_tab: Tab::Map,
            panel: Panel::HerdMap,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "framed");
        assert_eq!(json["current_tab"], "map");
        assert_eq!(json["panel"], "HerdMap");
    }

    #[test]
    fn test_serialize_splash() {
        let json = serde_json::to_string(&ShellView::Splash(SplashOverlay::new("hi"))).unwrap();
        assert!(json.contains("\"view\":\"splash\""));
        assert!(json.contains("\"action_label\":\"GET STARTED\""));
    }

    #[test]
    fn test_display_tree() {
        let view = ShellView::Framed {
            current_tab: Tab::Map,
            panel: Panel::HerdMap,
        };
        assert_eq!(view.to_string(), "Layout (current_tab: map)\n  HerdMap");
        let view = ShellView::FullWidth {
            panel: Panel::Homepage,
        };
        assert_eq!(view.to_string(), "Homepage (full-width)");
    }
}
