//! Tab Router
//!
//! Holds the active tab and derives which panel to mount and whether the
//! sidebar layout frames it.

use super::tab::{Panel, Tab};

/// Where the active panel is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Panel fills the page, no layout chrome
    FullWidth { panel: Panel },
    /// Panel sits inside the sidebar layout
    Framed { current_tab: Tab, panel: Panel },
}

impl Route {
    pub fn panel(&self) -> Panel {
        match self {
            Route::FullWidth { panel } | Route::Framed { panel, .. } => *panel,
        }
    }

    pub fn is_framed(&self) -> bool {
        matches!(self, Route::Framed { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabRouter {
    active: Tab,
}

impl TabRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Select a tab by name. Unknown names select [`Tab::Home`].
    ///
    /// Returns `true` if the active tab changed.
    pub fn select(&mut self, name: &str) -> bool {
        let tab = Tab::resolve(name);
        if tab == Tab::Home && name != Tab::Home.as_str() {
            tracing::debug!(requested = name, "unknown tab, falling back to home");
        }
        self.select_tab(tab)
    }

    /// Select an already-typed tab. Returns `true` if it changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    pub fn route(&self) -> Route {
        let panel = self.active.panel();
        if self.active.is_framed() {
            Route::Framed {
                current_tab: self.active,
                panel,
            }
        } else {
            Route::FullWidth { panel }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let router = TabRouter::new();
        assert_eq!(router.active(), Tab::Home);
        assert_eq!(
            router.route(),
            Route::FullWidth {
                panel: Panel::Homepage
            }
        );
    }

    #[test]
    fn test_every_tab_routes_to_its_panel() {
        let mut router = TabRouter::new();
        for tab in Tab::ALL {
            router.select(tab.as_str());
            let route = router.route();
            assert_eq!(route.panel(), tab.panel());
            assert_eq!(route.is_framed(), tab != Tab::Home);
        }
    }

    #[test]
    fn test_framed_route_carries_current_tab() {
        let mut router = TabRouter::new();
        router.select("map");
        assert_eq!(
            router.route(),
            Route::Framed {
                current_tab: Tab::Map,
                panel: Panel::HerdMap
            }
        );
    }

    #[test]
    fn test_unknown_name_equals_home() {
        let mut a = TabRouter::new();
        let mut b = TabRouter::new();
        a.select("log");
        b.select("log");
        a.select("unknown-xyz");
        b.select("home");
        assert_eq!(a, b);
        assert_eq!(a.route(), b.route());
    }

    #[test]
    fn test_select_reports_change() {
        let mut router = TabRouter::new();
        assert!(!router.select("home"));
        assert!(router.select("feed"));
        assert!(!router.select("feed"));
        assert!(router.select("nope"));
        assert_eq!(router.active(), Tab::Home);
    }
}
