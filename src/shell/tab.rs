//! Tab identifiers and panel mapping
//!
//! The closed set of panels the dashboard can show, with the metadata the
//! navigation surface needs to list them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ShellError;

/// A tab selectable from the navigation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Landing page, rendered full-width without the sidebar
    #[default]
    Home,
    /// Morning alert feed
    Feed,
    /// Herd contact map
    Map,
    /// Manual data entry log
    Log,
    /// Sustainability impact summary
    Impact,
    /// Pricing tiers and project info
    About,
}

/// Presentational collaborator mounted for a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    Homepage,
    MorningAlertFeed,
    HerdMap,
    DataEntryLog,
    SustainabilityImpact,
    TierAbout,
}

impl Tab {
    /// All tabs in navigation order
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Feed,
        Tab::Map,
        Tab::Log,
        Tab::Impact,
        Tab::About,
    ];

    /// Resolve a requested tab name, falling back to [`Tab::Home`].
    ///
    /// Navigation requests are never rejected: anything outside the six
    /// known identifiers lands on the home panel.
    pub fn resolve(name: &str) -> Tab {
        name.parse().unwrap_or(Tab::Home)
    }

    /// Wire identifier, as used by navigation callbacks
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Feed => "feed",
            Tab::Map => "map",
            Tab::Log => "log",
            Tab::Impact => "impact",
            Tab::About => "about",
        }
    }

    /// Human-readable navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Feed => "Morning Alerts",
            Tab::Map => "Herd Map",
            Tab::Log => "Data Entry",
            Tab::Impact => "Impact",
            Tab::About => "About",
        }
    }

    /// Lucide icon name for the navigation entry
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Feed => "bell",
            Tab::Map => "map",
            Tab::Log => "clipboard-list",
            Tab::Impact => "leaf",
            Tab::About => "info",
        }
    }

    /// The single panel mounted for this tab
    pub fn panel(&self) -> Panel {
        match self {
            Tab::Home => Panel::Homepage,
            Tab::Feed => Panel::MorningAlertFeed,
            Tab::Map => Panel::HerdMap,
            Tab::Log => Panel::DataEntryLog,
            Tab::Impact => Panel::SustainabilityImpact,
            Tab::About => Panel::TierAbout,
        }
    }

    /// Whether the panel is wrapped in the sidebar layout
    pub fn is_framed(&self) -> bool {
        !matches!(self, Tab::Home)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Tab::Home),
            "feed" => Ok(Tab::Feed),
            "map" => Ok(Tab::Map),
            "log" => Ok(Tab::Log),
            "impact" => Ok(Tab::Impact),
            "about" => Ok(Tab::About),
            other => Err(ShellError::UnknownTab(other.to_string())),
        }
    }
}

impl Panel {
    /// Component name of the collaborator
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Homepage => "Homepage",
            Panel::MorningAlertFeed => "MorningAlertFeed",
            Panel::HerdMap => "HerdMap",
            Panel::DataEntryLog => "DataEntryLog",
            Panel::SustainabilityImpact => "SustainabilityImpact",
            Panel::TierAbout => "TierAbout",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_identifiers() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "unknown-xyz".parse::<Tab>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown tab: unknown-xyz");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Map".parse::<Tab>().is_err());
        assert_eq!(Tab::resolve("Map"), Tab::Home);
    }

    #[test]
    fn test_resolve_falls_back_to_home() {
        assert_eq!(Tab::resolve("map"), Tab::Map);
        assert_eq!(Tab::resolve(""), Tab::Home);
        assert_eq!(Tab::resolve("settings"), Tab::Home);
    }

    #[test]
    fn test_panels_are_distinct() {
        let panels: std::collections::HashSet<Panel> =
            Tab::ALL.iter().map(|t| t.panel()).collect();
        assert_eq!(panels.len(), Tab::ALL.len());
    }

    #[test]
    fn test_only_home_is_unframed() {
        for tab in Tab::ALL {
            assert_eq!(tab.is_framed(), tab != Tab::Home);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_identifiers() {
        let json = serde_json::to_string(&Tab::Impact).unwrap();
        assert_eq!(json, "\"impact\"");
        let tab: Tab = serde_json::from_str("\"about\"").unwrap();
        assert_eq!(tab, Tab::About);
    }
}
