//! Shell actions and effects
//!
//! User interactions arrive as [`ShellAction`]s. Applying one yields the
//! effects the host has to carry out, which is only ever a re-render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ShellError;

/// A user interaction the shell reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tab", rename_all = "snake_case")]
pub enum ShellAction {
    /// "Get Started" on the landing overlay
    Dismiss,
    /// Tab request from the navigation surface, unvalidated
    SelectTab(String),
}

/// Work the host must do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    Rerender,
}

impl ShellAction {
    pub fn select(tab: impl Into<String>) -> Self {
        ShellAction::SelectTab(tab.into())
    }
}

impl fmt::Display for ShellAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellAction::Dismiss => f.write_str("dismiss"),
            ShellAction::SelectTab(tab) => write!(f, "tab:{}", tab),
        }
    }
}

/// Parses the scripted form used by the CLI: `dismiss` or `tab:<name>`.
///
/// Keywords are case-insensitive. The tab name is passed through as-is;
/// fallback happens when it is applied.
impl FromStr for ShellAction {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("dismiss") {
            return Ok(ShellAction::Dismiss);
        }
        match s.split_once(':') {
            Some((keyword, name)) if keyword.eq_ignore_ascii_case("tab") => {
                Ok(ShellAction::select(name))
            }
            _ => Err(ShellError::InvalidAction(s.to_string())),
        }
    }
}
