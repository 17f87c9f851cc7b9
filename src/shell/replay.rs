//! Scripted replay
//!
//! Drives a fresh headless session through a list of scripted actions and
//! records what would be mounted after each one.

use serde::Serialize;

use super::action::ShellAction;
use super::app::AppShell;
use super::error::ShellResult;
use super::view::ShellView;
use crate::config::SplashConfig;

/// Label of the step recorded before any action is applied
pub const INITIAL_STEP: &str = "initial";

/// State of the session after one scripted action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub action: String,
    pub result: ShellView,
    /// Completed render passes so far; only grows when the action changed state
    pub renders: u64,
}

/// Replay `actions` (`dismiss` or `tab:<name>`) against a new session.
///
/// The first step is the initial render. All actions are parsed before any
/// is applied, so a malformed script leaves nothing half-run.
pub fn replay<S: AsRef<str>>(
    config: &SplashConfig,
    actions: &[S],
) -> ShellResult<Vec<ReplayStep>> {
    let actions = actions
        .iter()
        .map(|a| a.as_ref().parse::<ShellAction>())
        .collect::<ShellResult<Vec<_>>>()?;

    let mut shell = AppShell::headless(config);
    let mut view = shell.render();

    let mut steps = Vec::with_capacity(actions.len() + 1);
    steps.push(ReplayStep {
        action: INITIAL_STEP.to_string(),
        result: view.clone(),
        renders: shell.render_count(),
    });

    for action in actions {
        let label = action.to_string();
        if !shell.dispatch(action).is_empty() {
            view = shell.render();
        }
        steps.push(ReplayStep {
            action: label,
            result: view.clone(),
            renders: shell.render_count(),
        });
    }

    tracing::debug!(renders = shell.render_count(), "replay finished");
    Ok(steps)
}
