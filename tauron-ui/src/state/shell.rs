//! Shell State
//!
//! The `AppShell` is the only owner of splash visibility and the active tab.
//! Components read the derived view through a signal and send requests back
//! through [`ShellState::dispatch`].

use leptos::*;
use tauron::{AppShell, ShellAction, ShellEffect, ShellView, SplashConfig};

use crate::icons::LucideIcons;

/// Shell handle provided to the component tree
#[derive(Clone, Copy)]
pub struct ShellState {
    shell: StoredValue<AppShell<LucideIcons>>,
    /// Current view; only updated when an action changes the state
    pub view: RwSignal<ShellView>,
}

impl ShellState {
    pub fn new(config: &SplashConfig) -> Self {
        let shell = AppShell::new(config, LucideIcons);
        let view = create_rw_signal(shell.view());
        Self {
            shell: store_value(shell),
            view,
        }
    }

    /// Apply an action and push the new view if anything changed
    pub fn dispatch(&self, action: ShellAction) {
        let effects = self
            .shell
            .try_update_value(|shell| shell.dispatch(action))
            .unwrap_or_default();

        if effects.contains(&ShellEffect::Rerender) {
            if let Some(next) = self.shell.try_with_value(|shell| shell.view()) {
                self.view.set(next);
            }
        }
    }

    pub fn dismiss(&self) {
        self.dispatch(ShellAction::Dismiss);
    }

    pub fn select_tab(&self, tab: String) {
        self.dispatch(ShellAction::SelectTab(tab));
    }

    /// Run once the DOM for the current view is committed
    pub fn after_render(&self) {
        self.shell.update_value(|shell| shell.after_render());
    }
}

/// Create the shell for this session and provide it to the component tree
pub fn provide_shell_state(config: &SplashConfig) -> ShellState {
    let state = ShellState::new(config);
    provide_context(state);
    state
}
