//! AppShell
//!
//! Owns the session state (splash visibility and active tab), applies user
//! actions to it and derives the view to mount. Nothing else writes this
//! state; collaborators only see the derived [`ShellView`].

use uuid::Uuid;

use super::action::{ShellAction, ShellEffect};
use super::router::TabRouter;
use super::splash::{SplashGate, SplashOverlay};
use super::tab::Tab;
use super::view::ShellView;
use crate::config::SplashConfig;
use crate::icons::{IconRenderer, NoopIcons};

/// Top-level view controller for one session
pub struct AppShell<I = NoopIcons> {
    session_id: Uuid,
    splash: SplashGate,
    router: TabRouter,
    tagline: String,
    icons: I,
    render_count: u64,
}

impl AppShell<NoopIcons> {
    /// Shell without an icon library, for headless drivers and tests
    pub fn headless(config: &SplashConfig) -> Self {
        Self::new(config, NoopIcons)
    }
}

impl Default for AppShell<NoopIcons> {
    fn default() -> Self {
        Self::headless(&SplashConfig::default())
    }
}

impl<I: IconRenderer> AppShell<I> {
    /// Start a session. The tab router always begins on [`Tab::Home`].
    pub fn new(config: &SplashConfig, icons: I) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!(
            session = %session_id,
            splash = config.enabled,
            "shell session started"
        );

        Self {
            session_id,
            splash: SplashGate::new(config.enabled),
            router: TabRouter::new(),
            tagline: config.tagline.clone(),
            icons,
            render_count: 0,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn splash_visible(&self) -> bool {
        self.splash.is_visible()
    }

    pub fn active_tab(&self) -> Tab {
        self.router.active()
    }

    /// Completed render passes so far
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Hide the landing overlay. Returns `true` if it was showing.
    pub fn dismiss(&mut self) -> bool {
        self.splash.dismiss()
    }

    /// Request a tab by name; unknown names select home.
    /// Returns `true` if the active tab changed.
    pub fn select_tab(&mut self, name: &str) -> bool {
        self.router.select(name)
    }

    /// Apply an action and report what the host must do next.
    pub fn dispatch(&mut self, action: ShellAction) -> Vec<ShellEffect> {
        let _span = tracing::debug_span!("shell", session = %self.session_id).entered();

        let changed = match &action {
            ShellAction::Dismiss => self.dismiss(),
            ShellAction::SelectTab(name) => self.select_tab(name),
        };

        tracing::debug!(
            %action,
            changed,
            splash = self.splash.is_visible(),
            tab = %self.router.active(),
            "action applied"
        );

        if changed {
            vec![ShellEffect::Rerender]
        } else {
            Vec::new()
        }
    }

    /// What should be mounted for the current state.
    ///
    /// The router is not consulted while the overlay is up.
    pub fn view(&self) -> ShellView {
        if self.splash.is_visible() {
            return ShellView::Splash(SplashOverlay::new(self.tagline.clone()));
        }
        self.router.route().into()
    }

    /// One render pass: derive the view, then run the after-render icon scan.
    pub fn render(&mut self) -> ShellView {
        let view = self.view();
        self.after_render();
        view
    }

    /// Completes a render pass. Hosts that mount the view themselves call
    /// this once their output is committed.
    pub fn after_render(&mut self) {
        self.render_count += 1;
        self.icons.render_icons();
    }
}
