//! Tauron Shell
//!
//! The view-routing and session-gating state machine:
//!
//! - **Splash Gate**: one-way landing overlay in front of everything else
//! - **Tab Router**: active tab and the panel/layout it maps to
//! - **AppShell**: owns both, applies actions, derives the view
//! - **replay**: runs a scripted session headlessly
//!
//! # Example
//!
//! ```rust
//! use tauron::shell::{AppShell, Panel, ShellAction, ShellView, Tab};
//!
//! let mut shell = AppShell::default();
//! assert!(shell.render().is_splash());
//!
//! shell.dispatch(ShellAction::Dismiss);
//! shell.dispatch(ShellAction::select("map"));
//!
//! assert_eq!(
//!     shell.render(),
//!     ShellView::Framed { current_tab: Tab::Map, panel: Panel::HerdMap }
//! );
//! ```

mod action;
mod app;
mod error;
mod replay;
mod router;
pub mod splash;
mod tab;
mod view;

pub use action::{ShellAction, ShellEffect};
pub use app::AppShell;
pub use error::{ShellError, ShellResult};
pub use replay::{replay, ReplayStep, INITIAL_STEP};
pub use router::{Route, TabRouter};
pub use splash::{SplashGate, SplashOverlay};
pub use tab::{Panel, Tab};
pub use view::ShellView;
