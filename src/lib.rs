//! # Tauron
//!
//! View-routing and session-gating shell for the Tauron livestock-health
//! dashboard.
//!
//! ## Modules
//!
//! - [`shell`]: Splash gate, tab router and the `AppShell` that owns them
//! - [`icons`]: Injectable icon-rendering capability
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup for native hosts
//!
//! The shell is renderer-independent. The browser front end in `tauron-ui`
//! mounts it with Leptos; the `tauron` binary drives it headlessly.

pub mod config;
pub mod icons;
pub mod logging;
pub mod shell;

pub use shell::{
    replay, AppShell, Panel, ReplayStep, Route, ShellAction, ShellEffect, ShellError, ShellResult,
    ShellView, SplashGate, SplashOverlay, Tab, TabRouter,
};

pub use icons::{IconRenderer, NoopIcons};

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig, SplashConfig};
