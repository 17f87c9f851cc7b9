//! State Management
//!
//! Reactive wrapper around the shell state machine.

pub mod shell;

pub use shell::{provide_shell_state, ShellState};
