//! Shell error types
//!
//! The state machine itself cannot fail. These errors only surface when a
//! caller asks for strict parsing of tab names or scripted actions.

use thiserror::Error;

/// Errors raised while parsing shell input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Tab name outside the known set
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// Scripted action that is not `dismiss` or `tab:<name>`
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

/// Result type for shell parsing
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::InvalidAction("jump".to_string());
        assert_eq!(err.to_string(), "Invalid action: jump");
    }
}
