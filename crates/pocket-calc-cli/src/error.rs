//! Error types for the CLI

use pocket_calc::script::ScriptError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Keystroke script error
    #[error("Invalid keys: {0}")]
    Script(#[from] ScriptError),

    /// Terminal setup or restore error
    #[error("Terminal error: {message}")]
    Terminal {
        /// Error message
        message: String,
    },

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a terminal error
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad log file");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad log file"));
    }

    #[test]
    fn test_terminal_error() {
        let err = CliError::terminal("raw mode unavailable");
        assert!(err.to_string().contains("Terminal"));
    }

    #[test]
    fn test_script_error_from() {
        let err: CliError = ScriptError::UnknownKey { key: '^', offset: 3 }.into();
        let message = err.to_string();
        assert!(message.contains("Invalid keys"));
        assert!(message.contains("offset 3"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(cli_err.to_string().contains("JSON"));
    }
}
