// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Error types for Sage
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Sage operations
#[derive(Error, Debug)]
pub enum SageError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend error: status {0}")]
    Backend(u16),

    /// Terminal UI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// Result type alias for Sage operations
pub type Result<T> = std::result::Result<T, SageError>;

impl From<toml::de::Error> for SageError {
    fn from(err: toml::de::Error) -> Self {
        SageError::Toml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SageError::Config("missing endpoint".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing endpoint"));
    }

    #[test]
    fn test_backend_error_display() {
        let err = SageError::Backend(500);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_tui_error_display() {
        let err = SageError::Tui("raw mode".to_string());
        assert!(err.to_string().contains("TUI error"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SageError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: SageError = toml_err.into();
        assert!(err.to_string().contains("TOML error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn ok_fn() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(ok_fn().unwrap(), 42);
    }
}
