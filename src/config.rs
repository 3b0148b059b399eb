// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Settings management for Sage
//!
//! Handles loading settings from `<config_dir>/sage/config.toml`. A missing
//! file yields defaults; CLI flags override loaded values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_ENDPOINT: &str = "http://localhost:5000/chat";
const DEFAULT_TITLE: &str = "sage";

/// Application settings, stored in `<config_dir>/sage/config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Chat endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whether AI replies are rendered as markdown
    #[serde(default = "default_markdown")]
    pub markdown: bool,

    /// Title shown in the widget's title bar
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_markdown() -> bool {
    true
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            markdown: default_markdown(),
            title: default_title(),
        }
    }
}

impl Settings {
    /// Load settings from the default config path, falling back to defaults
    /// when no config file exists.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sage").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, "http://localhost:5000/chat");
        assert!(settings.markdown);
        assert_eq!(settings.title, "sage");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint = \"http://example.com/chat\"\nmarkdown = false"
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.endpoint, "http://example.com/chat");
        assert!(!settings.markdown);
        // Missing fields fall back to their defaults
        assert_eq!(settings.title, "sage");
    }

    #[test]
    fn test_load_from_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.endpoint, "http://localhost:5000/chat");
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = [not valid").unwrap();

        let result = Settings::load_from(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Settings::load_from(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }
}
