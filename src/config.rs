//! User configuration for asciiboard
//!
//! Read once at start-up from `$XDG_CONFIG_HOME/asciiboard/config.json`.
//! Board dimensions are fixed for the rest of the session.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::canvas::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board width in cells
    pub width: i32,
    /// Board height in cells
    pub height: i32,
    /// Wrap colored cells in terminal escape sequences
    pub color: bool,
    /// Shown before reading each command
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            color: true,
            prompt: "Enter a command: ".to_string(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults if the file
    /// is missing or unreadable
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {:?}", path))?;
        config.validated()
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            });
        config_dir.join("asciiboard").join("config.json")
    }

    /// Reject dimensions that cannot hold a single cell or are too large
    pub fn validated(self) -> Result<Self> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "board dimensions must be positive, got {}x{}",
            self.width,
            self.height
        );
        anyhow::ensure!(
            self.width <= MAX_BOARD_SIDE && self.height <= MAX_BOARD_SIDE,
            "board dimensions must be at most {MAX_BOARD_SIDE}, got {}x{}",
            self.width,
            self.height
        );
        Ok(self)
    }
}
