//! Editor configuration
//!
//! Stores user preferences in `~/.config/ax-editor/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_UNDO_LIMIT;
use crate::theme::DEFAULT_THEME_ID;

/// Editor configuration read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Selected theme id (e.g. "vscode-dark", "ax-dark")
    pub theme: String,
    /// Spaces inserted by the Tab key
    pub tab_width: usize,
    /// Maximum number of undoable edits kept per document
    pub undo_limit: usize,
    /// How long the main loop waits for input before redrawing
    pub poll_timeout_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            tab_width: 4,
            undo_limit: DEFAULT_UNDO_LIMIT,
            poll_timeout_ms: 16,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; any failure falls back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        // An empty file is an empty mapping, not an error
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}
