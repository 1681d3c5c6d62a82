//! Command-line argument parsing for the editor

use clap::Parser;
use std::path::PathBuf;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "ax", version, about = "A small terminal text editor")]
pub struct CliArgs {
    /// File to open (created on first save if it does not exist)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Theme id, overriding the config file (e.g. vscode-dark, ax-dark)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// File to edit; `None` starts an untitled buffer
    pub path: Option<PathBuf>,
    pub theme: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(path) = &self.path {
            if path.is_dir() {
                return Err(format!("{} is a directory", path.display()));
            }
        }

        Ok(StartupConfig {
            path: self.path,
            theme: self.theme.filter(|id| !id.trim().is_empty()),
        })
    }
}
