//! ax - a small terminal text editor
//!
//! Keystrokes are decoded from a raw-mode TTY, translated into edit events
//! applied to an event-sourced document, and rendered back with regex-driven
//! syntax highlighting.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod model;
pub mod syntax;
pub mod terminal;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::{Direction, EditEvent};
pub use model::{AppModel, Document};
pub use theme::Theme;
