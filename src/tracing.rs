//! Logging setup and state-transition diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug` - only document state diffs
//! - `RUST_LOG=ax::input=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/ax-editor/logs/ax.log` with daily rotation.
//! There is no console output: the editor owns the terminal while running.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Document;

/// Initialize the file logging subscriber.
///
/// Returns an error message if the log directory cannot be created; the
/// editor then runs without logs.
pub fn init() -> Result<(), String> {
    let logs_dir = crate::config_paths::ensure_logs_dir()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(logs_dir, "ax.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}

/// Lightweight snapshot of document state for diffing around an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub line: usize,
    pub column: usize,
    pub line_count: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub modified: bool,
}

impl DocumentSnapshot {
    pub fn from_document(document: &Document) -> Self {
        let cursor = document.cursor_position();
        Self {
            line: cursor.y,
            column: cursor.x,
            line_count: document.line_count(),
            undo_depth: document.undo_count(),
            redo_depth: document.redo_count(),
            modified: document.is_modified,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DocumentSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.line != other.line || self.column != other.column {
            changes.push(format!(
                "cursor ({},{}) → ({},{})",
                self.line, self.column, other.line, other.column
            ));
        }
        if self.line_count != other.line_count {
            changes.push(format!("lines {} → {}", self.line_count, other.line_count));
        }
        if self.undo_depth != other.undo_depth || self.redo_depth != other.redo_depth {
            changes.push(format!(
                "history {}/{} → {}/{}",
                self.undo_depth, self.redo_depth, other.undo_depth, other.redo_depth
            ));
        }
        if self.modified != other.modified {
            changes.push(format!("modified {}", other.modified));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::EditEvent;
    use crate::model::Position;

    #[test]
    fn test_snapshot_diff() {
        let mut document = Document::with_text("ab");
        let before = DocumentSnapshot::from_document(&document);
        assert_eq!(before.diff(&before), None);

        document.execute(EditEvent::Insert('x', Position::new(0, 0)));
        let after = DocumentSnapshot::from_document(&document);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("cursor (0,0) → (0,1)"), "{}", diff);
        assert!(diff.contains("history 0/0 → 1/0"), "{}", diff);
        assert!(diff.contains("modified true"), "{}", diff);
    }
}
