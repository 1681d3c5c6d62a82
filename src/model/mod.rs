//! Application model - the complete state of the editor

pub mod document;
pub mod history;
pub mod position;
pub mod row;
pub mod viewport;

pub use document::{join_rows, parse_rows, Document};
pub use history::{EditHistory, Revision, DEFAULT_UNDO_LIMIT};
pub use position::Position;
pub use row::Row;
pub use viewport::Viewport;

use crate::config::EditorConfig;
use crate::syntax::Highlighter;
use crate::terminal::WindowSize;

/// Rows reserved below the text area (status line + message line)
pub const CHROME_LINES: usize = 2;
/// Blank columns around the line number (one before, two after)
pub const GUTTER_PADDING: usize = 3;

/// Width of the line-number gutter for a document with `line_count` rows
pub fn gutter_width(line_count: usize) -> usize {
    let digits = line_count.max(1).to_string().len();
    digits + GUTTER_PADDING
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub document: Document,
    /// Language tokenizer + theme for the open document
    pub highlighter: Highlighter,
    pub config: EditorConfig,
    pub viewport: Viewport,
    pub window_size: WindowSize,
    /// One-line feedback shown under the status bar
    pub message: Option<String>,
}

impl AppModel {
    pub fn new(
        document: Document,
        highlighter: Highlighter,
        config: EditorConfig,
        window_size: WindowSize,
    ) -> Self {
        let mut model = Self {
            document,
            highlighter,
            config,
            viewport: Viewport::new(0, 0),
            window_size,
            message: None,
        };
        model.ensure_cursor_visible();
        model
    }

    pub fn set_window_size(&mut self, size: WindowSize) {
        tracing::debug!("window resized to {}", size);
        self.window_size = size;
        self.ensure_cursor_visible();
    }

    /// Columns taken by the gutter at the current line count
    pub fn gutter_width(&self) -> usize {
        gutter_width(self.document.line_count())
    }

    /// Re-fit the viewport to the window and scroll the cursor into view
    pub fn ensure_cursor_visible(&mut self) {
        let lines = (self.window_size.rows as usize).saturating_sub(CHROME_LINES);
        let columns = (self.window_size.cols as usize).saturating_sub(self.gutter_width());
        self.viewport.resize(lines, columns);
        self.viewport.scroll_to(self.document.cursor_position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gutter_width() {
        assert_eq!(gutter_width(0), 4);
        assert_eq!(gutter_width(9), 4);
        assert_eq!(gutter_width(10), 5);
        assert_eq!(gutter_width(1234), 7);
    }
}
