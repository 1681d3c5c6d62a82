//! Scroll state of the text area

use super::Position;

/// The window of rows/columns currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Number of columns that fit in the viewport
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }

    pub fn resize(&mut self, visible_lines: usize, visible_columns: usize) {
        self.visible_lines = visible_lines;
        self.visible_columns = visible_columns;
    }

    /// Scroll the minimum amount needed to bring `cursor` on screen
    pub fn scroll_to(&mut self, cursor: Position) {
        if cursor.y < self.top_line {
            self.top_line = cursor.y;
        } else if self.visible_lines > 0 && cursor.y >= self.top_line + self.visible_lines {
            self.top_line = cursor.y + 1 - self.visible_lines;
        }

        if cursor.x < self.left_column {
            self.left_column = cursor.x;
        } else if self.visible_columns > 0 && cursor.x >= self.left_column + self.visible_columns
        {
            self.left_column = cursor.x + 1 - self.visible_columns;
        }
    }

    /// Screen cell (column, line) of a document position inside the text area
    pub fn to_screen(&self, pos: Position) -> Option<(usize, usize)> {
        let col = pos.x.checked_sub(self.left_column)?;
        let line = pos.y.checked_sub(self.top_line)?;
        (line < self.visible_lines && col <= self.visible_columns).then_some((col, line))
    }
}
