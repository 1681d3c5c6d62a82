//! Cursor coordinates

use std::fmt;

/// A (column, row) coordinate in the document.
///
/// `x` counts chars within a row, `y` is the row index. Both are 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Same row, different column
    pub const fn with_x(self, x: usize) -> Self {
        Self { x, y: self.y }
    }

    /// Same column, different row
    pub const fn with_y(self, y: usize) -> Self {
        Self { x: self.x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.y + 1, self.x + 1)
    }
}
