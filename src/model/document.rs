//! Document model - the row buffer, cursor and edit history

use std::path::{Path, PathBuf};

use super::history::{EditHistory, Revision};
use super::position::Position;
use super::row::Row;
use crate::messages::{Direction, EditEvent};

/// Document state - the rows, the cursor and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    cursor: Position,
    history: EditHistory,
    /// Set while a document that started out empty has not been edited yet
    shows_welcome: bool,

    /// Path to the file on disk (None for new/untitled buffers)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Incremented on every change to the rows
    pub revision: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    /// Create a document from an initial set of rows
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            shows_welcome: rows.is_empty(),
            rows,
            cursor: Position::default(),
            history: EditHistory::new(),
            file_path: None,
            is_modified: false,
            revision: 0,
        }
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self::new(parse_rows(text))
    }

    /// Cap the number of undoable edits
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.history = EditHistory::with_max_size(limit);
        self
    }

    /// Load a document from a file path.
    ///
    /// A missing file is not an error: the document starts empty and the
    /// file is created on first save.
    pub fn open(path: PathBuf) -> std::io::Result<Self> {
        match std::fs::read(&path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                let mut doc = Self::with_text(&text);
                tracing::info!(
                    "Opened {} ({} rows)",
                    path.display(),
                    doc.line_count()
                );
                doc.file_path = Some(path);
                Ok(doc)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("{} does not exist yet, starting empty", path.display());
                Ok(Self::new_with_path(path))
            }
            Err(e) => Err(e),
        }
    }

    /// Create a new empty document with a target file path
    pub fn new_with_path(path: PathBuf) -> Self {
        let mut doc = Self::default();
        doc.file_path = Some(path);
        doc
    }

    /// Write the rows to `path` and mark the document clean
    pub fn save_to(&mut self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_text())?;
        self.is_modified = false;
        tracing::info!("Saved {} rows to {}", self.line_count(), path.display());
        Ok(())
    }

    /// Serialized file content
    pub fn to_text(&self) -> String {
        join_rows(&self.rows)
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Lowercased file extension, used to pick a language
    pub fn extension(&self) -> Option<String> {
        self.file_path
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
    }

    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row by index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Row under a position
    pub fn row_at(&self, pos: Position) -> Option<&Row> {
        self.rows.get(pos.y)
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    pub fn shows_welcome(&self) -> bool {
        self.shows_welcome
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    /// Apply an event and record its inverse for undo
    pub fn execute(&mut self, event: EditEvent) {
        self.execute_with(event, true);
    }

    /// Apply an event; `commit = false` skips undo bookkeeping (used by
    /// undo/redo replay).
    pub fn execute_with(&mut self, event: EditEvent, commit: bool) {
        let inverse = self.apply(event);

        if let Some(inverse) = inverse {
            if commit && event.is_commitable() {
                self.history.push(Revision::new(event, inverse));
            }
        } else if event.is_commitable() {
            tracing::debug!(event = event.name(), "edit had no effect");
        }

        self.debug_assert_invariants();
    }

    /// Revert the most recent committed edit. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(revision) = self.history.pop_undo() else {
            return false;
        };
        tracing::debug!(event = revision.backward.name(), "undo");
        self.execute_with(revision.backward, false);
        true
    }

    /// Re-apply the most recently undone edit. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(revision) = self.history.pop_redo() else {
            return false;
        };
        tracing::debug!(event = revision.forward.name(), "redo");
        self.execute_with(revision.forward, false);
        true
    }

    /// Apply an event, returning its inverse when it changed the rows
    fn apply(&mut self, event: EditEvent) -> Option<EditEvent> {
        match event {
            EditEvent::Insert(ch, pos) => self.insert(ch, pos),
            EditEvent::Delete(pos) => self.delete(pos),
            EditEvent::InsertLineAbove(pos) => self.insert_line_above(pos),
            EditEvent::InsertLineBelow(pos) => self.insert_line_below(pos),
            EditEvent::SplitLine => self.split_line(),
            EditEvent::SpliceUp => self.splice_up(),
            EditEvent::DeleteLine(pos, direction) => {
                self.delete_line(pos, direction);
                None
            }
            EditEvent::MoveTo(direction) => {
                self.move_cursor(direction);
                None
            }
        }
    }

    fn insert(&mut self, ch: char, pos: Position) -> Option<EditEvent> {
        if self.rows.is_empty() {
            let mut row = Row::default();
            if !row.insert(ch, 0) {
                return None;
            }
            self.rows.push(row);
            self.cursor = Position::new(0, 0);
            self.move_cursor(Direction::Right);
            self.touch();
            return Some(EditEvent::Delete(Position::new(1, 0)));
        }

        if !self.rows.get_mut(pos.y)?.insert(ch, pos.x) {
            return None;
        }
        self.cursor = pos;
        self.move_cursor(Direction::Right);
        self.touch();
        Some(EditEvent::Delete(Position::new(pos.x + 1, pos.y)))
    }

    fn delete(&mut self, pos: Position) -> Option<EditEvent> {
        let index = pos.x.checked_sub(1)?;
        let removed = self.rows.get_mut(pos.y)?.delete(index)?;
        self.cursor = pos;
        self.move_cursor(Direction::Left);
        self.touch();
        Some(EditEvent::Insert(removed, Position::new(index, pos.y)))
    }

    fn insert_line_above(&mut self, pos: Position) -> Option<EditEvent> {
        if pos.y > self.rows.len() {
            return None;
        }
        self.rows.insert(pos.y, Row::default());
        self.move_cursor(Direction::Down);
        self.touch();
        Some(EditEvent::DeleteLine(Position::new(0, pos.y), Direction::Up))
    }

    fn insert_line_below(&mut self, pos: Position) -> Option<EditEvent> {
        if pos.y >= self.rows.len() {
            return None;
        }
        self.rows.insert(pos.y + 1, Row::default());
        self.move_cursor(Direction::Down);
        self.cursor.x = 0;
        self.touch();
        Some(EditEvent::DeleteLine(
            Position::new(0, pos.y + 1),
            Direction::Up,
        ))
    }

    fn split_line(&mut self) -> Option<EditEvent> {
        let Position { x, y } = self.cursor;
        let row = self.rows.get(y)?;
        if x > row.len() {
            return None;
        }
        let left = row.text_up_to(x).to_string();
        let right = Row::new(row.text_from(x));

        self.rows[y].update(left);
        self.rows.insert(y + 1, right);
        self.cursor = Position::new(0, y + 1);
        self.touch();
        Some(EditEvent::SpliceUp)
    }

    fn splice_up(&mut self) -> Option<EditEvent> {
        let y = self.cursor.y;
        if y == 0 || y >= self.rows.len() {
            return None;
        }
        let current = self.rows.remove(y);
        let above = &mut self.rows[y - 1];
        let boundary = above.len();
        above.append(&current);
        self.cursor = Position::new(boundary, y - 1);
        self.touch();
        Some(EditEvent::SplitLine)
    }

    fn delete_line(&mut self, pos: Position, direction: Direction) {
        // Row 0 is never removed
        if pos.y > 0 && pos.y < self.rows.len() {
            self.rows.remove(pos.y);
            self.touch();
        }

        self.move_cursor(direction);
        if let Some(last) = self.rows.len().checked_sub(1) {
            self.cursor.y = self.cursor.y.min(last);
        } else {
            self.cursor.y = 0;
        }
        self.cursor.x = self.rows.get(self.cursor.y).map_or(0, Row::len);
    }

    fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if self.cursor.y == 0 {
                    return;
                }
                self.cursor.y -= 1;
                self.clamp_column();
            }
            Direction::Down => {
                if self.cursor.y + 1 >= self.rows.len() {
                    return;
                }
                self.cursor.y += 1;
                self.clamp_column();
            }
            Direction::Left => {
                if self.cursor.x == 0 {
                    return;
                }
                self.cursor.x -= 1;
            }
            Direction::Right => {
                if self.cursor.x >= self.current_row_len() {
                    return;
                }
                self.cursor.x += 1;
            }
        }
    }

    fn clamp_column(&mut self) {
        self.cursor.x = self.cursor.x.min(self.current_row_len());
    }

    fn current_row_len(&self) -> usize {
        self.rows.get(self.cursor.y).map_or(0, Row::len)
    }

    fn touch(&mut self) {
        self.is_modified = true;
        self.shows_welcome = false;
        self.revision = self.revision.wrapping_add(1);
    }

    fn debug_assert_invariants(&self) {
        if self.rows.is_empty() {
            return;
        }
        debug_assert!(
            self.cursor.y < self.rows.len(),
            "cursor row {} out of bounds ({} rows)",
            self.cursor.y,
            self.rows.len()
        );
        debug_assert!(
            self.cursor.x <= self.current_row_len(),
            "cursor column {} past end of row {}",
            self.cursor.x,
            self.cursor.y
        );
    }
}

/// Split file content into rows.
///
/// An empty string yields no rows; a single trailing newline does not
/// produce a trailing empty row.
pub fn parse_rows(text: &str) -> Vec<Row> {
    text.lines().map(Row::new).collect()
}

/// Inverse of `parse_rows`: rows joined by `\n`, newline-terminated
pub fn join_rows(rows: &[Row]) -> String {
    let mut text = String::new();
    for row in rows {
        text.push_str(row.text());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(doc: &Document) -> Vec<&str> {
        doc.rows().iter().map(Row::text).collect()
    }

    #[test]
    fn test_parse_rows() {
        assert!(parse_rows("").is_empty());
        assert_eq!(parse_rows("a\n").len(), 1);
        assert_eq!(parse_rows("a\n\nb").len(), 3);
        assert_eq!(parse_rows("a\r\nb\r\n")[1].text(), "b");
    }

    #[test]
    fn test_join_rows_round_trip() {
        let rows = parse_rows("fn main() {\n\n}\n");
        assert_eq!(join_rows(&rows), "fn main() {\n\n}\n");
        assert_eq!(join_rows(&[]), "");
    }

    #[test]
    fn test_welcome_until_first_edit() {
        let mut doc = Document::default();
        assert!(doc.shows_welcome());
        doc.execute(EditEvent::Insert('a', Position::new(0, 0)));
        assert!(!doc.shows_welcome());
        assert!(!Document::with_text("x").shows_welcome());
    }

    #[test]
    fn test_insert_into_empty_buffer_appends_row() {
        let mut doc = Document::default();
        doc.execute(EditEvent::Insert('a', Position::new(0, 0)));
        assert_eq!(texts(&doc), vec!["a"]);
        assert_eq!(doc.cursor_position(), Position::new(1, 0));
    }

    #[test]
    fn test_insert_out_of_range_is_noop() {
        let mut doc = Document::with_text("abc");
        doc.execute(EditEvent::Insert('x', Position::new(0, 5)));
        doc.execute(EditEvent::Insert('x', Position::new(9, 0)));
        assert_eq!(texts(&doc), vec!["abc"]);
        assert!(!doc.can_undo());
        assert!(!doc.is_modified);
    }

    #[test]
    fn test_delete_at_column_zero_is_noop() {
        let mut doc = Document::with_text("abc");
        doc.execute(EditEvent::Delete(Position::new(0, 0)));
        assert_eq!(texts(&doc), vec!["abc"]);
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_delete_line_snaps_to_row_end() {
        let mut doc = Document::with_text("first\nsecond\nthird");
        doc.execute(EditEvent::MoveTo(Direction::Down));
        doc.execute(EditEvent::DeleteLine(Position::new(0, 1), Direction::Up));
        assert_eq!(texts(&doc), vec!["first", "third"]);
        assert_eq!(doc.cursor_position(), Position::new(5, 0));
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_delete_line_last_row_keeps_cursor_in_bounds() {
        let mut doc = Document::with_text("a\nbb");
        doc.execute(EditEvent::MoveTo(Direction::Down));
        doc.execute(EditEvent::DeleteLine(Position::new(0, 1), Direction::Down));
        assert_eq!(texts(&doc), vec!["a"]);
        assert_eq!(doc.cursor_position(), Position::new(1, 0));
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut doc = Document::with_text("long line\nab");
        for _ in 0..6 {
            doc.execute(EditEvent::MoveTo(Direction::Right));
        }
        doc.execute(EditEvent::MoveTo(Direction::Down));
        assert_eq!(doc.cursor_position(), Position::new(2, 1));
    }

    #[test]
    fn test_undo_limit() {
        let mut doc = Document::with_text("").with_undo_limit(2);
        for (i, ch) in "abcd".chars().enumerate() {
            doc.execute(EditEvent::Insert(ch, Position::new(i, 0)));
        }
        assert_eq!(doc.undo_count(), 2);
    }

    #[test]
    fn test_display_name_and_extension() {
        let doc = Document::new_with_path(PathBuf::from("/tmp/Main.RS"));
        assert_eq!(doc.display_name(), "Main.RS");
        assert_eq!(doc.extension().as_deref(), Some("rs"));
        assert_eq!(Document::default().display_name(), "Untitled");
    }
}
