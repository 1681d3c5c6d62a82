//! Edit events
//!
//! Every change to a document is expressed as one of these values and
//! applied through `Document::execute`.

use crate::model::Position;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete buffer mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// Insert a char at a position
    Insert(char, Position),
    /// Backspace-style delete of the char before a position
    Delete(Position),
    /// Open an empty row at the position's row
    InsertLineAbove(Position),
    /// Open an empty row after the position's row
    InsertLineBelow(Position),
    /// Break the cursor row in two at the cursor column
    SplitLine,
    /// Join the cursor row onto the end of the row above
    SpliceUp,
    /// Remove a row, then move the cursor
    DeleteLine(Position, Direction),
    /// Move the cursor one step
    MoveTo(Direction),
}

impl EditEvent {
    /// Whether applying this event records an inverse for undo
    pub fn is_commitable(&self) -> bool {
        !matches!(self, EditEvent::MoveTo(_) | EditEvent::DeleteLine(..))
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            EditEvent::Insert(..) => "Insert",
            EditEvent::Delete(_) => "Delete",
            EditEvent::InsertLineAbove(_) => "InsertLineAbove",
            EditEvent::InsertLineBelow(_) => "InsertLineBelow",
            EditEvent::SplitLine => "SplitLine",
            EditEvent::SpliceUp => "SpliceUp",
            EditEvent::DeleteLine(..) => "DeleteLine",
            EditEvent::MoveTo(_) => "MoveTo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitable_variants() {
        let pos = Position::new(0, 0);
        assert!(EditEvent::Insert('a', pos).is_commitable());
        assert!(EditEvent::Delete(pos).is_commitable());
        assert!(EditEvent::InsertLineAbove(pos).is_commitable());
        assert!(EditEvent::InsertLineBelow(pos).is_commitable());
        assert!(EditEvent::SplitLine.is_commitable());
        assert!(EditEvent::SpliceUp.is_commitable());
        assert!(!EditEvent::DeleteLine(pos, Direction::Up).is_commitable());
        assert!(!EditEvent::MoveTo(Direction::Left).is_commitable());
    }
}
