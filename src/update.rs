//! Key → edit translation for the Elm-style architecture
//!
//! All state transformations flow through [`update`].

use crate::commands::Cmd;
use crate::input::{KeyCode, KeyEvent, KeyModifier};
use crate::messages::{Direction, EditEvent};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::DocumentSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, key: KeyEvent) -> Option<Cmd> {
    if key.is_undefined() {
        tracing::trace!("ignoring undefined key");
        return None;
    }

    #[cfg(debug_assertions)]
    {
        update_traced(model, key)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, key)
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, key: KeyEvent) -> Option<Cmd> {
    let _span = span!(Level::DEBUG, "update", key = %key).entered();
    let before = DocumentSnapshot::from_document(&model.document);

    let result = update_inner(model, key);

    let after = DocumentSnapshot::from_document(&model.document);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "cursor", %diff, "state changed");
    }
    result
}

fn update_inner(model: &mut AppModel, key: KeyEvent) -> Option<Cmd> {
    model.message = None;
    let result = match (key.code, key.modifiers) {
        (KeyCode::Char(c), Some(KeyModifier::Control)) => control_chord(model, c),
        (code, _) => {
            edit_key(model, code);
            None
        }
    };
    model.ensure_cursor_visible();
    result
}

fn control_chord(model: &mut AppModel, c: char) -> Option<Cmd> {
    match c {
        'd' | 'q' => Some(Cmd::Quit),
        'u' => {
            if !model.document.undo() {
                model.message = Some("Nothing to undo".to_string());
            }
            None
        }
        'r' => {
            if !model.document.redo() {
                model.message = Some("Nothing to redo".to_string());
            }
            None
        }
        's' => match &model.document.file_path {
            Some(path) => Some(Cmd::SaveFile { path: path.clone() }),
            None => {
                model.message = Some("No file name: start ax with a path to save".to_string());
                None
            }
        },
        _ => None,
    }
}

fn edit_key(model: &mut AppModel, code: KeyCode) {
    let document = &mut model.document;
    let cursor = document.cursor_position();

    match code {
        KeyCode::Backspace => {
            if cursor.x > 0 {
                document.execute(EditEvent::Delete(cursor));
            } else if cursor.y > 0 {
                document.execute(EditEvent::SpliceUp);
            }
        }
        KeyCode::Enter => {
            let row_len = document.row_at(cursor).map_or(0, |row| row.len());
            let event = if cursor.x == 0 {
                EditEvent::InsertLineAbove(cursor)
            } else if cursor.x >= row_len {
                EditEvent::InsertLineBelow(cursor)
            } else {
                EditEvent::SplitLine
            };
            document.execute(event);
        }
        // One commit per space: each undo removes a single space
        KeyCode::Tab => {
            for _ in 0..model.config.tab_width {
                let at = document.cursor_position();
                document.execute(EditEvent::Insert(' ', at));
            }
        }
        KeyCode::Up => document.execute(EditEvent::MoveTo(Direction::Up)),
        KeyCode::Down => document.execute(EditEvent::MoveTo(Direction::Down)),
        KeyCode::Left => document.execute(EditEvent::MoveTo(Direction::Left)),
        KeyCode::Right => document.execute(EditEvent::MoveTo(Direction::Right)),
        KeyCode::Char(c) => document.execute(EditEvent::Insert(c, cursor)),
        other => tracing::trace!(key = %other, "no binding"),
    }
}
