//! Document editing tests - insert, delete, line operations, file I/O

mod common;

use ax::model::{Document, Position, Row};
use ax::{Direction, EditEvent};
use common::{move_cursor_to, row_texts};

#[test]
fn test_typing_advances_cursor() {
    let mut doc = Document::default();
    for (i, ch) in "hi!".chars().enumerate() {
        doc.execute(EditEvent::Insert(ch, Position::new(i, 0)));
    }
    assert_eq!(row_texts(&doc), vec!["hi!"]);
    assert_eq!(doc.cursor_position(), Position::new(3, 0));
    assert!(doc.is_modified);
}

#[test]
fn test_insert_in_middle_of_row() {
    let mut doc = Document::with_text("held");
    doc.execute(EditEvent::Insert('l', Position::new(2, 0)));
    assert_eq!(row_texts(&doc), vec!["helld"]);
    assert_eq!(doc.cursor_position(), Position::new(3, 0));
}

#[test]
fn test_insert_multibyte_chars() {
    let mut doc = Document::with_text("cafe");
    doc.execute(EditEvent::Delete(Position::new(4, 0)));
    doc.execute(EditEvent::Insert('é', Position::new(3, 0)));
    doc.execute(EditEvent::Insert('☕', Position::new(4, 0)));
    assert_eq!(row_texts(&doc), vec!["café☕"]);
    assert_eq!(doc.row(0).map(Row::len), Some(5));
    assert_eq!(doc.cursor_position(), Position::new(5, 0));
}

#[test]
fn test_delete_removes_char_before_position() {
    let mut doc = Document::with_text("abc");
    doc.execute(EditEvent::Delete(Position::new(2, 0)));
    assert_eq!(row_texts(&doc), vec!["ac"]);
    assert_eq!(doc.cursor_position(), Position::new(1, 0));
}

#[test]
fn test_delete_out_of_range_is_noop() {
    let mut doc = Document::with_text("abc");
    doc.execute(EditEvent::Delete(Position::new(9, 0)));
    doc.execute(EditEvent::Delete(Position::new(1, 4)));
    assert_eq!(row_texts(&doc), vec!["abc"]);
    assert!(!doc.is_modified);
}

#[test]
fn test_split_then_splice_reconstructs_row() {
    let mut doc = Document::with_text("hello world");
    move_cursor_to(&mut doc, 0, 5);

    doc.execute(EditEvent::SplitLine);
    assert_eq!(row_texts(&doc), vec!["hello", " world"]);
    assert_eq!(doc.cursor_position(), Position::new(0, 1));

    doc.execute(EditEvent::SpliceUp);
    assert_eq!(row_texts(&doc), vec!["hello world"]);
    assert_eq!(doc.cursor_position(), Position::new(5, 0));
}

#[test]
fn test_split_at_row_edges() {
    let mut doc = Document::with_text("ab");
    doc.execute(EditEvent::SplitLine);
    assert_eq!(row_texts(&doc), vec!["", "ab"]);

    let mut doc = Document::with_text("ab");
    move_cursor_to(&mut doc, 0, 2);
    doc.execute(EditEvent::SplitLine);
    assert_eq!(row_texts(&doc), vec!["ab", ""]);
}

#[test]
fn test_split_on_empty_document_is_noop() {
    let mut doc = Document::default();
    doc.execute(EditEvent::SplitLine);
    assert_eq!(doc.line_count(), 0);
    assert!(!doc.can_undo());
}

#[test]
fn test_splice_up_on_first_row_is_noop() {
    let mut doc = Document::with_text("one\ntwo");
    doc.execute(EditEvent::SpliceUp);
    assert_eq!(row_texts(&doc), vec!["one", "two"]);
    assert!(!doc.can_undo());
}

#[test]
fn test_insert_line_above_pushes_row_down() {
    let mut doc = Document::with_text("first\nsecond");
    move_cursor_to(&mut doc, 1, 0);
    doc.execute(EditEvent::InsertLineAbove(Position::new(0, 1)));
    assert_eq!(row_texts(&doc), vec!["first", "", "second"]);
    assert_eq!(doc.cursor_position(), Position::new(0, 2));
}

#[test]
fn test_insert_line_below_snaps_to_column_zero() {
    let mut doc = Document::with_text("first\nsecond");
    move_cursor_to(&mut doc, 0, 5);
    doc.execute(EditEvent::InsertLineBelow(Position::new(5, 0)));
    assert_eq!(row_texts(&doc), vec!["first", "", "second"]);
    assert_eq!(doc.cursor_position(), Position::new(0, 1));
}

#[test]
fn test_insert_line_below_past_end_is_noop() {
    let mut doc = Document::with_text("only");
    doc.execute(EditEvent::InsertLineBelow(Position::new(0, 3)));
    assert_eq!(row_texts(&doc), vec!["only"]);
}

#[test]
fn test_delete_line_never_removes_first_row() {
    let mut doc = Document::with_text("keep\nother");
    doc.execute(EditEvent::DeleteLine(Position::new(0, 0), Direction::Up));
    assert_eq!(row_texts(&doc), vec!["keep", "other"]);
    assert_eq!(doc.cursor_position(), Position::new(4, 0));
}

#[test]
fn test_move_at_edges_is_noop() {
    let mut doc = Document::with_text("ab\ncd");
    doc.execute(EditEvent::MoveTo(Direction::Left));
    doc.execute(EditEvent::MoveTo(Direction::Up));
    assert_eq!(doc.cursor_position(), Position::new(0, 0));

    move_cursor_to(&mut doc, 1, 2);
    doc.execute(EditEvent::MoveTo(Direction::Right));
    doc.execute(EditEvent::MoveTo(Direction::Down));
    assert_eq!(doc.cursor_position(), Position::new(2, 1));
    assert!(!doc.is_modified);
}

#[test]
fn test_moves_on_empty_document() {
    let mut doc = Document::default();
    for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        doc.execute(EditEvent::MoveTo(direction));
    }
    assert_eq!(doc.cursor_position(), Position::new(0, 0));
}

#[test]
fn test_row_access() {
    let doc = Document::with_text("a\nb");
    assert_eq!(doc.row(1).map(Row::text), Some("b"));
    assert_eq!(doc.row(2), None);
    assert_eq!(doc.row_at(Position::new(7, 0)).map(Row::text), Some("a"));
    assert_eq!(doc.row_at(Position::new(0, 5)), None);
}

#[test]
fn test_open_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.swift");
    std::fs::write(&path, "let a = 1\n\nprint(a)\n").unwrap();

    let mut doc = Document::open(path.clone()).unwrap();
    assert_eq!(row_texts(&doc), vec!["let a = 1", "", "print(a)"]);
    assert!(!doc.shows_welcome());

    doc.execute(EditEvent::Insert('!', Position::new(0, 0)));
    doc.save_to(&path).unwrap();
    assert!(!doc.is_modified);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "!let a = 1\n\nprint(a)\n"
    );

    let reopened = Document::open(path).unwrap();
    assert_eq!(row_texts(&reopened), row_texts(&doc));
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.rs");
    let doc = Document::open(path.clone()).unwrap();
    assert_eq!(doc.line_count(), 0);
    assert!(doc.shows_welcome());
    assert_eq!(doc.file_path, Some(path));
}

#[test]
fn test_open_empty_file_has_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();
    let doc = Document::open(path).unwrap();
    assert_eq!(doc.line_count(), 0);
}

#[test]
fn test_open_invalid_utf8_is_lossy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bytes.txt");
    std::fs::write(&path, b"ok\xff\n").unwrap();
    let doc = Document::open(path).unwrap();
    assert_eq!(row_texts(&doc), vec!["ok\u{FFFD}"]);
}
