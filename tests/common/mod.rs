//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use ax::config::EditorConfig;
use ax::input::{KeyCode, KeyEvent, KeyModifier};
use ax::model::{AppModel, Document, Position};
use ax::syntax::{Category, Definition, Highlighter, Language};
use ax::terminal::WindowSize;
use ax::theme::Theme;
use ax::{Direction, EditEvent};

/// Create a test model with given text, cursor moved to (line, column)
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut document = Document::with_text(text);
    move_cursor_to(&mut document, line, column);
    model_with(document)
}

pub fn model_with(document: Document) -> AppModel {
    AppModel::new(
        document,
        Highlighter::plain(Theme::default()),
        EditorConfig::default(),
        WindowSize::new(24, 80),
    )
}

/// Walk the cursor to (line, column) with MoveTo events
pub fn move_cursor_to(document: &mut Document, line: usize, column: usize) {
    for _ in 0..line {
        document.execute(EditEvent::MoveTo(Direction::Down));
    }
    for _ in 0..column {
        document.execute(EditEvent::MoveTo(Direction::Right));
    }
    assert_eq!(
        document.cursor_position(),
        Position::new(column, line),
        "cursor could not reach line {} column {}",
        line,
        column
    );
}

pub fn row_texts(document: &Document) -> Vec<String> {
    document
        .rows()
        .iter()
        .map(|row| row.text().to_string())
        .collect()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::with_modifier(KeyCode::Char(c), KeyModifier::Control)
}

pub fn char_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

/// A language built from keyword and rule lists
pub fn language(keywords: &[&str], rules: &[(Category, &str)]) -> Language {
    Language {
        name: "Test".to_string(),
        icon: String::new(),
        extensions: vec!["test".to_string()],
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        definitions: rules
            .iter()
            .map(|(category, regex)| Definition {
                category: *category,
                regex: regex.to_string(),
            })
            .collect(),
    }
}
