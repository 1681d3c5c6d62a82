//! ANSI/VT100 output sequences

use std::fmt;

use crate::theme::Color;

pub const ESC: char = '\x1b';

/// Reset all SGR attributes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Cursor, screen and mode control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiCommand {
    HideCursor,
    ShowCursor,
    /// Zero-based row and column; emitted 1-based
    MoveCursor { row: usize, col: usize },
    CursorHome,
    ClearScreen,
    /// Clear from the cursor to the end of the line
    ClearLine,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    ResetStyle,
}

impl fmt::Display for AnsiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnsiCommand::HideCursor => write!(f, "{ESC}[?25l"),
            AnsiCommand::ShowCursor => write!(f, "{ESC}[?25h"),
            AnsiCommand::MoveCursor { row, col } => write!(f, "{ESC}[{};{}H", row + 1, col + 1),
            AnsiCommand::CursorHome => write!(f, "{ESC}[H"),
            AnsiCommand::ClearScreen => write!(f, "{ESC}[2J"),
            AnsiCommand::ClearLine => write!(f, "{ESC}[K"),
            AnsiCommand::EnterAlternateScreen => write!(f, "{ESC}[?1049h"),
            AnsiCommand::LeaveAlternateScreen => write!(f, "{ESC}[?1049l"),
            AnsiCommand::ResetStyle => f.write_str(RESET),
        }
    }
}

/// 24-bit foreground color
pub fn foreground(color: Color) -> String {
    format!("{ESC}[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// 24-bit background color
pub fn background(color: Color) -> String {
    format!("{ESC}[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// A piece of styled output: either visible text or an escape sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Escape(&'a str),
}

/// Split `text` into visible text and escape sequences.
///
/// `ESC [` sequences run up to and including their final byte (`@`..=`~`);
/// any other `ESC` stands alone.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != ESC as u8 {
            i += 1;
            continue;
        }
        if text_start < i {
            segments.push(Segment::Text(&text[text_start..i]));
        }
        let end = escape_end(bytes, i);
        segments.push(Segment::Escape(&text[i..end]));
        i = end;
        text_start = end;
    }

    if text_start < bytes.len() {
        segments.push(Segment::Text(&text[text_start..]));
    }
    segments
}

fn escape_end(bytes: &[u8], start: usize) -> usize {
    if bytes.get(start + 1) != Some(&b'[') {
        return start + 1;
    }
    bytes[start + 2..]
        .iter()
        .position(|b| (0x40..=0x7E).contains(b))
        .map_or(bytes.len(), |p| start + 2 + p + 1)
}

/// Remove every escape sequence, keeping visible text
pub fn strip_styles(text: &str) -> String {
    segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(s) => Some(s),
            Segment::Escape(_) => None,
        })
        .collect()
}

/// Number of visible chars in a styled string
pub fn visible_width(text: &str) -> usize {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(s) => s.chars().count(),
            Segment::Escape(_) => 0,
        })
        .sum()
}
