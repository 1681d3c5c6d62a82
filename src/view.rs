//! Frame composition
//!
//! `render` is a pure function of the model: it produces the text of every
//! screen line plus where the cursor belongs. Writing it to the terminal is
//! the runtime's job.

use crate::model::{AppModel, CHROME_LINES};
use crate::terminal::ansi::{self, AnsiCommand};
use crate::theme::Color;

pub const WELCOME_TITLE: &str = concat!("Welcome to ax editor version ", env!("CARGO_PKG_VERSION"));
pub const WELCOME_SUBTITLE: &str = "A small terminal text editor";
pub const HELP_HINT: &str = "Ctrl-S save | Ctrl-Q quit | Ctrl-U undo | Ctrl-R redo";

const DIM: Color = Color::rgb(99, 109, 131);
const WELCOME: Color = Color::rgb(63, 197, 107);
const STATUS_BACKGROUND: Color = Color::rgb(59, 59, 84);
const STATUS_FOREGROUND: Color = Color::rgb(249, 200, 89);

/// One fully composed screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Styled content of each screen line, top to bottom
    pub lines: Vec<String>,
    /// Zero-based (row, col) of the terminal cursor
    pub cursor: (usize, usize),
    pub background: Color,
}

impl Frame {
    /// Escape-sequence stream that paints this frame over the previous one
    pub fn to_output(&self) -> String {
        let background = ansi::background(self.background);
        let mut out = String::new();
        out.push_str(&AnsiCommand::HideCursor.to_string());
        out.push_str(&AnsiCommand::CursorHome.to_string());
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push_str("\r\n");
            }
            out.push_str(&background);
            out.push_str(line);
            out.push_str(&background);
            out.push_str(&AnsiCommand::ClearLine.to_string());
        }
        out.push_str(ansi::RESET);
        let (row, col) = self.cursor;
        out.push_str(&AnsiCommand::MoveCursor { row, col }.to_string());
        out.push_str(&AnsiCommand::ShowCursor.to_string());
        out
    }
}

pub fn render(model: &AppModel) -> Frame {
    let rows = model.window_size.rows as usize;
    let cols = model.window_size.cols as usize;
    let text_lines = rows.saturating_sub(CHROME_LINES);
    let gutter = model.gutter_width();
    let document = &model.document;
    let viewport = &model.viewport;
    let theme = model.highlighter.theme();
    let text_color = ansi::foreground(theme.text_color);

    let mut lines = Vec::with_capacity(rows);
    for screen_line in 0..text_lines {
        let welcome_line = rows / 4;
        let line = if document.shows_welcome() && screen_line == welcome_line {
            welcome(WELCOME_TITLE, cols)
        } else if document.shows_welcome() && screen_line == welcome_line + 1 {
            welcome(WELCOME_SUBTITLE, cols)
        } else if let Some(row) = document.row(viewport.top_line + screen_line) {
            let number = viewport.top_line + screen_line + 1;
            // One cell per char keeps the cursor column aligned
            let visible = row
                .visible_text(viewport.left_column, viewport.visible_columns)
                .replace('\t', " ");
            format!(
                "{}{}{}",
                line_number(number, gutter),
                text_color,
                model.highlighter.highlight(&visible)
            )
        } else {
            format!("{} ~", ansi::foreground(DIM))
        };
        lines.push(line);
    }

    if rows >= 2 {
        lines.push(status_line(model, cols));
    }
    if rows >= 1 {
        let message = model.message.as_deref().unwrap_or(HELP_HINT);
        lines.push(format!("{}{}", text_color, truncate(message, cols)));
    }

    let cursor = viewport
        .to_screen(document.cursor_position())
        .map_or((0, gutter), |(col, line)| (line, gutter + col));

    Frame {
        lines,
        cursor,
        background: theme.background_color,
    }
}

fn line_number(number: usize, gutter: usize) -> String {
    let digits = gutter.saturating_sub(crate::model::GUTTER_PADDING);
    format!("{} {:>digits$}  ", ansi::foreground(DIM), number)
}

fn welcome(message: &str, cols: usize) -> String {
    let padding = (cols / 2).saturating_sub(message.chars().count() / 2);
    format!(
        "{} ~{}{}{}",
        ansi::foreground(DIM),
        ansi::foreground(WELCOME),
        " ".repeat(padding),
        message
    )
}

fn status_line(model: &AppModel, cols: usize) -> String {
    let document = &model.document;
    let cursor = document.cursor_position();
    let modified = if document.is_modified { " [+]" } else { "" };
    let text = format!(
        " {}{} | {} | Ln {}, Col {}",
        document.display_name(),
        modified,
        model.highlighter.language_name(),
        cursor.y + 1,
        cursor.x + 1
    );
    let text = truncate(&text, cols);
    let fill = cols.saturating_sub(text.chars().count());
    format!(
        "{}{}{}{}{}{}",
        ansi::background(STATUS_BACKGROUND),
        ansi::foreground(STATUS_FOREGROUND),
        ansi::BOLD,
        text,
        " ".repeat(fill),
        ansi::RESET
    )
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }

    #[test]
    fn test_line_number_fills_gutter() {
        let text = ansi::strip_styles(&line_number(7, 5));
        assert_eq!(text, "  7  ");
    }
}
