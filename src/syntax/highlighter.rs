//! Token → color rewriting of a single line

use std::collections::HashSet;

use super::language::Language;
use super::token::TokenType;
use super::tokenizer::Tokenizer;
use crate::terminal::ansi::{self, Segment};
use crate::theme::Theme;

/// Tokenizer and theme for one document
#[derive(Debug, Clone)]
pub struct Highlighter {
    language_name: String,
    tokenizer: Tokenizer,
    theme: Theme,
}

impl Highlighter {
    pub fn new(language: &Language, theme: Theme) -> Self {
        Self {
            language_name: language.name.clone(),
            tokenizer: Tokenizer::new(language),
            theme,
        }
    }

    /// Highlighter that colors nothing
    pub fn plain(theme: Theme) -> Self {
        Self::new(&Language::plain_text(), theme)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn language_name(&self) -> &str {
        &self.language_name
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Colorize one line.
    ///
    /// Existing styles are stripped first. Every occurrence of each token's
    /// text is wrapped in the token color followed by the theme text color.
    /// Tokens apply in tokenizer order, so when two passes match the same
    /// text the later one wraps it again and its color shows.
    pub fn highlight(&self, code: &str) -> String {
        let plain = ansi::strip_styles(code);
        let restore = ansi::foreground(self.theme.text_color);

        let mut styled = plain.clone();
        // One replacement already covers every occurrence of a text
        let mut applied: HashSet<(String, TokenType)> = HashSet::new();
        for token in self.tokenizer.tokenize(&plain) {
            if !applied.insert((token.text.clone(), token.kind)) {
                continue;
            }
            let replacement = format!(
                "{}{}{}",
                ansi::foreground(self.theme.color_for(token.kind)),
                token.text,
                restore
            );
            styled = replace_outside_escapes(&styled, &token.text, &replacement);
        }
        styled
    }
}

/// `str::replace` restricted to the visible text of a styled string
fn replace_outside_escapes(styled: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(styled.len() + to.len());
    for segment in ansi::segments(styled) {
        match segment {
            Segment::Text(text) => out.push_str(&text.replace(from, to)),
            Segment::Escape(esc) => out.push_str(esc),
        }
    }
    out
}
