//! Syntax highlighting
//!
//! ```text
//! Language (YAML) → Tokenizer (keywords + regex rules)
//!                 → Tokens → Highlighter (+ Theme) → styled line
//! ```
//!
//! Highlighting is pull-based: the view asks for each visible line on every
//! frame, nothing is cached.

pub mod highlighter;
pub mod language;
pub mod token;
pub mod tokenizer;

pub use highlighter::Highlighter;
pub use language::{Category, Definition, Language, LanguageRegistry, BUILTIN_LANGUAGES};
pub use token::{Token, TokenType};
pub use tokenizer::{Tokenizer, Tokens};
