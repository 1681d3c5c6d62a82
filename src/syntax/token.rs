//! Classified spans of source text

use std::fmt;
use std::ops::Range;

use serde::Deserialize;

/// Lexical class of a token; keys theme highlight colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    /// A language keyword
    Keyword,
    /// A string literal
    String,
    /// A reference to a type
    Type,
    /// An integer or floating point literal
    Number,
    /// A single or multi-line comment
    Comment,
    /// A property being accessed, such as `object.property`
    Property,
    /// A symbol accessed through dot notation, such as `.myCase`
    DotAccess,
    /// A preprocessing symbol, such as `#if` or `#define`
    Preprocessing,
    /// An attribute like `@objc` or `#[derive]`
    Attribute,
    /// A special operator like `&&` or `||`
    Operator,
    /// A call site such as `my_method()`
    MethodCall,
}

impl TokenType {
    pub const ALL: [TokenType; 11] = [
        TokenType::Keyword,
        TokenType::String,
        TokenType::Type,
        TokenType::Number,
        TokenType::Comment,
        TokenType::Property,
        TokenType::DotAccess,
        TokenType::Preprocessing,
        TokenType::Attribute,
        TokenType::Operator,
        TokenType::MethodCall,
    ];

    /// Name as written in theme files
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::String => "string",
            TokenType::Type => "type",
            TokenType::Number => "number",
            TokenType::Comment => "comment",
            TokenType::Property => "property",
            TokenType::DotAccess => "dotAccess",
            TokenType::Preprocessing => "preprocessing",
            TokenType::Attribute => "attribute",
            TokenType::Operator => "operator",
            TokenType::MethodCall => "methodCall",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of a single line.
///
/// `range` is a byte range into the tokenized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub range: Range<usize>,
    pub kind: TokenType,
    pub text: String,
}

impl Token {
    pub fn new(range: Range<usize>, kind: TokenType, text: impl Into<String>) -> Self {
        Self {
            range,
            kind,
            text: text.into(),
        }
    }
}
