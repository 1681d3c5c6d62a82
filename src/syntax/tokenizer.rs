//! Keyword + regex tokenizer
//!
//! Tokens come out in passes: every keyword first, then every match of each
//! rule in declaration order. Passes are independent, so a span can be
//! reported by more than one of them.

use std::collections::HashSet;

use regex::{Matches, Regex};

use super::language::Language;
use super::token::{Token, TokenType};

#[derive(Debug, Clone)]
struct Rule {
    regex: Regex,
    kind: TokenType,
}

/// A compiled [`Language`]
#[derive(Debug, Clone)]
pub struct Tokenizer {
    keywords: HashSet<String>,
    rules: Vec<Rule>,
}

impl Tokenizer {
    /// Compile every rule of `language`; rules whose regex does not compile
    /// are skipped
    pub fn new(language: &Language) -> Self {
        let rules = language
            .definitions
            .iter()
            .filter_map(|def| match Regex::new(&def.regex) {
                Ok(regex) => Some(Rule {
                    regex,
                    kind: def.category.token_type(),
                }),
                Err(e) => {
                    tracing::warn!(
                        language = %language.name,
                        pattern = %def.regex,
                        "skipping invalid rule: {}",
                        e
                    );
                    None
                }
            })
            .collect();

        Self {
            keywords: language.keywords.iter().cloned().collect(),
            rules,
        }
    }

    /// Number of rules that compiled
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lazily tokenize `text`
    pub fn tokenize<'t>(&'t self, text: &'t str) -> Tokens<'t> {
        Tokens {
            tokenizer: self,
            text,
            pass: Pass::Keywords { offset: 0 },
        }
    }
}

enum Pass<'t> {
    Keywords { offset: usize },
    Rule { index: usize, matches: Matches<'t, 't> },
    Done,
}

/// Iterator returned by [`Tokenizer::tokenize`]
pub struct Tokens<'t> {
    tokenizer: &'t Tokenizer,
    text: &'t str,
    pass: Pass<'t>,
}

impl<'t> Tokens<'t> {
    fn rule_pass(&self, index: usize) -> Pass<'t> {
        let tokenizer: &'t Tokenizer = self.tokenizer;
        match tokenizer.rules.get(index) {
            Some(rule) => Pass::Rule {
                index,
                matches: rule.regex.find_iter(self.text),
            },
            None => Pass::Done,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            match &mut self.pass {
                Pass::Keywords { offset } => {
                    if let Some(token) = next_keyword(&self.tokenizer.keywords, self.text, offset) {
                        return Some(token);
                    }
                    self.pass = self.rule_pass(0);
                }
                Pass::Rule { index, matches } => {
                    let index = *index;
                    match matches.next() {
                        // Zero-width matches have nothing to color
                        Some(m) if m.is_empty() => continue,
                        Some(m) => {
                            let kind = self.tokenizer.rules[index].kind;
                            return Some(Token::new(m.range(), kind, m.as_str()));
                        }
                        None => self.pass = self.rule_pass(index + 1),
                    }
                }
                Pass::Done => return None,
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Advance `offset` past the next keyword word segment, returning its token
fn next_keyword(keywords: &HashSet<String>, text: &str, offset: &mut usize) -> Option<Token> {
    while *offset < text.len() {
        let Some(start) = text[*offset..].find(is_word_char).map(|i| *offset + i) else {
            *offset = text.len();
            break;
        };
        let end = text[start..]
            .find(|c: char| !is_word_char(c))
            .map_or(text.len(), |i| start + i);
        *offset = end;

        let word = &text[start..end];
        if keywords.contains(word) {
            return Some(Token::new(start..end, TokenType::Keyword, word));
        }
    }
    None
}
