//! Token types

use serde::{Deserialize, Serialize};

/// Semantic classification of a span of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Reserved words and named constants
    Keyword,
    /// Identifiers, tag and attribute names, variables
    Name,
    /// String literals
    String,
    /// Comments
    Comment,
    /// Numeric literals (including hex colors)
    Number,
    /// Operators
    Operator,
    /// Brackets, separators, tag delimiters
    Punctuation,
    /// Whitespace and anything without a more specific class
    Plain,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Name => "name",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Plain => "plain",
        }
    }
}

/// A classified span of source text, borrowed from the tokenized input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// Byte length of the token text
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
