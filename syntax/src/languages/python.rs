//! Python grammar

use crate::grammar::{Cursor, Grammar};
use crate::token::{Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

const OPERATOR_CHARS: &str = "+-*/%=<>!&|^~@";
const PUNCTUATION_CHARS: &str = "()[]{},:;.";

#[derive(Debug, Default, Clone, Copy)]
pub struct PythonGrammar;

impl Grammar for PythonGrammar {
    fn name(&self) -> &'static str {
        "python"
    }

    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        Box::new(PythonTokens {
            cursor: Cursor::new(text),
        })
    }
}

struct PythonTokens<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Iterator for PythonTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let ch = self.cursor.peek()?;
        let start = self.cursor.pos();

        let kind = if ch.is_whitespace() {
            self.cursor.eat_while(|c| c.is_whitespace());
            TokenKind::Plain
        } else if ch == '#' {
            self.cursor.eat_line();
            TokenKind::Comment
        } else if self.cursor.starts_with("\"\"\"") || self.cursor.starts_with("'''") {
            let delim = if self.cursor.starts_with("\"\"\"") { "\"\"\"" } else { "'''" };
            self.cursor.advance(3);
            self.cursor.eat_past(delim);
            TokenKind::String
        } else if ch == '"' || ch == '\'' {
            self.cursor.eat_string(ch);
            TokenKind::String
        } else if ch.is_ascii_digit() {
            self.cursor
                .eat_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
            TokenKind::Number
        } else if ch.is_alphabetic() || ch == '_' {
            self.cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
            let word = self.cursor.token_from(start, TokenKind::Name).text;
            if KEYWORDS.contains(&word) {
                TokenKind::Keyword
            } else {
                TokenKind::Name
            }
        } else if OPERATOR_CHARS.contains(ch) {
            self.cursor.eat_while(|c| OPERATOR_CHARS.contains(c));
            TokenKind::Operator
        } else if PUNCTUATION_CHARS.contains(ch) {
            self.cursor.bump();
            TokenKind::Punctuation
        } else {
            self.cursor.bump();
            TokenKind::Plain
        };

        Some(self.cursor.token_from(start, kind))
    }
}
