//! CSS grammar

use crate::grammar::{Cursor, Grammar};
use crate::token::{Token, TokenKind};

const PUNCTUATION_CHARS: &str = "{}();:,";
const OPERATOR_CHARS: &str = "*+~>=^|$";

#[derive(Debug, Default, Clone, Copy)]
pub struct CssGrammar;

impl Grammar for CssGrammar {
    fn name(&self) -> &'static str {
        "css"
    }

    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        Box::new(CssTokens {
            cursor: Cursor::new(text),
        })
    }
}

struct CssTokens<'a> {
    cursor: Cursor<'a>,
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

impl<'a> Iterator for CssTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let ch = self.cursor.peek()?;
        let start = self.cursor.pos();

        let kind = if ch.is_whitespace() {
            self.cursor.eat_while(|c| c.is_whitespace());
            TokenKind::Plain
        } else if self.cursor.starts_with("/*") {
            self.cursor.advance(2);
            self.cursor.eat_past("*/");
            TokenKind::Comment
        } else if ch == '"' || ch == '\'' {
            self.cursor.eat_string(ch);
            TokenKind::String
        } else if ch == '@' {
            // At-rules: @media, @import, ...
            self.cursor.bump();
            self.cursor.eat_while(is_ident_char);
            TokenKind::Keyword
        } else if self.cursor.starts_with("!important") {
            self.cursor.advance("!important".len());
            TokenKind::Keyword
        } else if ch == '#' {
            self.cursor.bump();
            self.cursor.eat_while(is_ident_char);
            let body = &self.cursor.token_from(start, TokenKind::Plain).text[1..];
            let is_hex_color =
                matches!(body.len(), 3 | 4 | 6 | 8) && body.chars().all(|c| c.is_ascii_hexdigit());
            if is_hex_color {
                TokenKind::Number
            } else {
                TokenKind::Name
            }
        } else if ch.is_ascii_digit() || (ch == '.' && self.second_is_digit()) {
            // Numbers with units: 12px, 1.5em, 80%
            self.cursor
                .eat_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '%');
            TokenKind::Number
        } else if ch.is_alphabetic() || ch == '-' || ch == '_' {
            self.cursor.eat_while(is_ident_char);
            TokenKind::Name
        } else if PUNCTUATION_CHARS.contains(ch) {
            self.cursor.bump();
            TokenKind::Punctuation
        } else if OPERATOR_CHARS.contains(ch) {
            self.cursor.bump();
            TokenKind::Operator
        } else {
            self.cursor.bump();
            TokenKind::Plain
        };

        Some(self.cursor.token_from(start, kind))
    }
}

impl<'a> CssTokens<'a> {
    fn second_is_digit(&self) -> bool {
        self.cursor
            .rest()
            .chars()
            .nth(1)
            .is_some_and(|c| c.is_ascii_digit())
    }
}
