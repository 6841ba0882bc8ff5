//! HTML grammar
//!
//! Markup needs one bit of scanner state: whether the cursor is inside a
//! tag. Outside a tag everything up to the next `<` is plain text; inside,
//! the first name is the tag name and later names are attributes.

use crate::grammar::{Cursor, Grammar};
use crate::token::{Token, TokenKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlGrammar;

impl Grammar for HtmlGrammar {
    fn name(&self) -> &'static str {
        "html"
    }

    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        Box::new(HtmlTokens {
            cursor: Cursor::new(text),
            in_tag: false,
            tag_name_pending: false,
        })
    }
}

struct HtmlTokens<'a> {
    cursor: Cursor<'a>,
    in_tag: bool,
    tag_name_pending: bool,
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '_' | ':' | '.')
}

impl<'a> Iterator for HtmlTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let ch = self.cursor.peek()?;
        let start = self.cursor.pos();

        let kind = if self.in_tag {
            if ch.is_whitespace() {
                self.cursor.eat_while(|c| c.is_whitespace());
                TokenKind::Plain
            } else if ch == '>' {
                self.cursor.bump();
                self.in_tag = false;
                TokenKind::Punctuation
            } else if self.cursor.starts_with("/>") {
                self.cursor.advance(2);
                self.in_tag = false;
                TokenKind::Punctuation
            } else if ch == '/' {
                self.cursor.bump();
                TokenKind::Punctuation
            } else if ch == '"' || ch == '\'' {
                self.cursor.eat_string(ch);
                TokenKind::String
            } else if ch == '=' {
                self.cursor.bump();
                TokenKind::Operator
            } else if is_name_char(ch) {
                self.cursor.eat_while(is_name_char);
                if self.tag_name_pending {
                    self.tag_name_pending = false;
                    TokenKind::Keyword
                } else {
                    TokenKind::Name
                }
            } else {
                self.cursor.bump();
                TokenKind::Plain
            }
        } else if self.cursor.starts_with("<!--") {
            self.cursor.advance(4);
            self.cursor.eat_past("-->");
            TokenKind::Comment
        } else if self.cursor.starts_with("<!") {
            // Doctype and other declarations
            self.cursor.eat_past(">");
            TokenKind::Comment
        } else if self.cursor.starts_with("</") {
            self.cursor.advance(2);
            self.in_tag = true;
            self.tag_name_pending = true;
            TokenKind::Punctuation
        } else if ch == '<' {
            self.cursor.bump();
            self.in_tag = true;
            self.tag_name_pending = true;
            TokenKind::Punctuation
        } else if ch == '&' {
            self.cursor.bump();
            self.cursor.eat_while(|c| c.is_alphanumeric() || c == '#');
            if self.cursor.peek() == Some(';') {
                self.cursor.bump();
            }
            TokenKind::Name
        } else {
            self.cursor.eat_while(|c| c != '<' && c != '&');
            TokenKind::Plain
        };

        Some(self.cursor.token_from(start, kind))
    }
}
