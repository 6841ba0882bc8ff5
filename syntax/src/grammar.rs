//! Grammar trait and scanning support
//!
//! A grammar turns text into a lazy, finite token stream. Streams are
//! restartable: tokenizing the same input twice yields the same sequence.
//! Scanners must always make progress, so tokenization never fails; at worst
//! a character comes out as a `Plain` token.

use crate::token::{Token, TokenKind};

/// A language tokenizer
pub trait Grammar: Send + Sync {
    /// Stable grammar name, used for logging and diagnostics
    fn name(&self) -> &'static str;

    /// Tokenize `text` into a lazy stream covering every byte of the input
    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a>;
}

/// Tokenize `text` with the given grammar
pub fn tokenize<'a>(text: &'a str, grammar: &'a dyn Grammar) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
    grammar.tokenize(text)
}

/// Fallback grammar: the whole text is one plain token
///
/// Used for unrecognized languages and extensions mapped to plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainGrammar;

impl Grammar for PlainGrammar {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        let token = (!text.is_empty()).then_some(Token::new(TokenKind::Plain, text));
        Box::new(token.into_iter())
    }
}

/// Scanning cursor over the input text, shared by the language grammars
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Advance by `n` bytes; callers only pass lengths of ASCII prefixes
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
    }

    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.bump();
        }
    }

    /// Advance to just past the next occurrence of `pat`, or to end of input
    pub fn eat_past(&mut self, pat: &str) {
        match self.rest().find(pat) {
            Some(i) => self.pos += i + pat.len(),
            None => self.pos = self.text.len(),
        }
    }

    /// Advance to the end of the current line, not consuming the newline
    pub fn eat_line(&mut self) {
        self.eat_while(|ch| ch != '\n');
    }

    /// Consume a quoted string with backslash escapes, stopping at an
    /// unescaped closing quote or end of line
    pub fn eat_string(&mut self, quote: char) {
        self.bump();
        while let Some(ch) = self.peek() {
            match ch {
                '\\' => {
                    self.bump();
                    self.bump();
                }
                '\n' => break,
                ch if ch == quote => {
                    self.bump();
                    break;
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    /// Token covering the input since `start`
    pub fn token_from(&self, start: usize, kind: TokenKind) -> Token<'a> {
        Token::new(kind, &self.text[start..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_grammar_single_token() {
        let grammar = PlainGrammar;
        let tokens: Vec<_> = grammar.tokenize("anything\nat all").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Plain);
        assert_eq!(tokens[0].text, "anything\nat all");
    }

    #[test]
    fn test_plain_grammar_empty_input() {
        let grammar = PlainGrammar;
        assert_eq!(grammar.tokenize("").count(), 0);
    }

    #[test]
    fn test_plain_grammar_restartable() {
        let grammar = PlainGrammar;
        let first: Vec<_> = grammar.tokenize("abc").collect();
        let second: Vec<_> = grammar.tokenize("abc").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cursor_eat_string_with_escape() {
        let mut cursor = Cursor::new(r#""a\"b" rest"#);
        cursor.eat_string('"');
        assert_eq!(cursor.pos(), 6);
    }

    #[test]
    fn test_cursor_eat_string_unterminated_stops_at_eol() {
        let mut cursor = Cursor::new("\"open\nnext");
        cursor.eat_string('"');
        assert_eq!(cursor.rest(), "\nnext");
    }

    #[test]
    fn test_cursor_eat_past_missing_pattern() {
        let mut cursor = Cursor::new("no close");
        cursor.eat_past("*/");
        assert!(cursor.rest().is_empty());
    }
}
