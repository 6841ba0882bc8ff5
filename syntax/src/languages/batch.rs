//! Windows batch grammar

use crate::grammar::{Cursor, Grammar};
use crate::token::{Token, TokenKind};

/// Builtins and control words, matched case-insensitively
const KEYWORDS: &[&str] = &[
    "call", "cd", "cls", "copy", "del", "do", "echo", "else", "endlocal", "errorlevel", "exist",
    "exit", "for", "goto", "if", "in", "move", "not", "pause", "ren", "set", "setlocal", "shift",
    "start", "title", "type",
];

const OPERATOR_CHARS: &str = "&|<>^+=*";
const PUNCTUATION_CHARS: &str = "(),;";

#[derive(Debug, Default, Clone, Copy)]
pub struct BatchGrammar;

impl Grammar for BatchGrammar {
    fn name(&self) -> &'static str {
        "batch"
    }

    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        Box::new(BatchTokens {
            cursor: Cursor::new(text),
        })
    }
}

struct BatchTokens<'a> {
    cursor: Cursor<'a>,
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-' || ch == '.'
}

impl<'a> Iterator for BatchTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let ch = self.cursor.peek()?;
        let start = self.cursor.pos();

        let kind = if ch.is_whitespace() {
            self.cursor.eat_while(|c| c.is_whitespace());
            TokenKind::Plain
        } else if self.cursor.starts_with("::") {
            self.cursor.eat_line();
            TokenKind::Comment
        } else if ch == '"' {
            self.cursor.eat_string('"');
            TokenKind::String
        } else if ch == '%' {
            // %VAR% and %1 style references
            self.cursor.bump();
            self.cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
            if self.cursor.peek() == Some('%') {
                self.cursor.bump();
            }
            TokenKind::Name
        } else if ch == '@' {
            self.cursor.bump();
            TokenKind::Operator
        } else if ch == ':' {
            // Labels: :loop
            self.cursor.bump();
            self.cursor.eat_while(is_word_char);
            TokenKind::Name
        } else if ch.is_ascii_digit() {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            TokenKind::Number
        } else if ch.is_alphabetic() || ch == '_' {
            self.cursor.eat_while(is_word_char);
            let word = self.cursor.token_from(start, TokenKind::Name).text;
            if word.eq_ignore_ascii_case("rem") {
                self.cursor.eat_line();
                TokenKind::Comment
            } else if KEYWORDS.iter().any(|k| word.eq_ignore_ascii_case(k)) {
                TokenKind::Keyword
            } else {
                TokenKind::Name
            }
        } else if OPERATOR_CHARS.contains(ch) {
            self.cursor.bump();
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

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_of(text: &str) -> Vec<(TokenKind, String)> {
        BatchGrammar
            .tokenize(text)
            .map(|t| (t.kind, t.text.to_string()))
            .collect()
    }

    #[test]
    fn test_echo_is_keyword() {
        let tokens = kinds_of("@echo off");
        assert_eq!(tokens[0], (TokenKind::Operator, "@".into()));
        assert_eq!(tokens[1], (TokenKind::Keyword, "echo".into()));
        assert_eq!(tokens[3], (TokenKind::Name, "off".into()));
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let tokens = kinds_of("IF EXIST out.txt GOTO done");
        assert!(tokens.contains(&(TokenKind::Keyword, "IF".into())));
        assert!(tokens.contains(&(TokenKind::Keyword, "EXIST".into())));
        assert!(tokens.contains(&(TokenKind::Keyword, "GOTO".into())));
    }

    #[test]
    fn test_rem_comment() {
        let tokens = kinds_of("REM a note\necho hi");
        assert_eq!(tokens[0], (TokenKind::Comment, "REM a note".into()));
    }

    #[test]
    fn test_double_colon_comment() {
        let tokens = kinds_of(":: note\n");
        assert_eq!(tokens[0], (TokenKind::Comment, ":: note".into()));
    }

    #[test]
    fn test_variable_reference() {
        let tokens = kinds_of("echo %PATH%");
        assert!(tokens.contains(&(TokenKind::Name, "%PATH%".into())));
    }

    #[test]
    fn test_label() {
        let tokens = kinds_of(":loop\n");
        assert_eq!(tokens[0], (TokenKind::Name, ":loop".into()));
    }

    #[test]
    fn test_full_coverage() {
        let text = "@echo off\nset N=3\nif %N%==3 echo \"ok\"\n:: end\n";
        let consumed: usize = BatchGrammar.tokenize(text).map(|t| t.len()).sum();
        assert_eq!(consumed, text.len());
    }
}
