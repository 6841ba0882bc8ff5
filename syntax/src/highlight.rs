//! Pure span computation
//!
//! Highlighting is a function from (text, tokens) to byte-offset style
//! spans. Spans never cross line boundaries and never cover newline bytes;
//! the UI layer alone decides how spans are painted.

use crate::token::{Token, TokenKind};

/// A style span over the highlighted text, in byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl StyleSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute style spans for `text` from its token stream
///
/// Walks the tokens with a running offset from the start of `text`,
/// splitting each token on newlines so no span crosses a line boundary.
/// After the walk the offset must equal `text.len()`; a grammar that
/// under- or over-consumes is a bug, caught here in debug builds.
pub fn highlight_spans<'a>(
    text: &str,
    tokens: impl Iterator<Item = Token<'a>>,
) -> Vec<StyleSpan> {
    let mut spans = Vec::new();
    let mut offset = 0;

    for token in tokens {
        let mut parts = token.text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                spans.push(StyleSpan {
                    kind: token.kind,
                    start: offset,
                    end: offset + part.len(),
                });
            }
            offset += part.len();
            if parts.peek().is_some() {
                // The newline itself is consumed but never styled.
                offset += 1;
            }
        }
    }

    debug_assert_eq!(offset, text.len(), "token stream must cover the text");
    spans
}
