//! Text buffer and position types
//!
//! The buffer stores the document text verbatim and derives line boundaries
//! from it. Lines are addressed by 0-based row and a byte column within the
//! line; the column never covers the line separator, so `"\r\n"` and `"\n"`
//! documents both round-trip unchanged.

use serde::{Deserialize, Serialize};

/// Cursor position in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Text buffer with verbatim storage and line/column addressing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Byte offset of the start of each line; never empty.
    line_starts: Vec<usize>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_string(String::new())
    }

    pub fn from_string(text: String) -> Self {
        let line_starts = index_lines(&text);
        Self { text, line_starts }
    }

    /// The full document text, byte-for-byte as loaded or edited
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters (not bytes) in the document
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line content without its separator (and without a trailing `\r`)
    pub fn line(&self, row: usize) -> Option<&str> {
        let (start, end) = self.line_span(row)?;
        Some(&self.text[start..end])
    }

    /// Byte length of the line content at `row`, 0 for rows out of range
    pub fn line_length(&self, row: usize) -> usize {
        self.line_span(row).map(|(s, e)| e - s).unwrap_or(0)
    }

    /// Byte offset of a position, if it addresses a valid point in the line
    pub fn offset_at(&self, pos: Position) -> Option<usize> {
        let (start, end) = self.line_span(pos.row)?;
        let offset = start.checked_add(pos.col)?;
        if offset > end || !self.text.is_char_boundary(offset) {
            return None;
        }
        Some(offset)
    }

    /// Insert a character at position
    pub fn insert_char(&mut self, pos: Position, ch: char) -> bool {
        let Some(offset) = self.offset_at(pos) else {
            return false;
        };
        self.text.insert(offset, ch);
        self.reindex();
        true
    }

    /// Insert a line break at position, splitting the line
    pub fn insert_newline(&mut self, pos: Position) -> bool {
        self.insert_char(pos, '\n')
    }

    /// Delete the character at position
    ///
    /// At the end of a line this joins the next line by removing the
    /// separator; at the end of the document it is a no-op.
    pub fn delete_char(&mut self, pos: Position) -> bool {
        let Some((start, end)) = self.line_span(pos.row) else {
            return false;
        };
        let offset = start + pos.col;
        if offset < end {
            if !self.text.is_char_boundary(offset) {
                return false;
            }
            self.text.remove(offset);
            self.reindex();
            return true;
        }
        if pos.col == end - start && pos.row + 1 < self.line_count() {
            // Join with the next line: drop the separator bytes.
            let sep_end = self.line_starts[pos.row + 1];
            self.text.replace_range(end..sep_end, "");
            self.reindex();
            return true;
        }
        false
    }

    /// Delete the character before position, returning the new position
    ///
    /// At column 0 this joins the line with the previous one.
    pub fn backspace(&mut self, pos: Position) -> Option<Position> {
        let (start, end) = self.line_span(pos.row)?;
        let offset = start + pos.col;
        if pos.col > 0 && offset <= end && self.text.is_char_boundary(offset) {
            let removed = self.text[..offset].chars().next_back()?;
            let at = offset - removed.len_utf8();
            self.text.remove(at);
            self.reindex();
            Some(Position::new(pos.row, pos.col - removed.len_utf8()))
        } else if pos.col == 0 && pos.row > 0 {
            let prev_row = pos.row - 1;
            let (prev_start, prev_end) = self.line_span(prev_row)?;
            // Remove the separator between the two lines.
            let sep_end = self.line_starts[pos.row];
            self.text.replace_range(prev_end..sep_end, "");
            self.reindex();
            Some(Position::new(prev_row, prev_end - prev_start))
        } else {
            None
        }
    }

    fn line_span(&self, row: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(row)?;
        let mut end = match self.line_starts.get(row + 1) {
            Some(&next) => next - 1,
            None => self.text.len(),
        };
        if end > start && self.text.as_bytes()[end - 1] == b'\r' && end != self.text.len() {
            end -= 1;
        }
        Some((start, end))
    }

    fn reindex(&mut self) {
        self.line_starts = index_lines(&self.text);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn index_lines(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}
