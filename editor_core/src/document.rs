//! Document: buffer plus path association and dirty tracking
//!
//! A document is in one of two states: untitled (no associated path, a save
//! must be given a destination) or associated (saves go to the stored path).
//! The transition happens only through an explicit load or save-as.

use crate::buffer::{Position, TextBuffer};
use std::path::{Path, PathBuf};

/// A single open document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    buffer: TextBuffer,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Document {
    /// Create an empty untitled document
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            path: None,
            dirty: false,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn content(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn char_count(&self) -> usize {
        self.buffer.char_count()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_untitled(&self) -> bool {
        self.path.is_none()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the whole document, as on a successful load
    pub fn replace(&mut self, content: String, path: Option<PathBuf>) {
        self.buffer = TextBuffer::from_string(content);
        self.path = path;
        self.dirty = false;
    }

    /// Associate a path, as on save-as; marks the document saved
    pub fn associate_path(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
    }

    /// Mark the current content as written out
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn insert_char(&mut self, pos: Position, ch: char) -> bool {
        let inserted = self.buffer.insert_char(pos, ch);
        if inserted {
            self.dirty = true;
        }
        inserted
    }

    pub fn insert_newline(&mut self, pos: Position) -> bool {
        let inserted = self.buffer.insert_newline(pos);
        if inserted {
            self.dirty = true;
        }
        inserted
    }

    pub fn delete_char(&mut self, pos: Position) -> bool {
        let deleted = self.buffer.delete_char(pos);
        if deleted {
            self.dirty = true;
        }
        deleted
    }

    pub fn backspace(&mut self, pos: Position) -> Option<Position> {
        let new_pos = self.buffer.backspace(pos);
        if new_pos.is_some() {
            self.dirty = true;
        }
        new_pos
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
