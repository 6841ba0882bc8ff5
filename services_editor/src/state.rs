//! Editor session state
//!
//! One document, one cursor, plus the derived highlight spans. The cursor
//! column is a byte offset kept on a character boundary; movement steps by
//! whole characters and wraps across line boundaries.

use editor_core::{Document, DocumentSnapshot, Position};
use syntax::{highlight_spans, LanguageId, LanguageRegistry, StyleSpan};

/// State of the single editing session
pub struct EditorState {
    document: Document,
    cursor: Position,
    language: LanguageId,
    spans: Vec<StyleSpan>,
    status_message: String,
}

impl EditorState {
    /// A fresh untitled session
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            cursor: Position::zero(),
            language: LanguageId::Plain,
            spans: Vec::new(),
            status_message: String::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn set_language(&mut self, language: LanguageId) {
        self.language = language;
    }

    /// Current highlight spans, byte offsets into the document content
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Window title, derived from the path association
    pub fn title(&self) -> String {
        match self.document.path() {
            Some(path) => format!("ScriptPad - {}", path.display()),
            None => "ScriptPad - Untitled".to_string(),
        }
    }

    /// Replace the session with loaded content
    pub fn load(
        &mut self,
        content: String,
        path: std::path::PathBuf,
        language: LanguageId,
        registry: &LanguageRegistry,
    ) {
        self.document.replace(content, Some(path));
        self.cursor = Position::zero();
        self.language = language;
        self.rehighlight(registry);
    }

    /// Recompute highlight spans from the current content
    pub fn rehighlight(&mut self, registry: &LanguageRegistry) {
        let grammar = registry.grammar(self.language);
        let text = self.document.content();
        self.spans = highlight_spans(text, grammar.tokenize(text));
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot::capture(&self.document, self.cursor)
    }

    // Editing primitives; callers rehighlight afterwards.

    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.document.insert_char(self.cursor, ch) {
            self.cursor.col += ch.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn insert_newline(&mut self) -> bool {
        if self.document.insert_newline(self.cursor) {
            self.cursor = Position::new(self.cursor.row + 1, 0);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) -> bool {
        if let Some(pos) = self.document.backspace(self.cursor) {
            self.cursor = pos;
            true
        } else {
            false
        }
    }

    pub fn delete(&mut self) -> bool {
        self.document.delete_char(self.cursor)
    }

    // Cursor movement

    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            let line = self.current_line();
            if let Some(ch) = line[..self.cursor.col].chars().next_back() {
                self.cursor.col -= ch.len_utf8();
            }
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.document.buffer().line_length(self.cursor.row);
        }
    }

    pub fn move_right(&mut self) {
        let line = self.current_line();
        if self.cursor.col < line.len() {
            if let Some(ch) = line[self.cursor.col..].chars().next() {
                self.cursor.col += ch.len_utf8();
            }
        } else if self.cursor.row + 1 < self.document.buffer().line_count() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.row + 1 < self.document.buffer().line_count() {
            self.cursor.row += 1;
            self.clamp_col();
        }
    }

    /// Place the cursor, clamping into the document
    pub fn set_cursor(&mut self, pos: Position) {
        let last_row = self.document.buffer().line_count().saturating_sub(1);
        self.cursor.row = pos.row.min(last_row);
        self.cursor.col = pos.col;
        self.clamp_col();
    }

    fn current_line(&self) -> &str {
        self.document.buffer().line(self.cursor.row).unwrap_or("")
    }

    fn clamp_col(&mut self) {
        let line = self.document.buffer().line(self.cursor.row).unwrap_or("");
        if self.cursor.col > line.len() {
            self.cursor.col = line.len();
        }
        while self.cursor.col > 0 && !line.is_char_boundary(self.cursor.col) {
            self.cursor.col -= 1;
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
