//! Status bar derivation
//!
//! A pure function of (document, cursor, config); the shell recomputes it
//! after every event. Nothing here is cached.

use core::fmt;
use editor_core::{Document, Position};

/// Line ending style reported in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EolStyle {
    Lf,
    Crlf,
}

impl EolStyle {
    pub fn as_label(&self) -> &'static str {
        match self {
            EolStyle::Lf => "Unix (LF)",
            EolStyle::Crlf => "Windows (CRLF)",
        }
    }

    /// Detect from content: CRLF wins if any is present
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            EolStyle::Crlf
        } else {
            EolStyle::Lf
        }
    }
}

/// Fixed display fields of the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    /// Display-only zoom percentage; no zoom action is wired
    pub zoom_percent: u16,
    /// Forces the EOL label instead of detecting it from content
    pub eol_override: Option<EolStyle>,
    /// The only encoding the I/O layer reads or writes
    pub encoding_label: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            zoom_percent: 100,
            eol_override: None,
            encoding_label: "UTF-8".to_string(),
        }
    }
}

/// Derived status bar fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub line: usize,
    pub column: usize,
    pub char_count: usize,
    pub zoom_percent: u16,
    pub eol: EolStyle,
    pub encoding: String,
}

impl StatusLine {
    /// Derive the status line from current state
    pub fn derive(document: &Document, cursor: Position, config: &StatusConfig) -> Self {
        let line_text = document.buffer().line(cursor.row).unwrap_or("");
        let col_bytes = cursor.col.min(line_text.len());
        let column = line_text[..col_bytes].chars().count() + 1;

        Self {
            line: cursor.row + 1,
            column,
            char_count: document.char_count(),
            zoom_percent: config.zoom_percent,
            eol: config
                .eol_override
                .unwrap_or_else(|| EolStyle::detect(document.content())),
            encoding: config.encoding_label.clone(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ln {}, Col {}   |   {} chars   |   {}%   |   {}   |   {}",
            self.line,
            self.column,
            self.char_count,
            self.zoom_percent,
            self.eol.as_label(),
            self.encoding
        )
    }
}
