//! Frame rendering
//!
//! Turns editor state into a styled frame the host paints. The view knows
//! nothing about terminals or pixels; it hands back lines of colored text
//! segments plus the status bar and cursor, and the host does the drawing.

use crate::state::EditorState;
use crate::status::StatusLine;
use editor_core::Position;
use syntax::{Rgb, Theme};

/// A run of text drawn in one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// None means the default foreground
    pub color: Option<Rgb>,
}

/// One rendered text line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub segments: Vec<Segment>,
}

impl StyledLine {
    /// The line's text with styling stripped
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A complete frame for the host to paint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    /// Visible document lines, starting at `scroll_top`
    pub lines: Vec<StyledLine>,
    pub status: String,
    pub message: String,
    /// Cursor in document coordinates
    pub cursor: Position,
    pub scroll_top: usize,
    pub dirty: bool,
}

/// Renders editor state into frames
#[derive(Debug, Clone, Copy)]
pub struct EditorView {
    viewport_lines: usize,
}

impl EditorView {
    pub fn new(viewport_lines: usize) -> Self {
        Self {
            viewport_lines: viewport_lines.max(1),
        }
    }

    pub fn viewport_lines(&self) -> usize {
        self.viewport_lines
    }

    /// Scroll offset that keeps the cursor row inside the viewport
    pub fn scroll_to_cursor(&self, cursor: Position, current_top: usize) -> usize {
        if cursor.row < current_top {
            cursor.row
        } else if cursor.row >= current_top + self.viewport_lines {
            cursor.row + 1 - self.viewport_lines
        } else {
            current_top
        }
    }

    /// Render the visible slice of the document
    pub fn render(
        &self,
        state: &EditorState,
        theme: &Theme,
        status: &StatusLine,
        scroll_top: usize,
    ) -> Frame {
        let buffer = state.document().buffer();
        let line_count = buffer.line_count();
        let last = (scroll_top + self.viewport_lines).min(line_count);

        let mut lines = Vec::with_capacity(last.saturating_sub(scroll_top));
        for row in scroll_top..last {
            lines.push(self.render_line(state, theme, row));
        }

        Frame {
            title: state.title(),
            lines,
            status: status.to_string(),
            message: state.status_message().to_string(),
            cursor: state.cursor(),
            scroll_top,
            dirty: state.document().is_dirty(),
        }
    }

    fn render_line(&self, state: &EditorState, theme: &Theme, row: usize) -> StyledLine {
        let buffer = state.document().buffer();
        let line = buffer.line(row).unwrap_or("");
        let line_start = buffer
            .offset_at(Position::new(row, 0))
            .unwrap_or(0);
        let line_end = line_start + line.len();

        let mut segments = Vec::new();
        let mut cursor = line_start;
        for span in state.spans() {
            // Spans never cross a line break, but a trailing '\r' may sit
            // past the line text; clamp to the visible range.
            let start = span.start.max(line_start);
            let end = span.end.min(line_end);
            if start >= end {
                continue;
            }
            if start > cursor {
                segments.push(Segment {
                    text: line[cursor - line_start..start - line_start].to_string(),
                    color: None,
                });
            }
            segments.push(Segment {
                text: line[start - line_start..end - line_start].to_string(),
                color: theme.color(span.kind),
            });
            cursor = end;
        }
        if cursor < line_end {
            segments.push(Segment {
                text: line[cursor - line_start..].to_string(),
                color: None,
            });
        }

        StyledLine { segments }
    }
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new(24)
    }
}
