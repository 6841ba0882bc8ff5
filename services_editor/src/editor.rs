//! Main editor state machine
//!
//! The shell feeds typed events; the editor answers with typed actions.
//! Anything touching the filesystem goes through the injected `EditorIo`,
//! and grammar/extension resolution goes through the injected tables, so
//! the whole machine runs under test without a display or a disk.

use crate::io::{EditorIo, IoError};
use crate::state::EditorState;
use crate::status::{StatusConfig, StatusLine};
use editor_core::Position;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use syntax::{ExtensionMap, LanguageRegistry};
use thiserror::Error;
use tracing::{debug, info};

/// Editor error
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

/// A typed input event for the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Pointer placement: clamped into the document
    CursorTo(Position),
    Open(PathBuf),
    Save,
    SaveAs(PathBuf),
    Quit,
}

/// Editor action result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorAction {
    /// Continue editing
    Continue,
    /// Quit the editor
    Quit,
    /// Untitled document: the shell must ask for a destination path
    PromptSaveAs,
    /// Document was written to the path
    Saved(PathBuf),
    /// Document was loaded from the path
    Loaded(PathBuf),
}

/// The editor service
pub struct Editor {
    state: EditorState,
    io: Box<dyn EditorIo>,
    extensions: ExtensionMap,
    registry: LanguageRegistry,
    status_config: StatusConfig,
}

impl Editor {
    /// Editor with the stock grammar and extension tables
    pub fn new(io: Box<dyn EditorIo>) -> Self {
        Self::with_tables(
            io,
            ExtensionMap::with_defaults(),
            LanguageRegistry::with_defaults(),
        )
    }

    /// Editor with injected lookup tables
    pub fn with_tables(
        io: Box<dyn EditorIo>,
        extensions: ExtensionMap,
        registry: LanguageRegistry,
    ) -> Self {
        Self {
            state: EditorState::new(),
            io,
            extensions,
            registry,
            status_config: StatusConfig::default(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn status_config(&self) -> &StatusConfig {
        &self.status_config
    }

    pub fn set_status_config(&mut self, config: StatusConfig) {
        self.status_config = config;
    }

    /// Derive the status line for the current state
    pub fn status(&self) -> StatusLine {
        StatusLine::derive(
            self.state.document(),
            self.state.cursor(),
            &self.status_config,
        )
    }

    /// Process one event
    ///
    /// On error the document is left exactly as it was; the shell reports
    /// the failure to the user.
    pub fn process(&mut self, event: EditorEvent) -> Result<EditorAction, EditorError> {
        match event {
            EditorEvent::Insert(ch) => {
                if self.state.insert_char(ch) {
                    self.state.rehighlight(&self.registry);
                }
                Ok(EditorAction::Continue)
            }
            EditorEvent::Newline => {
                if self.state.insert_newline() {
                    self.state.rehighlight(&self.registry);
                }
                Ok(EditorAction::Continue)
            }
            EditorEvent::Backspace => {
                if self.state.backspace() {
                    self.state.rehighlight(&self.registry);
                }
                Ok(EditorAction::Continue)
            }
            EditorEvent::Delete => {
                if self.state.delete() {
                    self.state.rehighlight(&self.registry);
                }
                Ok(EditorAction::Continue)
            }
            EditorEvent::CursorLeft => {
                self.state.move_left();
                Ok(EditorAction::Continue)
            }
            EditorEvent::CursorRight => {
                self.state.move_right();
                Ok(EditorAction::Continue)
            }
            EditorEvent::CursorUp => {
                self.state.move_up();
                Ok(EditorAction::Continue)
            }
            EditorEvent::CursorDown => {
                self.state.move_down();
                Ok(EditorAction::Continue)
            }
            EditorEvent::CursorTo(pos) => {
                self.state.set_cursor(pos);
                Ok(EditorAction::Continue)
            }
            EditorEvent::Open(path) => {
                let content = self.io.load(&path)?;
                let language = self.extensions.language_for(&path);
                info!(
                    path = %path.display(),
                    language = language.as_str(),
                    chars = content.chars().count(),
                    "loaded document"
                );
                self.state
                    .load(content, path.clone(), language, &self.registry);
                Ok(EditorAction::Loaded(path))
            }
            EditorEvent::Save => match self.state.document().path() {
                None => Ok(EditorAction::PromptSaveAs),
                Some(path) => {
                    let path = path.to_path_buf();
                    self.write_out(&path)?;
                    Ok(EditorAction::Saved(path))
                }
            },
            EditorEvent::SaveAs(path) => {
                self.write_out(&path)?;
                self.state.document_mut().associate_path(path.clone());
                let language = self.extensions.language_for(&path);
                if language != self.state.language() {
                    debug!(language = language.as_str(), "language changed with new path");
                    self.state.set_language(language);
                    self.state.rehighlight(&self.registry);
                }
                Ok(EditorAction::Saved(path))
            }
            EditorEvent::Quit => Ok(EditorAction::Quit),
        }
    }

    fn write_out(&mut self, path: &std::path::Path) -> Result<(), EditorError> {
        self.io.save(path, self.state.document().content())?;
        self.state.document_mut().mark_saved();
        info!(path = %path.display(), "saved document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryEditorIo;

    fn editor_with(io: MemoryEditorIo) -> Editor {
        Editor::new(Box::new(io))
    }

    fn type_text(editor: &mut Editor, text: &str) {
        for ch in text.chars() {
            let event = if ch == '\n' {
                EditorEvent::Newline
            } else {
                EditorEvent::Insert(ch)
            };
            editor.process(event).unwrap();
        }
    }

    #[test]
    fn test_typing_updates_document_and_cursor() {
        let mut editor = editor_with(MemoryEditorIo::new());
        type_text(&mut editor, "hi\nbye");

        assert_eq!(editor.state().document().content(), "hi\nbye");
        assert_eq!(editor.state().cursor(), Position::new(1, 3));
        assert!(editor.state().document().is_dirty());
    }

    #[test]
    fn test_save_untitled_prompts_once_then_silent() {
        let mut editor = editor_with(MemoryEditorIo::new());
        type_text(&mut editor, "hello");

        // First save of an untitled buffer must ask for a destination.
        let action = editor.process(EditorEvent::Save).unwrap();
        assert_eq!(action, EditorAction::PromptSaveAs);

        let path = PathBuf::from("/notes.txt");
        let action = editor.process(EditorEvent::SaveAs(path.clone())).unwrap();
        assert_eq!(action, EditorAction::Saved(path.clone()));
        assert!(!editor.state().document().is_dirty());

        // Further saves go to the associated path without prompting.
        type_text(&mut editor, "!");
        let action = editor.process(EditorEvent::Save).unwrap();
        assert_eq!(action, EditorAction::Saved(path));
    }

    #[test]
    fn test_open_selects_language_from_extension() {
        let io = MemoryEditorIo::new().with_file("/s/script.py", "def f():\n    pass\n");
        let mut editor = editor_with(io);

        let action = editor
            .process(EditorEvent::Open(PathBuf::from("/s/script.py")))
            .unwrap();
        assert_eq!(action, EditorAction::Loaded(PathBuf::from("/s/script.py")));
        assert_eq!(editor.state().language(), syntax::LanguageId::Python);
        assert!(editor
            .state()
            .spans()
            .iter()
            .any(|s| s.kind == syntax::TokenKind::Keyword));
    }

    #[test]
    fn test_open_unknown_extension_is_plain() {
        let io = MemoryEditorIo::new().with_file("/notes.idk", "def f():");
        let mut editor = editor_with(io);

        editor
            .process(EditorEvent::Open(PathBuf::from("/notes.idk")))
            .unwrap();
        assert_eq!(editor.state().language(), syntax::LanguageId::Plain);
        assert!(editor
            .state()
            .spans()
            .iter()
            .all(|s| s.kind == syntax::TokenKind::Plain));
    }

    #[test]
    fn test_failed_open_leaves_buffer_unchanged() {
        let mut editor = editor_with(MemoryEditorIo::new());
        type_text(&mut editor, "work in progress");

        let result = editor.process(EditorEvent::Open(PathBuf::from("/missing.txt")));
        assert!(matches!(result, Err(EditorError::Io(IoError::NotFound(_)))));
        assert_eq!(editor.state().document().content(), "work in progress");
        assert!(editor.state().document().is_untitled());
    }

    #[test]
    fn test_failed_save_propagates_and_keeps_dirty() {
        let mut editor = editor_with(MemoryEditorIo::new().failing_saves());
        type_text(&mut editor, "x");

        let result = editor.process(EditorEvent::SaveAs(PathBuf::from("/x.txt")));
        assert!(matches!(
            result,
            Err(EditorError::Io(IoError::PermissionDenied(_)))
        ));
        assert!(editor.state().document().is_dirty());
        assert!(editor.state().document().is_untitled());
    }

    #[test]
    fn test_save_as_switches_language() {
        let mut editor = editor_with(MemoryEditorIo::new());
        type_text(&mut editor, "def f(): pass");

        editor
            .process(EditorEvent::SaveAs(PathBuf::from("/f.py")))
            .unwrap();
        assert_eq!(editor.state().language(), syntax::LanguageId::Python);
        assert!(editor
            .state()
            .spans()
            .iter()
            .any(|s| s.kind == syntax::TokenKind::Keyword));
    }

    #[test]
    fn test_status_reflects_state_after_events() {
        let io = MemoryEditorIo::new().with_file("/abc.txt", "abc");
        let mut editor = editor_with(io);
        editor
            .process(EditorEvent::Open(PathBuf::from("/abc.txt")))
            .unwrap();

        let status = editor.status();
        assert_eq!(status.char_count, 3);
        assert_eq!(status.line, 1);
        assert_eq!(status.column, 1);
    }

    #[test]
    fn test_quit() {
        let mut editor = editor_with(MemoryEditorIo::new());
        assert_eq!(editor.process(EditorEvent::Quit).unwrap(), EditorAction::Quit);
    }
}
