//! # Editor Service
//!
//! The editing session behind the ScriptPad shell.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: the shell feeds typed editor events, the service
//!   answers with typed actions (prompt for a path, saved, quit, ...)
//! - **Injected configuration**: extension mappings and grammars come in at
//!   construction, so tests can substitute their own tables
//! - **Pure derivations**: status line and view frame are computed from
//!   state, never accumulated through side effects
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A multi-buffer or tabbed editor
//! - An undo system
//! - An incremental tokenizer; every change re-tokenizes the document
//!
//! ## Design
//!
//! - Editor: event -> action state machine over a single document
//! - EditorIo: I/O seam with a filesystem impl and an in-memory test double
//! - StatusLine: pure derivation of the status bar fields
//! - EditorView: renders state into a styled frame for the host to paint

pub mod editor;
pub mod io;
pub mod render;
pub mod state;
pub mod status;

pub use editor::{Editor, EditorAction, EditorError, EditorEvent};
pub use io::{EditorIo, FsEditorIo, IoError, MemoryEditorIo};
pub use render::{EditorView, Frame, Segment, StyledLine};
pub use state::EditorState;
pub use status::{EolStyle, StatusConfig, StatusLine};
