//! # Editor Core
//!
//! Pure document model shared by the editor service and its tests.
//!
//! ## Philosophy
//!
//! - **Byte-exact**: the buffer stores the document verbatim; loading a file
//!   and saving it back reproduces identical bytes
//! - **Deterministic**: same edit trace => same document state
//! - **Mechanism over policy**: the core provides editing primitives over a
//!   line/column address space, hosts decide rendering and I/O
//!
//! ## Design
//!
//! The core provides:
//! - TextBuffer: verbatim text with line/column addressing
//! - Document: buffer plus optional path association and dirty tracking
//! - DocumentSnapshot: serializable state for parity testing

pub mod buffer;
pub mod document;
pub mod snapshot;

pub use buffer::{Position, TextBuffer};
pub use document::Document;
pub use snapshot::DocumentSnapshot;
