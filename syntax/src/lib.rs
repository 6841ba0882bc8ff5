//! # Syntax
//!
//! Tokenization and highlighting for the editor.
//!
//! ## Philosophy
//!
//! - **Injected tables**: grammars and extension mappings are configuration
//!   passed in at construction, never hidden globals
//! - **Pure highlighting**: spans are computed from text and tokens alone;
//!   hosts decide how spans are painted
//! - **Degrade, never fail**: an unknown language tokenizes as plain text
//!
//! ## Design
//!
//! - Token / TokenKind: classified spans of source text
//! - Grammar: per-language scanners producing lazy, restartable token streams
//! - LanguageRegistry + ExtensionMap: injected lookup tables
//! - highlight_spans: (text, tokens) -> byte-offset style spans
//! - Theme: token kind -> display color, configured once

pub mod grammar;
pub mod highlight;
pub mod languages;
pub mod registry;
pub mod theme;
pub mod token;

pub use grammar::{tokenize, Grammar, PlainGrammar};
pub use highlight::{highlight_spans, StyleSpan};
pub use registry::{ExtensionMap, LanguageId, LanguageRegistry};
pub use theme::{Rgb, Theme};
pub use token::{Token, TokenKind};
