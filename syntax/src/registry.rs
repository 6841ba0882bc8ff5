//! Language and extension lookup tables
//!
//! Both tables are injected configuration: hosts construct them (usually via
//! `with_defaults`) and pass them to whatever needs language resolution.
//! Lookups are total; anything unknown resolves to plain text.

use crate::grammar::{Grammar, PlainGrammar};
use crate::languages::{BatchGrammar, CssGrammar, HtmlGrammar, PythonGrammar};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Identifier selecting which tokenization rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LanguageId {
    /// Plain text sentinel: no classification beyond `Plain`
    Plain,
    Python,
    Html,
    Css,
    Batch,
}

impl LanguageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Plain => "plain",
            LanguageId::Python => "python",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Batch => "batch",
        }
    }
}

/// Table from file extension to language identifier
///
/// Extensions are stored and matched lowercase, without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMap {
    map: BTreeMap<String, LanguageId>,
}

impl ExtensionMap {
    /// An empty map; every lookup resolves to plain text
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// The stock mapping: py, html, css, bat, plus idk pinned to plain text
    pub fn with_defaults() -> Self {
        let mut map = Self::new();
        map.insert("py", LanguageId::Python);
        map.insert("html", LanguageId::Html);
        map.insert("css", LanguageId::Css);
        map.insert("bat", LanguageId::Batch);
        map.insert("idk", LanguageId::Plain);
        map
    }

    pub fn insert(&mut self, extension: &str, language: LanguageId) {
        self.map
            .insert(extension.trim_start_matches('.').to_lowercase(), language);
    }

    /// Resolve a path to a language; total, defaults to plain text
    pub fn language_for(&self, path: &Path) -> LanguageId {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.map.get(&ext.to_lowercase()))
            .copied()
            .unwrap_or(LanguageId::Plain)
    }
}

impl Default for ExtensionMap {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Table from language identifier to grammar
pub struct LanguageRegistry {
    grammars: BTreeMap<LanguageId, Box<dyn Grammar>>,
    plain: PlainGrammar,
}

impl LanguageRegistry {
    /// An empty registry; every language tokenizes as plain text
    pub fn new() -> Self {
        Self {
            grammars: BTreeMap::new(),
            plain: PlainGrammar,
        }
    }

    /// Registry with the stock grammars
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(LanguageId::Python, Box::new(PythonGrammar));
        registry.register(LanguageId::Html, Box::new(HtmlGrammar));
        registry.register(LanguageId::Css, Box::new(CssGrammar));
        registry.register(LanguageId::Batch, Box::new(BatchGrammar));
        registry
    }

    pub fn register(&mut self, language: LanguageId, grammar: Box<dyn Grammar>) {
        self.grammars.insert(language, grammar);
    }

    /// Grammar for a language; unregistered languages degrade to plain text
    pub fn grammar(&self, language: LanguageId) -> &dyn Grammar {
        self.grammars
            .get(&language)
            .map(|g| g.as_ref())
            .unwrap_or(&self.plain)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
