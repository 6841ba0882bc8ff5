//! Document snapshot for deterministic parity testing

use crate::{Document, Position};
use serde::{Deserialize, Serialize};

/// Complete document state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub content: String,
    pub cursor: Position,
    pub path_label: Option<String>,
    pub dirty: bool,
}

impl DocumentSnapshot {
    /// Capture a document and cursor into a snapshot
    pub fn capture(document: &Document, cursor: Position) -> Self {
        Self {
            content: document.content().to_string(),
            cursor,
            path_label: document.path().map(|p| p.display().to_string()),
            dirty: document.is_dirty(),
        }
    }

    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        hasher.update([0]);
        hasher.update(self.cursor.row.to_le_bytes());
        hasher.update(self.cursor.col.to_le_bytes());
        if let Some(label) = &self.path_label {
            hasher.update(label.as_bytes());
        }
        hasher.update([self.dirty as u8]);

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        let mut doc = Document::new();
        doc.replace("hello\nworld".into(), None);
        doc
    }

    #[test]
    fn test_capture_reflects_document() {
        let doc = sample_document();
        let snapshot = DocumentSnapshot::capture(&doc, Position::new(1, 2));

        assert_eq!(snapshot.content, "hello\nworld");
        assert_eq!(snapshot.cursor, Position::new(1, 2));
        assert_eq!(snapshot.path_label, None);
        assert!(!snapshot.dirty);
    }

    #[test]
    fn test_snapshot_hash_deterministic() {
        let doc = sample_document();
        let snapshot = DocumentSnapshot::capture(&doc, Position::zero());

        assert_eq!(snapshot.hash(), snapshot.hash());
    }

    #[test]
    fn test_snapshot_hash_differs_for_different_state() {
        let doc = sample_document();
        let a = DocumentSnapshot::capture(&doc, Position::zero());
        let b = DocumentSnapshot::capture(&doc, Position::new(0, 1));

        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_identical_edit_traces_produce_identical_snapshots() {
        let run = || {
            let mut doc = Document::new();
            let mut cursor = Position::zero();
            for ch in "def f():".chars() {
                doc.insert_char(cursor, ch);
                cursor.col += ch.len_utf8();
            }
            doc.insert_newline(cursor);
            cursor = Position::new(1, 0);
            DocumentSnapshot::capture(&doc, cursor)
        };

        let a = run();
        let b = run();
        assert_eq!(a, b);
        assert_eq!(a.hash(), b.hash());
    }
}
