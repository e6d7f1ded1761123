//! Document types shared by the store, the ranking engine, and ingestion.

use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// A stored document with its embedding.
///
/// The identifier is assigned by the store at creation time and is immutable
/// and unique within the store. The embedding is produced once at ingestion
/// and never recomputed or mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Full text content.
    pub content: String,
    /// Embedding of the document content.
    pub embedding: Vector,
}

impl Document {
    /// Create a new document.
    pub fn new(id: u64, title: String, content: String, embedding: Vector) -> Self {
        Self {
            id,
            title,
            content,
            embedding,
        }
    }
}

/// A document before it has been embedded and persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDraft {
    /// Display title.
    pub title: String,
    /// Full text content.
    pub content: String,
}

impl DocumentDraft {
    /// Create a new document draft.
    pub fn new<S: Into<String>>(title: S, content: S) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
