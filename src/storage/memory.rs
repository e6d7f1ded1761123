//! In-memory document store implementation.

use parking_lot::RwLock;

use crate::document::{Document, DocumentDraft};
use crate::error::{CairnError, Result};
use crate::storage::DocumentStore;
use crate::vector::Vector;

/// An in-memory document store.
///
/// Documents are kept in insertion order with sequential ids starting at 1.
/// The shared-dimensionality invariant is enforced at `create` time: the
/// first inserted embedding fixes the store's dimensionality and every later
/// insert must match it.
///
/// `fetch_all` clones the current entries, so each caller gets one coherent
/// snapshot that concurrent writes cannot mutate mid-scan.
#[derive(Debug)]
pub struct MemoryDocumentStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    documents: Vec<Document>,
    next_id: u64,
    dimension: Option<usize>,
}

impl MemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                documents: Vec::new(),
                next_id: 1,
                dimension: None,
            }),
        }
    }

    /// Get the number of stored documents.
    pub fn len(&self) -> usize {
        self.inner.read().documents.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().documents.is_empty()
    }

    /// The dimensionality shared by all stored embeddings, if any exist.
    pub fn dimension(&self) -> Option<usize> {
        self.inner.read().dimension
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn fetch_all(&self) -> Result<Vec<Document>> {
        Ok(self.inner.read().documents.clone())
    }

    fn create(&self, entries: Vec<(DocumentDraft, Vector)>) -> Result<Vec<Document>> {
        let mut inner = self.inner.write();

        // Validate the whole batch before assigning any ids, so a failed
        // create leaves the store untouched.
        let mut expected = inner.dimension;
        for (_, embedding) in &entries {
            if embedding.data.is_empty() {
                return Err(CairnError::empty_vector(
                    "document embedding has zero length",
                ));
            }
            if !embedding.is_valid() {
                return Err(CairnError::storage(
                    "document embedding contains NaN or infinite values",
                ));
            }
            match expected {
                Some(dim) => embedding.validate_dimension(dim)?,
                None => expected = Some(embedding.dimension()),
            }
        }

        let mut created = Vec::with_capacity(entries.len());
        for (draft, embedding) in entries {
            if inner.dimension.is_none() {
                inner.dimension = Some(embedding.dimension());
            }
            let id = inner.next_id;
            inner.next_id += 1;
            let document = Document::new(id, draft.title, draft.content, embedding);
            inner.documents.push(document.clone());
            created.push(document);
        }

        Ok(created)
    }

    fn get_by_id(&self, id: u64) -> Result<Option<Document>> {
        Ok(self
            .inner
            .read()
            .documents
            .iter()
            .find(|doc| doc.id == id)
            .cloned())
    }
}
