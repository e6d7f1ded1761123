//! Document persistence boundary.
//!
//! The ranking engine only depends on [`DocumentStore::fetch_all`]; creation
//! and lookup serve the surrounding ingestion and retrieval layers.

pub mod memory;

use std::fmt::Debug;

use crate::document::{Document, DocumentDraft};
use crate::error::Result;
use crate::vector::Vector;

/// Persistence contract for document entries.
///
/// Implementations must be `Send + Sync`; each call operates on one coherent
/// snapshot of the stored entries and is indifferent to writes that land
/// afterward.
pub trait DocumentStore: Send + Sync + Debug {
    /// Return every currently persisted document.
    ///
    /// An empty corpus yields an empty vector, never an error.
    fn fetch_all(&self) -> Result<Vec<Document>>;

    /// Persist drafts with their embeddings, assigning identifiers.
    ///
    /// Returns the created documents in input order, ids populated.
    fn create(&self, entries: Vec<(DocumentDraft, Vector)>) -> Result<Vec<Document>>;

    /// Look up a single document by id.
    ///
    /// Absence is a normal outcome (`None`), not an error.
    fn get_by_id(&self, id: u64) -> Result<Option<Document>>;
}
