//! Exact top-k similarity ranking over stored documents.
//!
//! The ranking engine is a pure function of its inputs: it performs no I/O,
//! holds no state, and never logs. Given a query vector and a snapshot of
//! stored documents, it scores every document with cosine similarity and
//! returns the top-k in descending score order.
//!
//! Determinism guarantees:
//! - Each pairwise score uses a single sequential summation order.
//! - The sort is stable, so equal scores keep their input order.
//! - Repeated calls with identical inputs produce identical output.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{CairnError, Result};
use crate::vector::{Vector, cosine_similarity};

/// Entry count above which scoring fans out across threads.
///
/// Below this a sequential scan wins; either path scores each pair with the
/// same summation order and preserves entry order, so results are identical.
const PARALLEL_SCORING_THRESHOLD: usize = 1024;

/// A single ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Identifier of the matched document.
    pub id: u64,
    /// Title of the matched document.
    pub title: String,
    /// Raw cosine similarity score (higher is more similar).
    pub score: f32,
}

/// Rank documents against a query vector, returning the top `top_k`.
///
/// Semantics:
/// - An empty `entries` slice returns an empty result, with no vector math.
/// - An empty `query` vector is a data-integrity error.
/// - Any entry whose embedding dimensionality differs from the query's fails
///   the whole call; entries are never silently skipped, since a partially
///   ranked result set would look complete while not being comparable.
/// - `top_k` is clamped to the entry count; scores are emitted raw.
///
/// Callers resolve `top_k` (e.g. from a configured default) before calling;
/// the engine always requires an explicit value.
pub fn rank(query: &Vector, entries: &[Document], top_k: usize) -> Result<Vec<RankedResult>> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }
    if query.data.is_empty() {
        return Err(CairnError::empty_vector("query vector has zero length"));
    }

    let scores = score_entries(query, entries)?;

    // Stable sort over indices: ties keep insertion order.
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });

    let k = top_k.min(entries.len());
    Ok(order[..k]
        .iter()
        .map(|&i| RankedResult {
            id: entries[i].id,
            title: entries[i].title.clone(),
            score: scores[i],
        })
        .collect())
}

/// Score every entry against the query, in entry order.
///
/// The first dimensionality mismatch aborts the whole scan.
fn score_entries(query: &Vector, entries: &[Document]) -> Result<Vec<f32>> {
    if entries.len() < PARALLEL_SCORING_THRESHOLD {
        entries
            .iter()
            .map(|entry| score_entry(query, entry))
            .collect()
    } else {
        entries
            .par_iter()
            .map(|entry| score_entry(query, entry))
            .collect()
    }
}

fn score_entry(query: &Vector, entry: &Document) -> Result<f32> {
    cosine_similarity(&query.data, &entry.embedding.data)
}
