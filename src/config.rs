//! Configuration for search operations.

use serde::{Deserialize, Serialize};

/// Configuration resolved by the search service before ranking.
///
/// The ranking engine itself never reads configuration; the service resolves
/// a concrete `top_k` from this before each call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of results to return when the caller does not supply `top_k`.
    pub default_top_k: usize,
    /// Whether to L2-normalize embeddings once at ingestion.
    ///
    /// Scoring recomputes norms either way, so this only changes the stored
    /// representation, never the scores.
    pub normalize_on_ingest: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_k: 5,
            normalize_on_ingest: true,
        }
    }
}
