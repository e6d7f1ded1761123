//! Unified embedder trait for text embedding.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;
use crate::vector::Vector;

/// Unified embedder trait for text embedding.
///
/// Implementations turn texts into fixed-dimensionality vectors, one output
/// per input and in the same order. The core only requires that outputs are
/// finite vectors of [`Embedder::dimension`] length; how they are produced is
/// the implementation's business (a local model, a remote service, or the
/// deterministic hashing fallback in this crate).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to support concurrent embedding
/// operations across multiple threads.
#[async_trait]
pub trait Embedder: Send + Sync + Debug {
    /// Embed a batch of texts, returning one vector per input in input order.
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vector>>;

    /// The dimensionality of every vector this embedder produces.
    fn dimension(&self) -> usize;

    /// Get the name of this embedder.
    fn name(&self) -> &str;
}
