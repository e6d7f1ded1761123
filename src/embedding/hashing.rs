//! Deterministic feature-hashing embedder.
//!
//! This embedder maps word unigrams into a fixed number of buckets with a
//! seeded hash, using one hash bit as the sign (classic feature hashing).
//! It needs no model weights and always produces the same vector for the
//! same text, which makes it suitable as an offline fallback and for tests.
//!
//! Hash collisions make this a rough semantic signal at best; use a real
//! model-backed [`Embedder`] when quality matters.

use ahash::RandomState;
use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::embedding::embedder::Embedder;
use crate::error::{CairnError, Result};
use crate::vector::Vector;

// Fixed seeds: the whole point of this embedder is reproducibility.
const HASH_SEEDS: (u64, u64, u64, u64) = (
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0x2545_f491_4f6c_dd1d,
);

/// An embedder that hashes word features into a fixed-dimensionality vector.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
    state: RandomState,
}

impl HashingEmbedder {
    /// Default vector dimensionality.
    pub const DEFAULT_DIMENSION: usize = 256;

    /// Create a new hashing embedder with the given dimensionality.
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(CairnError::invalid_argument(
                "embedding dimension must be positive",
            ));
        }
        Ok(Self {
            dimension,
            state: RandomState::with_seeds(HASH_SEEDS.0, HASH_SEEDS.1, HASH_SEEDS.2, HASH_SEEDS.3),
        })
    }

    fn embed_text(&self, text: &str) -> Vector {
        let mut data = vec![0.0f32; self.dimension];

        for word in text.unicode_words() {
            let hash = self.state.hash_one(word.to_lowercase());
            let bucket = (hash % self.dimension as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            data[bucket] += sign;
        }

        // Unit length keeps hash embeddings comparable across text lengths.
        let mut vector = Vector::new(data);
        vector.normalize();
        vector
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSION).expect("default dimension is positive")
    }
}

#[async_trait]
impl Embedder for HashingEmbedder {
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vector>> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "HashingEmbedder"
    }
}
