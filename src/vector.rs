//! Dense vector representation and the cosine scoring contract.
//!
//! This module provides the core numeric types for similarity search:
//! - [`Vector`], a fixed-dimensionality dense vector of `f32` values
//! - [`cosine_similarity`], the scoring function used by the ranking engine
//!
//! Norms are always recomputed at scoring time. Callers may normalize vectors
//! at ingestion, but the scoring contract never assumes they did: a raw vector
//! slipping through ingestion must still score correctly.

use serde::{Deserialize, Serialize};

use crate::error::{CairnError, Result};

/// Denominator stabilizer for cosine similarity.
///
/// Added to the product of the two norms so a zero-magnitude vector saturates
/// the score toward zero instead of producing NaN or infinity. It is never
/// applied to the numerator.
pub const SCORE_EPSILON: f32 = 1e-10;

/// A dense vector representation for similarity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// The vector dimensions as floating point values.
    pub data: Vec<f32>,
}

impl Vector {
    /// Create a new vector with the given dimensions.
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Get the dimensionality of this vector.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Calculate the L2 norm (magnitude) of this vector.
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Normalize this vector to unit length.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for value in &mut self.data {
                *value /= norm;
            }
        }
    }

    /// Get a normalized copy of this vector.
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.normalize();
        normalized
    }

    /// Check if this vector contains any NaN or infinite values.
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    /// Validate that this vector has the expected dimension.
    pub fn validate_dimension(&self, expected_dim: usize) -> Result<()> {
        if self.data.len() != expected_dim {
            return Err(CairnError::dimension_mismatch(
                expected_dim,
                self.data.len(),
            ));
        }
        Ok(())
    }
}

/// Calculate the cosine similarity between two vectors.
///
/// The score is `(a · b) / (‖a‖ · ‖b‖ + ε)` with ε = [`SCORE_EPSILON`]. The
/// result is returned raw: it is not clamped or rounded, and ranges nominally
/// in [-1, 1] with higher meaning more similar.
///
/// Both inputs must be non-empty and share one dimensionality; anything else
/// is a data-integrity error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.is_empty() || b.is_empty() {
        return Err(CairnError::empty_vector(
            "cosine similarity requires non-empty vectors",
        ));
    }
    if a.len() != b.len() {
        return Err(CairnError::dimension_mismatch(a.len(), b.len()));
    }

    // Single sequential evaluation order keeps repeated calls bit-identical.
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt() + SCORE_EPSILON))
}
