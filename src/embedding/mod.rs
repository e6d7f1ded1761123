//! Embedding generation boundary.
//!
//! The search core treats embedding generation as a black box behind the
//! [`Embedder`] trait: text in, fixed-dimensionality finite vectors out.
//! An embedder is constructed once and injected (`Arc<dyn Embedder>`) into
//! every consumer that needs it; there is no process-wide singleton.

pub mod embedder;
pub mod hashing;

pub use embedder::Embedder;
pub use hashing::HashingEmbedder;
