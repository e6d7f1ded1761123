//! # Cairn
//!
//! An embedding-indexed similarity search library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Exact, deterministic brute-force top-k ranking
//! - Cosine similarity with a zero-magnitude-safe denominator
//! - Pluggable document stores and embedders
//! - Deterministic feature-hashing embedder for model-free use

pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod ranking;
pub mod search;
pub mod storage;
pub mod vector;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
