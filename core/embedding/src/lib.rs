//! Embedding vectors and the operations defined over them.
//!
//! This module provides:
//! - A self-describing float vector type in single or double precision
//! - A stable little-endian binary codec for vectors
//! - Cosine similarity with a fixed verdict-classification policy
//! - The seam to an external face-embedding backend

pub mod codec;
pub mod extractor;
pub mod similarity;
pub mod vector;

pub use extractor::{EmbeddingExtractor, StubExtractor};
pub use similarity::{
    classify, classify_pair, cosine_similarity, normalize, Similarity, Verdict,
    HIGH_SIMILARITY_THRESHOLD, MODERATE_SIMILARITY_THRESHOLD,
};
pub use vector::FloatVector;
