//! Cosine similarity and the verdict-classification policy.

use std::fmt;

use crate::vector::FloatVector;
use visagevault_common::{Error, Result};

/// Scores strictly above this are classified as highly similar.
pub const HIGH_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Scores strictly above this (and at most the high threshold) are
/// classified as moderately similar.
pub const MODERATE_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Discrete classification of a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Score above 0.8: almost certainly the same subject.
    HighlySimilar,
    /// Score in (0.5, 0.8]: plausibly the same subject.
    ModeratelySimilar,
    /// Score at or below 0.5.
    Different,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::HighlySimilar => write!(f, "Highly similar"),
            Verdict::ModeratelySimilar => write!(f, "Moderate similarity"),
            Verdict::Different => write!(f, "Different persons"),
        }
    }
}

/// A verdict together with the score that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    pub score: f64,
    pub verdict: Verdict,
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (similarity: {:.4})", self.verdict, self.score)
    }
}

/// Compute the cosine similarity `dot(a,b) / (|a| * |b|)`.
///
/// Accumulates in f64 regardless of the stored precision, so vectors of
/// mixed precision compare cleanly.
///
/// # Errors
/// - `DimensionMismatch` if the vectors differ in length
/// - `DegenerateVector` if either vector has zero norm (the similarity is
///   undefined there; it is reported as an error, never as NaN)
pub fn cosine_similarity(a: &FloatVector, b: &FloatVector) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter_f64().zip(b.iter_f64()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(Error::DegenerateVector);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Map a similarity score to its verdict.
///
/// The thresholds are fixed policy constants: strictly above 0.8 is highly
/// similar, strictly above 0.5 is moderately similar, everything else is
/// different.
pub fn classify(score: f64) -> Verdict {
    if score > HIGH_SIMILARITY_THRESHOLD {
        Verdict::HighlySimilar
    } else if score > MODERATE_SIMILARITY_THRESHOLD {
        Verdict::ModeratelySimilar
    } else {
        Verdict::Different
    }
}

/// Compare two vectors: cosine similarity plus its verdict.
pub fn classify_pair(a: &FloatVector, b: &FloatVector) -> Result<Similarity> {
    let score = cosine_similarity(a, b)?;
    Ok(Similarity {
        score,
        verdict: classify(score),
    })
}

/// Scale a vector to unit L2 norm, in its own precision.
///
/// # Errors
/// - `DegenerateVector` if the vector has zero norm
pub fn normalize(vector: &FloatVector) -> Result<FloatVector> {
    let norm: f64 = vector.iter_f64().map(|x| x * x).sum::<f64>().sqrt();
    if norm == 0.0 {
        return Err(Error::DegenerateVector);
    }

    Ok(match vector {
        FloatVector::F32(elements) => {
            let norm = norm as f32;
            FloatVector::F32(elements.iter().map(|x| x / norm).collect())
        }
        FloatVector::F64(elements) => {
            FloatVector::F64(elements.iter().map(|x| x / norm).collect())
        }
    })
}
