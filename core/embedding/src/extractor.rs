//! Seam to an external face-embedding backend.
//!
//! Detection, alignment, and the embedding model itself live outside this
//! crate. Callers construct a backend explicitly and pass it where needed;
//! nothing here is a process-wide singleton.

use crate::similarity::normalize;
use crate::vector::FloatVector;
use visagevault_common::{Error, Result};

/// A face-embedding backend.
///
/// Implementations may be slow or accelerator-backed; callers own the
/// handle and its lifecycle.
pub trait EmbeddingExtractor {
    /// Output dimensionality of every vector this backend produces.
    fn dimension(&self) -> usize;

    /// Extract an embedding from raw image bytes.
    ///
    /// # Returns
    /// - `Ok(Some(vector))` with a vector of `dimension()` elements
    /// - `Ok(None)` when no face is found in the image
    fn extract(&self, image: &[u8]) -> Result<Option<FloatVector>>;
}

/// Deterministic extractor for testing and development.
///
/// Spreads the image bytes across the requested number of lanes and
/// unit-normalizes the result, so equal inputs give equal embeddings and
/// similar inputs give similar embeddings. Inputs with no usable signal
/// (empty or all-zero) report no face.
pub struct StubExtractor {
    dimension: usize,
}

impl StubExtractor {
    /// Create a stub backend with the given output dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl EmbeddingExtractor for StubExtractor {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn extract(&self, image: &[u8]) -> Result<Option<FloatVector>> {
        if image.is_empty() || self.dimension == 0 {
            return Ok(None);
        }

        let mut lanes = vec![0.0f32; self.dimension];
        for (index, &byte) in image.iter().enumerate() {
            lanes[index % self.dimension] += f32::from(byte) / 255.0;
        }

        match normalize(&FloatVector::from(lanes)) {
            Ok(vector) => Ok(Some(vector)),
            Err(Error::DegenerateVector) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
