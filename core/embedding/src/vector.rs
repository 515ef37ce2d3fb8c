//! The float vector type produced by an embedding backend.

/// An ordered sequence of IEEE-754 floats in single or double precision.
///
/// The precision is part of the value: it determines the element-width
/// marker in the serialized form, and round-trips exactly. Dimensionality
/// is fixed by whatever backend produced the vector.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatVector {
    /// Single-precision elements.
    F32(Vec<f32>),
    /// Double-precision elements.
    F64(Vec<f64>),
}

impl FloatVector {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            FloatVector::F32(v) => v.len(),
            FloatVector::F64(v) => v.len(),
        }
    }

    /// Check if the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of one element in bytes (4 or 8).
    pub fn element_width(&self) -> u8 {
        match self {
            FloatVector::F32(_) => 4,
            FloatVector::F64(_) => 8,
        }
    }

    /// Iterate over the elements widened to f64.
    ///
    /// Widening from f32 is exact, so arithmetic over this iterator is
    /// lossless regardless of the stored precision.
    pub fn iter_f64(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            FloatVector::F32(v) => Box::new(v.iter().map(|&x| f64::from(x))),
            FloatVector::F64(v) => Box::new(v.iter().copied()),
        }
    }
}

impl From<Vec<f32>> for FloatVector {
    fn from(elements: Vec<f32>) -> Self {
        FloatVector::F32(elements)
    }
}

impl From<Vec<f64>> for FloatVector {
    fn from(elements: Vec<f64>) -> Self {
        FloatVector::F64(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_width() {
        let single = FloatVector::from(vec![1.0f32, 2.0, 3.0]);
        assert_eq!(single.len(), 3);
        assert_eq!(single.element_width(), 4);

        let double = FloatVector::from(vec![1.0f64]);
        assert_eq!(double.len(), 1);
        assert_eq!(double.element_width(), 8);
    }

    #[test]
    fn test_iter_f64_widens_exactly() {
        let v = FloatVector::from(vec![0.5f32, -2.25, 3.0]);
        let widened: Vec<f64> = v.iter_f64().collect();
        assert_eq!(widened, vec![0.5, -2.25, 3.0]);
    }

    #[test]
    fn test_empty() {
        let v = FloatVector::from(Vec::<f32>::new());
        assert!(v.is_empty());
        assert_eq!(v.iter_f64().count(), 0);
    }
}
