//! Binary serialization for embedding vectors.
//!
//! Layout: element count (u32, little-endian) || element-width marker
//! (u8: 4 = f32, 8 = f64) || raw little-endian float payload. The format
//! is self-describing and lossless: every bit pattern, including NaN and
//! the infinities, passes through unchanged.

use crate::vector::FloatVector;
use visagevault_common::{Error, Result};

/// Serialized header size: count (4 bytes) + width marker (1 byte).
pub const HEADER_LENGTH: usize = 5;

/// Width marker for single-precision elements.
pub const WIDTH_F32: u8 = 4;

/// Width marker for double-precision elements.
pub const WIDTH_F64: u8 = 8;

/// Serialize a vector to its byte representation.
pub fn serialize(vector: &FloatVector) -> Vec<u8> {
    let count = vector.len() as u32;
    let width = vector.element_width() as usize;

    let mut out = Vec::with_capacity(HEADER_LENGTH + vector.len() * width);
    out.extend_from_slice(&count.to_le_bytes());
    out.push(vector.element_width());

    match vector {
        FloatVector::F32(elements) => {
            for value in elements {
                out.extend_from_slice(&value.to_le_bytes());
            }
        }
        FloatVector::F64(elements) => {
            for value in elements {
                out.extend_from_slice(&value.to_le_bytes());
            }
        }
    }

    out
}

/// Deserialize a vector from its byte representation.
///
/// # Errors
/// - `MalformedPayload` if the header is truncated, the width marker is
///   unknown, or the payload length disagrees with the declared count
pub fn deserialize(bytes: &[u8]) -> Result<FloatVector> {
    if bytes.len() < HEADER_LENGTH {
        return Err(Error::MalformedPayload(format!(
            "truncated header: {} bytes, need {HEADER_LENGTH}",
            bytes.len()
        )));
    }

    let mut count_bytes = [0u8; 4];
    count_bytes.copy_from_slice(&bytes[..4]);
    let count = u32::from_le_bytes(count_bytes) as usize;
    let width = bytes[4];
    let payload = &bytes[HEADER_LENGTH..];

    let expected = count
        .checked_mul(usize::from(width))
        .ok_or_else(|| Error::MalformedPayload("payload length overflow".to_string()))?;
    if payload.len() != expected {
        return Err(Error::MalformedPayload(format!(
            "payload length {} does not match {count} elements of width {width}",
            payload.len()
        )));
    }

    match width {
        WIDTH_F32 => {
            let mut elements = Vec::with_capacity(count);
            for chunk in payload.chunks_exact(4) {
                elements.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
            }
            Ok(FloatVector::F32(elements))
        }
        WIDTH_F64 => {
            let mut elements = Vec::with_capacity(count);
            for chunk in payload.chunks_exact(8) {
                elements.push(f64::from_le_bytes([
                    chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6],
                    chunk[7],
                ]));
            }
            Ok(FloatVector::F64(elements))
        }
        other => Err(Error::MalformedPayload(format!(
            "unknown element width marker: {other}"
        ))),
    }
}
