//! Decoding of raw frames as delivered by a transport.

use alloc::vec::Vec;

use crate::error::{AnalysisError, Result};

/// Decodes a payload of little endian 32 bit float PCM samples.
pub fn decode_le_f32(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return Err(AnalysisError::MisalignedPayload { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}
