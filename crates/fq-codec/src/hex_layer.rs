//! Hex layer: repeated lowercase hex encoding.

use fq_core::{FucqError, Result};

/// Valid hex for decoding: even length, lowercase digits only.
pub fn is_lower_hex(data: &[u8]) -> bool {
    data.len() % 2 == 0 && data.iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Hex-encode `data` `layers` times.
pub fn encode(data: &[u8], layers: usize) -> Vec<u8> {
    let mut encoded = data.to_vec();
    for _ in 0..layers {
        encoded = hex::encode(&encoded).into_bytes();
    }
    encoded
}

/// Hex-decode up to `layers` times, stopping at the first pass that is not
/// valid hex. The buffer from the last good pass is returned.
pub fn decode(data: &[u8], layers: usize) -> Vec<u8> {
    let mut decoded = data.to_vec();
    for _ in 0..layers {
        if !is_lower_hex(&decoded) {
            break;
        }
        match hex::decode(&decoded) {
            Ok(next) => decoded = next,
            Err(_) => break,
        }
    }
    decoded
}

/// Hex-decode exactly `layers` times; any pass that fails is an error.
pub fn decode_exact(data: &[u8], layers: usize) -> Result<Vec<u8>> {
    let mut decoded = data.to_vec();
    for pass in 1..=layers {
        if !is_lower_hex(&decoded) {
            return Err(FucqError::FrameCorrupt(format!(
                "hex layer {pass} of {layers} is not lowercase hex"
            )));
        }
        decoded = hex::decode(&decoded)
            .map_err(|e| FucqError::FrameCorrupt(format!("hex layer {pass} of {layers}: {e}")))?;
    }
    Ok(decoded)
}
