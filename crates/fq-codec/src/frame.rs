//! Frame codec: compact string + code map → deflate → lowercase hex.
//!
//! Payload layout before compression:
//!
//! ```text
//! <compact>;a=<form>/b=<form>/...
//! ```
//!
//! Entries are tagged with their symbol and listed in alphabet order.

use anyhow::Context;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use fq_core::{FucqError, Result};
use std::io::{Read, Write};

use crate::alphabet::CodeMap;
use crate::hex_layer;

/// Separates the compact string from the map blob.
pub const DATA_SEPARATOR: &str = ";";
/// Separates map entries.
pub const ENTRY_SEPARATOR: &str = "/";
/// Separates a symbol from its form within an entry.
pub const TAG_SEPARATOR: &str = "=";

/// Serialize the code map as tagged entries.
pub fn serialize_map(map: &CodeMap) -> String {
    map.entries()
        .iter()
        .map(|(symbol, form)| format!("{symbol}{TAG_SEPARATOR}{form}"))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Parse a map blob produced by [`serialize_map`].
pub fn parse_map(blob: &str) -> Result<CodeMap> {
    if blob.is_empty() {
        return Ok(CodeMap::default());
    }
    let entries = blob
        .split(ENTRY_SEPARATOR)
        .map(|entry| {
            let (symbol, form) = entry.split_once(TAG_SEPARATOR).ok_or_else(|| {
                FucqError::MalformedToken(format!("untagged map entry {entry:?}"))
            })?;
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok((c, form.to_string())),
                _ => Err(FucqError::MalformedToken(format!("bad symbol tag in {entry:?}"))),
            }
        })
        .collect::<Result<Vec<_>>>()?;
    CodeMap::from_entries(entries)
}

/// Build the transport string.
pub fn frame(compacted: &str, map: &CodeMap, level: u32) -> Result<String> {
    let payload = format!("{compacted}{DATA_SEPARATOR}{}", serialize_map(map));

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(payload.as_bytes())
        .context("deflate write failed")?;
    let compressed = encoder.finish().context("deflate finish failed")?;

    tracing::trace!(
        payload_len = payload.len(),
        compressed_len = compressed.len(),
        "frame deflated"
    );
    Ok(hex::encode(compressed))
}

/// Recover the compact string and code map from a transport string.
pub fn unframe(transport: &str) -> Result<(String, CodeMap)> {
    if !hex_layer::is_lower_hex(transport.as_bytes()) {
        return Err(FucqError::FrameCorrupt(
            "transport string is not lowercase hex of even length".into(),
        ));
    }
    let compressed = hex::decode(transport)
        .map_err(|e| FucqError::FrameCorrupt(format!("hex decode failed: {e}")))?;

    let mut payload = Vec::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_end(&mut payload)
        .map_err(|e| FucqError::FrameCorrupt(format!("inflate failed: {e}")))?;

    let payload = String::from_utf8(payload)
        .map_err(|e| FucqError::FrameCorrupt(format!("payload is not UTF-8: {e}")))?;
    let (data, blob) = payload
        .split_once(DATA_SEPARATOR)
        .ok_or_else(|| FucqError::FrameCorrupt("missing data separator".into()))?;

    let map = parse_map(blob)?;
    Ok((data.to_string(), map))
}
