//! Fucq: reversible text transcoder producing compact, URL-safe hex.
//!
//! Stages:
//! 1. Hex layer: lowercase hex, applied `hex_layers` times
//! 2. Run-length: maximal `(count, byte)` runs
//! 3. Alphabet: one-letter code per distinct run (52 codes)
//! 4. Frame: `compact;map`, deflated, hex-encoded
//!
//! Decoding runs the same stages in reverse.

pub mod alphabet;
pub mod frame;
pub mod hex_layer;
pub mod pipeline;
pub mod rle;

pub use alphabet::{CodeMap, ALPHABET, MAX_SYMBOLS};
pub use fq_core::{FucqConfig, FucqError, Result, Token, TokenSequence};
pub use pipeline::{decode, encode, EncodeReport, FucqPipeline};
