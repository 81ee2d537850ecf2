use serde::{Deserialize, Serialize};

use crate::error::{FucqError, Result};

/// Upper bound on repeated hex passes. Each pass doubles the payload.
pub const MAX_HEX_LAYERS: usize = 7;

/// Highest deflate level accepted by the frame codec.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Default cap on the run-expanded buffer during decode (256 MiB).
pub const DEFAULT_MAX_DECODED_LEN: usize = 256 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FucqConfig {
    /// Number of hex passes applied before tokenization.
    pub hex_layers: usize,
    /// Deflate level used when framing.
    pub compression_level: u32,
    /// Largest run-expanded hex buffer a decode may materialize.
    pub max_decoded_len: usize,
}

impl FucqConfig {
    pub fn with_hex_layers(mut self, layers: usize) -> Self {
        self.hex_layers = layers;
        self
    }

    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    pub fn with_max_decoded_len(mut self, len: usize) -> Self {
        self.max_decoded_len = len;
        self
    }

    /// Check that every field is in range.
    ///
    /// `hex_layers` must be at least 1: the hex pass is what keeps the
    /// `,` `;` `/` `=` separators out of token values.
    pub fn validate(&self) -> Result<()> {
        if self.hex_layers == 0 || self.hex_layers > MAX_HEX_LAYERS {
            return Err(FucqError::InvalidConfig(format!(
                "hex_layers must be in 1..={MAX_HEX_LAYERS}, got {}",
                self.hex_layers
            )));
        }
        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(FucqError::InvalidConfig(format!(
                "compression_level must be in 0..={MAX_COMPRESSION_LEVEL}, got {}",
                self.compression_level
            )));
        }
        if self.max_decoded_len == 0 {
            return Err(FucqError::InvalidConfig("max_decoded_len must be positive".into()));
        }
        Ok(())
    }
}

impl Default for FucqConfig {
    fn default() -> Self {
        Self {
            hex_layers: 1,
            compression_level: MAX_COMPRESSION_LEVEL,
            max_decoded_len: DEFAULT_MAX_DECODED_LEN,
        }
    }
}
