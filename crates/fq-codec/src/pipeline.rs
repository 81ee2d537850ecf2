//! Fucq pipeline: orchestrates hex, run-length, alphabet and frame stages.

use fq_core::{FucqConfig, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{alphabet, frame, hex_layer, rle};

/// Encode result with statistics.
#[derive(Debug, Clone)]
pub struct EncodeReport {
    pub output: String,
    pub original_len: usize,
    /// Length of the input after the hex layers, before tokenization.
    pub hex_len: usize,
    pub encoded_len: usize,
    pub token_count: usize,
    pub distinct_tokens: usize,
    pub hex_layers: usize,
}

impl EncodeReport {
    /// Original length over transport length; above 1.0 means it shrank.
    pub fn ratio(&self) -> f64 {
        if self.encoded_len == 0 { return 1.0; }
        self.original_len as f64 / self.encoded_len as f64
    }
}

/// The encode/decode pipeline. Holds only its config, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct FucqPipeline {
    config: FucqConfig,
}

impl FucqPipeline {
    pub fn new(config: FucqConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FucqConfig {
        &self.config
    }

    /// Encode bytes into a transport string.
    pub fn encode(&self, input: &[u8]) -> Result<String> {
        self.encode_with_report(input).map(|report| report.output)
    }

    /// Encode and report per-stage sizes.
    pub fn encode_with_report(&self, input: &[u8]) -> Result<EncodeReport> {
        let layers = self.config.hex_layers;
        let hexed = hex_layer::encode(input, layers);
        let tokens = rle::tokenize(&hexed);
        let (compacted, map) = alphabet::compact(&tokens).inspect_err(|e| {
            tracing::debug!(error = %e, token_count = tokens.len(), "compaction failed");
        })?;
        let output = frame::frame(&compacted, &map, self.config.compression_level)?;

        tracing::debug!(
            original_len = input.len(),
            hex_len = hexed.len(),
            token_count = tokens.len(),
            distinct_tokens = map.len(),
            encoded_len = output.len(),
            "fucq encode"
        );

        Ok(EncodeReport {
            original_len: input.len(),
            hex_len: hexed.len(),
            encoded_len: output.len(),
            token_count: tokens.len(),
            distinct_tokens: map.len(),
            hex_layers: layers,
            output,
        })
    }

    /// Decode a transport string back into the original bytes.
    pub fn decode(&self, transport: &str) -> Result<Vec<u8>> {
        let (compacted, map) = frame::unframe(transport)?;
        let tokens = alphabet::expand(&compacted, &map)?;
        let hexed = rle::detokenize_bounded(&tokens, self.config.max_decoded_len)?;
        let output = hex_layer::decode_exact(&hexed, self.config.hex_layers)?;

        tracing::debug!(
            encoded_len = transport.len(),
            token_count = tokens.len(),
            decoded_len = output.len(),
            "fucq decode"
        );
        Ok(output)
    }

    /// Serialize `value` as JSON and encode it.
    pub fn encode_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = serde_json::to_vec(value)?;
        self.encode(&json)
    }

    /// Decode a transport string and parse it as JSON.
    pub fn decode_json<T: DeserializeOwned>(&self, transport: &str) -> Result<T> {
        let bytes = self.decode(transport)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Default for FucqPipeline {
    fn default() -> Self {
        Self { config: FucqConfig::default() }
    }
}

/// Encode with the default configuration.
pub fn encode(input: &[u8]) -> Result<String> {
    FucqPipeline::default().encode(input)
}

/// Decode with the default configuration.
pub fn decode(transport: &str) -> Result<Vec<u8>> {
    FucqPipeline::default().decode(transport)
}
