pub mod config;
pub mod error;
pub mod types;

pub use config::{FucqConfig, DEFAULT_MAX_DECODED_LEN, MAX_COMPRESSION_LEVEL, MAX_HEX_LAYERS};
pub use error::{FucqError, Result};
pub use types::{is_maximal, Token, TokenSequence};
