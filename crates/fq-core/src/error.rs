use thiserror::Error;

#[derive(Error, Debug)]
pub enum FucqError {
    #[error("Too many distinct tokens: {distinct} exceeds alphabet of {max}")]
    TooManyDistinctTokens { distinct: usize, max: usize },
    #[error("Frame corrupt: {0}")]
    FrameCorrupt(String),
    #[error("Malformed token: {0}")]
    MalformedToken(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FucqError>;
