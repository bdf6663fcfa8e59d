use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid compression options: {0}")]
    InvalidOptions(String),

    #[error("Compression task failed: {0}")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
