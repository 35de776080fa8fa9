//! Symbol encoding failures.

/// Failure to encode one payload. Row-level: the batch skips the row and continues.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("payload of {bytes} bytes exceeds symbol capacity")]
    Capacity { bytes: usize },
    #[error("symbol encoder failed: {0}")]
    Encoder(String),
}
