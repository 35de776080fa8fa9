//! Errors raised while reading tabular input.

/// Input could not be read as CSV at all. Nothing is processed when this is returned.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("the file is empty or has no header row")]
    NoHeader,
    #[error("row {line} has {found} fields, but the header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    /// The reader's own error is kept as the source and logged, not shown.
    #[error("the file is not valid UTF-8 CSV")]
    Csv(#[source] csv::Error),
}
