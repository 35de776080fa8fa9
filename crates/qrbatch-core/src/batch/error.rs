//! Row-level and batch-level packaging errors.

use zip::result::ZipError;

use crate::symbol::EncodeError;

/// Failure while rendering one row. The row is skipped; the batch continues.
#[derive(Debug, thiserror::Error)]
pub enum RowEncodingError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("could not encode PNG: {0}")]
    Png(#[from] image::ImageError),
}

/// Failure while building the archive itself. Aborts the batch; no archive is returned.
#[derive(Debug, thiserror::Error)]
pub enum PackagingError {
    #[error("could not add archive entry \"{name}\": {source}")]
    Entry {
        name: String,
        #[source]
        source: ZipError,
    },
    #[error("could not write archive data: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not finish archive: {0}")]
    Finish(#[source] ZipError),
}
