//! In-memory ZIP assembly.

use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::PackagingError;

/// Writes entries in call order. PNG data is already compressed, so entries are stored.
/// Every entry carries the same DOS timestamp, so identical input gives identical bytes.
pub(crate) struct ArchiveWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
}

impl<W: Write + Seek> ArchiveWriter<W> {
    pub(crate) fn new(sink: W) -> Self {
        Self {
            zip: ZipWriter::new(sink),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Stored)
                .last_modified_time(DateTime::default()),
        }
    }

    pub(crate) fn add(&mut self, name: &str, bytes: &[u8]) -> Result<(), PackagingError> {
        self.zip
            .start_file(name, self.options)
            .map_err(|source| PackagingError::Entry {
                name: name.to_string(),
                source,
            })?;
        self.zip.write_all(bytes)?;
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<W, PackagingError> {
        self.zip.finish().map_err(PackagingError::Finish)
    }
}
