//! Batch packaging: render every row and assemble the archive.
//!
//! A row that fails to render is skipped and recorded; only archive construction failures
//! abort the batch. Entries always appear in input row order, even when rows are rendered on
//! several threads.

mod archive;
mod error;
mod naming;
mod render;
mod state;

use serde::Serialize;
use std::io::{Cursor, Seek, Write};

use crate::label::LabelCompositor;
use crate::records::RecordSet;
use crate::schema::ColumnBinding;
use crate::symbol::{EcTier, SymbolEncoder};
use crate::template::Template;

use archive::ArchiveWriter;
use render::{render_parallel, RenderedRow, RowRenderer};

pub use error::{PackagingError, RowEncodingError};
pub use naming::{entry_name, sanitize_token};
pub use state::BatchState;

/// One archive entry, by source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub row: usize,
    pub name: String,
}

/// A skipped row and why it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    pub row: usize,
    pub cause: String,
}

/// Entries written and rows skipped, without the archive bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSummary {
    pub rows: usize,
    pub entries: Vec<EntryRecord>,
    pub failures: Vec<RowFailure>,
}

/// A completed batch: the archive plus what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput {
    pub archive: Vec<u8>,
    pub summary: PackageSummary,
}

/// Renders rows and writes them to an archive.
pub struct BatchPackager<'a> {
    template: &'a Template,
    binding: &'a ColumnBinding,
    encoder: &'a dyn SymbolEncoder,
    compositor: &'a LabelCompositor,
    ec: EcTier,
    workers: usize,
}

impl<'a> BatchPackager<'a> {
    pub fn new(
        template: &'a Template,
        binding: &'a ColumnBinding,
        encoder: &'a dyn SymbolEncoder,
        compositor: &'a LabelCompositor,
        ec: EcTier,
    ) -> Self {
        Self {
            template,
            binding,
            encoder,
            compositor,
            ec,
            workers: 1,
        }
    }

    /// Render rows on up to `workers` threads. Entry order is unaffected.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Package into an in-memory ZIP.
    pub fn package(
        &self,
        records: &RecordSet,
        observer: &mut dyn FnMut(BatchState),
    ) -> Result<BatchOutput, PackagingError> {
        let (cursor, summary) = self.package_to(Cursor::new(Vec::new()), records, observer)?;
        Ok(BatchOutput {
            archive: cursor.into_inner(),
            summary,
        })
    }

    /// Package into any seekable sink; the sink is returned once the archive is finished.
    pub fn package_to<W: Write + Seek>(
        &self,
        sink: W,
        records: &RecordSet,
        observer: &mut dyn FnMut(BatchState),
    ) -> Result<(W, PackageSummary), PackagingError> {
        let renderer = RowRenderer {
            template: self.template,
            binding: self.binding,
            encoder: self.encoder,
            compositor: self.compositor,
            ec: self.ec,
        };
        let total = records.len();
        let mut archive = ArchiveWriter::new(sink);
        let mut summary = PackageSummary {
            rows: total,
            ..PackageSummary::default()
        };

        if self.workers > 1 && total > 1 {
            let rendered = render_parallel(&renderer, records.rows(), self.workers);
            for (i, result) in rendered.into_iter().enumerate() {
                observer(BatchState::Processing { row: i + 1, total });
                commit(&mut archive, &mut summary, i + 1, result)?;
            }
        } else {
            for (i, row) in records.rows().iter().enumerate() {
                observer(BatchState::Processing { row: i + 1, total });
                commit(&mut archive, &mut summary, i + 1, renderer.render(i + 1, row))?;
            }
        }

        observer(BatchState::Finalizing);
        let sink = archive.finish()?;
        Ok((sink, summary))
    }
}

fn commit<W: Write + Seek>(
    archive: &mut ArchiveWriter<W>,
    summary: &mut PackageSummary,
    row: usize,
    result: Result<RenderedRow, RowEncodingError>,
) -> Result<(), PackagingError> {
    match result {
        Ok(rendered) => {
            archive.add(&rendered.name, &rendered.png)?;
            summary.entries.push(EntryRecord {
                row,
                name: rendered.name,
            });
        }
        Err(e) => {
            tracing::warn!("row {}: {}; skipped", row, e);
            summary.failures.push(RowFailure {
                row,
                cause: e.to_string(),
            });
        }
    }
    Ok(())
}
