//! Pipeline entry point: size guard → parse → validate → package.

use serde::Serialize;

use crate::batch::{
    BatchOutput, BatchPackager, BatchState, EntryRecord, PackagingError, RowFailure,
};
use crate::checksum::sha256_hex;
use crate::config::QrBatchConfig;
use crate::label::{resolve_font, LabelCompositor};
use crate::records::{parse_csv, ParseError, RecordSet};
use crate::schema::{validate, ColumnBinding, SchemaError};
use crate::symbol::{QrSymbolEncoder, SymbolEncoder};
use crate::template::Template;

/// Batch-level failure. `Display` is the plain message shown to the operator.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("input is {size} bytes; the limit is {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },
    #[error("input has {rows} rows; the limit is {limit} rows")]
    TooManyRows { rows: usize, limit: usize },
    #[error("Failed to read CSV file: {0}")]
    Parse(ParseError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("An error occurred while generating QR codes: {0}")]
    Packaging(PackagingError),
}

// The message already carries the inner error, so it is not exposed as a source too.
impl From<ParseError> for BatchError {
    fn from(e: ParseError) -> Self {
        BatchError::Parse(e)
    }
}

impl From<PackagingError> for BatchError {
    fn from(e: PackagingError) -> Self {
        BatchError::Packaging(e)
    }
}

/// Diagnostic summary of a finished batch, serializable for `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub template: String,
    pub rows: usize,
    pub entries: Vec<EntryRecord>,
    pub failures: Vec<RowFailure>,
    pub archive_bytes: usize,
    pub sha256: String,
}

impl BatchReport {
    pub fn new(template: &Template, output: &BatchOutput) -> Self {
        Self {
            template: template.name.clone(),
            rows: output.summary.rows,
            entries: output.summary.entries.clone(),
            failures: output.summary.failures.clone(),
            archive_bytes: output.archive.len(),
            sha256: sha256_hex(&output.archive),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One configured pipeline: immutable config, one template, one encoder and compositor.
pub struct Pipeline<'a> {
    config: &'a QrBatchConfig,
    template: &'a Template,
    encoder: Box<dyn SymbolEncoder>,
    compositor: LabelCompositor,
    workers: usize,
}

impl<'a> Pipeline<'a> {
    /// QR encoder and caption font as configured in `config.render`.
    pub fn new(config: &'a QrBatchConfig, template: &'a Template) -> Self {
        let render = &config.render;
        let compositor = LabelCompositor::new(
            resolve_font(render),
            render.caption_height,
            render.caption_offset,
        );
        Self {
            config,
            template,
            encoder: Box::new(QrSymbolEncoder::new(render.box_size, render.border)),
            compositor,
            workers: config.workers,
        }
    }

    pub fn with_encoder(mut self, encoder: Box<dyn SymbolEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn with_compositor(mut self, compositor: LabelCompositor) -> Self {
        self.compositor = compositor;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn template(&self) -> &Template {
        self.template
    }

    /// Check the size guard, parse, and validate without rendering anything.
    pub fn check(&self, input: &[u8]) -> Result<(ColumnBinding, usize), BatchError> {
        let (records, binding) = self.load(input)?;
        Ok((binding, records.len()))
    }

    fn load(&self, input: &[u8]) -> Result<(RecordSet, ColumnBinding), BatchError> {
        let limit = self.config.max_input_bytes;
        if input.len() as u64 > limit {
            return Err(BatchError::InputTooLarge {
                size: input.len() as u64,
                limit,
            });
        }
        let records = parse_csv(input)?;
        let binding = validate(records.header(), self.template)?;
        if let Some(limit) = self.config.max_rows {
            if records.len() > limit {
                return Err(BatchError::TooManyRows {
                    rows: records.len(),
                    limit,
                });
            }
        }
        Ok((records, binding))
    }

    pub fn run(&self, input: &[u8]) -> Result<BatchOutput, BatchError> {
        self.run_with_observer(input, &mut |_| {})
    }

    /// Run the whole batch, reporting each state transition to `observer`.
    pub fn run_with_observer(
        &self,
        input: &[u8],
        observer: &mut dyn FnMut(BatchState),
    ) -> Result<BatchOutput, BatchError> {
        let mut notify = |state: BatchState| {
            tracing::debug!("batch state: {:?}", state);
            observer(state);
        };
        notify(BatchState::Validating);
        tracing::info!(
            "batch start: template={} input_bytes={} font={}",
            self.template.name,
            input.len(),
            self.compositor.font_name()
        );

        let result = self.run_inner(input, &mut notify);
        match &result {
            Ok(out) => {
                notify(BatchState::Done);
                tracing::info!(
                    "batch done: rows={} entries={} skipped={}",
                    out.summary.rows,
                    out.summary.entries.len(),
                    out.summary.failures.len()
                );
            }
            Err(e) => {
                notify(BatchState::Failed);
                tracing::warn!("batch failed: {}", e);
            }
        }
        result
    }

    fn run_inner(
        &self,
        input: &[u8],
        notify: &mut dyn FnMut(BatchState),
    ) -> Result<BatchOutput, BatchError> {
        let (records, binding) = self.load(input)?;
        let packager = BatchPackager::new(
            self.template,
            &binding,
            self.encoder.as_ref(),
            &self.compositor,
            self.config.render.error_correction,
        )
        .with_workers(self.workers);
        Ok(packager.package(&records, notify)?)
    }
}
