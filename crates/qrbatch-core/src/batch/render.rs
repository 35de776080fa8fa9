//! Per-row rendering: payload → symbol → labeled image → PNG.

use image::ImageFormat;
use std::io::Cursor;

use super::{entry_name, RowEncodingError};
use crate::label::LabelCompositor;
use crate::payload::{caption, compose, primary_value};
use crate::records::Row;
use crate::schema::ColumnBinding;
use crate::symbol::{EcTier, SymbolEncoder};
use crate::template::Template;

pub(crate) struct RenderedRow {
    pub name: String,
    pub png: Vec<u8>,
}

pub(crate) struct RowRenderer<'a> {
    pub template: &'a Template,
    pub binding: &'a ColumnBinding,
    pub encoder: &'a dyn SymbolEncoder,
    pub compositor: &'a LabelCompositor,
    pub ec: EcTier,
}

impl RowRenderer<'_> {
    pub(crate) fn render(&self, index: usize, row: &Row) -> Result<RenderedRow, RowEncodingError> {
        let payload = compose(row, self.template, self.binding);
        let symbol = self.encoder.encode(&payload.text(), self.ec)?;
        let labeled = self
            .compositor
            .compose(&symbol, &caption(row, self.template, self.binding));

        let mut png = Vec::new();
        labeled
            .image()
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        let primary = primary_value(row, self.template, self.binding);
        let name = entry_name(index, self.template, &primary);
        Ok(RenderedRow { name, png })
    }
}

/// Render contiguous chunks of rows on scoped threads; results come back in row order.
pub(crate) fn render_parallel(
    renderer: &RowRenderer<'_>,
    rows: &[Row],
    workers: usize,
) -> Vec<Result<RenderedRow, RowEncodingError>> {
    let chunk = rows.len().div_ceil(workers.max(1)).max(1);
    std::thread::scope(|s| {
        let handles: Vec<_> = rows
            .chunks(chunk)
            .enumerate()
            .map(|(c, part)| {
                s.spawn(move || {
                    part.iter()
                        .enumerate()
                        .map(|(j, row)| renderer.render(c * chunk + j + 1, row))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|p| std::panic::resume_unwind(p)))
            .collect()
    })
}
