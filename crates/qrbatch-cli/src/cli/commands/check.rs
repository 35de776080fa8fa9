use anyhow::Result;
use qrbatch_core::config::QrBatchConfig;
use qrbatch_core::Pipeline;
use std::path::Path;

use super::{read_input, resolve_template};

/// Validate the header and report the column each field binds to.
pub fn run_check(cfg: &QrBatchConfig, input: &Path, template: Option<&str>) -> Result<()> {
    let template = resolve_template(cfg, template)?;
    let data = read_input(cfg, input)?;

    let (binding, rows) = Pipeline::new(cfg, &template).check(&data)?;

    println!(
        "{}: {} rows match template \"{}\"",
        input.display(),
        rows,
        template.name
    );
    for (field, column) in template.fields.iter().zip(binding.columns()) {
        println!("  {:<20} -> column {}", field.column, column + 1);
    }
    Ok(())
}
