use anyhow::{Context, Result};
use qrbatch_core::config::QrBatchConfig;
use std::path::Path;

use super::{resolve_template, write_atomic};

/// Write a sample CSV for `template` to `output`, or stdout.
pub fn run_sample(cfg: &QrBatchConfig, template: &str, output: Option<&Path>) -> Result<()> {
    let template = resolve_template(cfg, Some(template))?;
    let csv = template
        .sample_csv()
        .with_context(|| format!("build sample CSV for \"{}\"", template.name))?;
    match output {
        Some(path) => {
            write_atomic(path, csv.as_bytes())?;
            println!("wrote {}", path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}
