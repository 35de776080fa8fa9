//! `qrbatch generate`: CSV in, ZIP of labeled QR codes out.

use anyhow::{Context, Result};
use qrbatch_core::config::QrBatchConfig;
use qrbatch_core::pipeline::BatchReport;
use qrbatch_core::Pipeline;
use std::path::PathBuf;

use super::{read_input, resolve_template, write_atomic};

#[derive(Debug)]
pub struct GenerateArgs {
    pub input: PathBuf,
    pub template: Option<String>,
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    pub workers: Option<usize>,
}

pub fn run_generate(cfg: &QrBatchConfig, args: GenerateArgs) -> Result<()> {
    let template = resolve_template(cfg, args.template.as_deref())?;
    let data = read_input(cfg, &args.input)?;

    let mut pipeline = Pipeline::new(cfg, &template);
    if let Some(n) = args.workers {
        if n == 0 {
            anyhow::bail!("--workers must be at least 1");
        }
        pipeline = pipeline.with_workers(n);
    }

    let output = pipeline.run(&data)?;
    write_atomic(&args.output, &output.archive)?;

    let report = BatchReport::new(&template, &output);
    println!(
        "wrote {} ({} of {} rows, {} bytes)",
        args.output.display(),
        report.entries.len(),
        report.rows,
        report.archive_bytes
    );
    println!("sha256: {}", report.sha256);
    for failure in &report.failures {
        println!("  skipped row {}: {}", failure.row, failure.cause);
    }

    if let Some(path) = &args.report {
        let json = report.to_json_pretty()?;
        write_atomic(path, json.as_bytes())
            .with_context(|| format!("write report {}", path.display()))?;
    }

    Ok(())
}
