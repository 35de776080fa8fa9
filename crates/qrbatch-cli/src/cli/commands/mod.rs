//! CLI command handlers, one per file.

mod check;
mod completions;
mod generate;
mod sample;
mod templates;

use anyhow::{Context, Result};
use qrbatch_core::config::QrBatchConfig;
use qrbatch_core::template::Template;
use std::io::Write;
use std::path::Path;

pub use check::run_check;
pub use completions::run_completions;
pub use generate::{run_generate, GenerateArgs};
pub use sample::run_sample;
pub use templates::run_templates;

/// Named template, or the configured default.
pub(crate) fn resolve_template(cfg: &QrBatchConfig, name: Option<&str>) -> Result<Template> {
    let name = name.unwrap_or(&cfg.default_template);
    cfg.template(name).with_context(|| {
        let known: Vec<String> = cfg.templates().into_iter().map(|t| t.name).collect();
        format!("unknown template \"{}\" (available: {})", name, known.join(", "))
    })
}

/// Input must be a `.csv` file (extension compared case-insensitively).
pub(crate) fn ensure_csv(path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if !is_csv {
        anyhow::bail!("invalid file type: {} (expected a .csv file)", path.display());
    }
    Ok(())
}

/// Read an input file, refusing it early if it is over the configured size limit.
pub(crate) fn read_input(cfg: &QrBatchConfig, path: &Path) -> Result<Vec<u8>> {
    ensure_csv(path)?;
    let len = std::fs::metadata(path)
        .with_context(|| format!("open {}", path.display()))?
        .len();
    if len > cfg.max_input_bytes {
        anyhow::bail!(
            "{} is {} bytes; the limit is {} bytes",
            path.display(),
            len,
            cfg.max_input_bytes
        );
    }
    std::fs::read(path).with_context(|| format!("read {}", path.display()))
}

/// Write `bytes` to a temp file next to `path`, then rename it into place.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("write {}", tmp.path().display()))?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("rename into {}", path.display()))?;
    Ok(())
}
