use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::symbol::EcTier;
use crate::template::{builtin_templates, Template};

/// Symbol and caption rendering parameters (`[render]` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixels per QR module.
    pub box_size: u32,
    /// Quiet-zone width in modules.
    pub border: u32,
    pub error_correction: EcTier,
    /// Height of the caption band below the symbol, in pixels.
    pub caption_height: u32,
    /// Gap between the symbol and the caption baseline box, in pixels.
    pub caption_offset: u32,
    /// Scalable font size in pixels.
    pub font_size: f32,
    /// Scalable fonts to try in order; bare names are searched in common font directories.
    pub font_paths: Vec<PathBuf>,
    /// Pixel scale of the built-in bitmap font used when no scalable font loads.
    pub bitmap_scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            box_size: 6,
            border: 2,
            error_correction: EcTier::Low,
            caption_height: 50,
            caption_offset: 10,
            font_size: 22.0,
            font_paths: vec![
                PathBuf::from("arial.ttf"),
                PathBuf::from("DejaVuSans.ttf"),
                PathBuf::from("LiberationSans-Regular.ttf"),
            ],
            bitmap_scale: 2,
        }
    }
}

/// Global configuration loaded from `~/.config/qrbatch/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrBatchConfig {
    /// Template used when none is named on the command line.
    pub default_template: String,
    /// Largest accepted input file, in bytes.
    pub max_input_bytes: u64,
    /// Optional cap on data rows per batch.
    #[serde(default)]
    pub max_rows: Option<usize>,
    /// Threads used to render rows; entries are always written in input order.
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub render: RenderConfig,
    /// Additional templates; a template named like a built-in replaces it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<Template>,
}

fn default_workers() -> usize {
    1
}

impl Default for QrBatchConfig {
    fn default() -> Self {
        Self {
            default_template: "tiffin".to_string(),
            max_input_bytes: 10 * 1024 * 1024,
            max_rows: None,
            workers: default_workers(),
            render: RenderConfig::default(),
            templates: Vec::new(),
        }
    }
}

impl QrBatchConfig {
    /// Built-in templates merged with configured ones, in stable order.
    pub fn templates(&self) -> Vec<Template> {
        let mut all = builtin_templates();
        for custom in &self.templates {
            match all.iter_mut().find(|t| t.name == custom.name) {
                Some(existing) => *existing = custom.clone(),
                None => all.push(custom.clone()),
            }
        }
        all
    }

    pub fn template(&self, name: &str) -> Option<Template> {
        self.templates().into_iter().find(|t| t.name == name)
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.render.box_size == 0 {
            anyhow::bail!("render.box_size must be at least 1");
        }
        if self.workers == 0 {
            anyhow::bail!("workers must be at least 1");
        }
        if self.render.font_size.is_nan() || self.render.font_size <= 0.0 {
            anyhow::bail!("render.font_size must be positive");
        }
        for t in &self.templates {
            t.check()?;
        }
        if self.template(&self.default_template).is_none() {
            anyhow::bail!("default_template \"{}\" is not defined", self.default_template);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qrbatch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<QrBatchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: QrBatchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QrBatchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QrBatchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}
