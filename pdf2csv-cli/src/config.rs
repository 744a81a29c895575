use anyhow::{Context, Result};
use pdf2csv_ingest::Issuer;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extractor: ExtractorSection,
    pub statement: StatementSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorSection {
    /// Program name or path; resolved on PATH
    pub command: String,
    /// Arguments placed before `<file> -`
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatementSection {
    /// Force one issuer's line format (default: pick by due-date anchor)
    pub issuer: Option<Issuer>,
}

impl Default for ExtractorSection {
    fn default() -> Self {
        Self {
            command: "pdftotext".to_string(),
            args: vec!["-raw".to_string()],
            timeout_secs: 60,
        }
    }
}

pub fn pdf2csv_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".pdf2csv"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(pdf2csv_home()?.join("config.toml"))
}

/// Load `~/.pdf2csv/config.toml`, falling back to defaults when absent.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Ok(p) if p.exists() => load_config_from(&p),
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}
