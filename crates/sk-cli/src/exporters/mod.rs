//! Writing a sector to disk.
//!
//! Every exporter writes into `<out>/<sector name>/`, which is created on
//! first use.

mod json;
mod site;
mod text;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use sk_core::SectorDocument;

const FORMAT_NAMES: &str = "txt, site, json";

/// A supported export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain-text system write-ups and maps.
    Text,
    /// Markdown pages for a static site generator.
    Site,
    /// The sector document as JSON.
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "txt"),
            Self::Site => write!(f, "site"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "site" | "hugo" => Ok(Self::Site),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "no exporter for \"{other}\", available: {FORMAT_NAMES}"
            )),
        }
    }
}

/// Run each exporter in `formats` once. Returns the sector directory.
pub fn export_all(
    doc: &SectorDocument,
    formats: &[ExportFormat],
    out: &Path,
) -> Result<PathBuf, String> {
    let dir = out.join(&doc.name);
    fs::create_dir_all(&dir).map_err(|e| format!("cannot create {}: {e}", dir.display()))?;

    let mut done = Vec::new();
    for &format in formats {
        if done.contains(&format) {
            continue;
        }
        info!("exporting {} as {format}", doc.name);
        match format {
            ExportFormat::Text => text::write(doc, &dir)?,
            ExportFormat::Site => site::write(doc, &dir)?,
            ExportFormat::Json => json::write(doc, &dir)?,
        }
        done.push(format);
    }

    Ok(dir)
}

/// Create `path`'s parent directories and write `contents` to it.
fn write_file(path: &Path, contents: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create {}: {e}", parent.display()))?;
    }
    fs::write(path, contents).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
