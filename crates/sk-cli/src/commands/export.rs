use std::path::Path;

use crate::exporters::{self, ExportFormat};

pub fn run(file: &Path, formats: &[ExportFormat], out: &Path) -> Result<(), String> {
    let doc = super::load_document(file)?;
    let dir = exporters::export_all(&doc, formats, out)?;
    println!("  Exported {} to {}", doc.name, dir.display());
    Ok(())
}
