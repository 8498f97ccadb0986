use std::path::Path;

use sk_core::SectorDocument;

/// `<dir>/<sector name>.json`.
pub fn write(doc: &SectorDocument, dir: &Path) -> Result<(), String> {
    let json = doc
        .to_json()
        .map_err(|e| format!("cannot serialize {}: {e}", doc.name))?;
    super::write_file(&dir.join(format!("{}.json", doc.name)), &json)
}
