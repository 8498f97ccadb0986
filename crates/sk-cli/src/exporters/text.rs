use std::path::Path;

use sk_core::{Format, OutputFormat, SectorDocument};
use sk_hexmap::render_hex_map;

/// `text/Systems/<RR,CC>-<name>.txt` per system plus four maps in `text/Maps/`.
pub fn write(doc: &SectorDocument, dir: &Path) -> Result<(), String> {
    let root = dir.join("text");

    for star in doc.sector.systems() {
        let file = format!("{}-{}.txt", star.coord_label(), star.name);
        let path = root.join("Systems").join(file);
        super::write_file(&path, &star.format(OutputFormat::Text))?;
    }

    let maps = root.join("Maps");
    for (file, colour, player) in [
        ("gm-map.txt", false, false),
        ("pc-map.txt", false, true),
        ("gm-map-ansi.txt", true, false),
        ("pc-map-ansi.txt", true, true),
    ] {
        super::write_file(&maps.join(file), &render_hex_map(&doc.sector, colour, player))?;
    }

    Ok(())
}
