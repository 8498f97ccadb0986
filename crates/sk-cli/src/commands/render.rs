use std::path::Path;

use sk_hexmap::render_hex_map;

pub fn run(file: &Path, colour: bool, player: bool) -> Result<(), String> {
    let doc = super::load_document(file)?;
    print!("{}", render_hex_map(&doc.sector, colour, player));
    Ok(())
}
