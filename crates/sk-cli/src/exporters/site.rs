use std::fmt::Write as _;
use std::path::Path;

use sk_core::{Format, OutputFormat, SectorDocument, Star};
use sk_hexmap::render_hex_map;

/// A Markdown site tree under `site/`: `config.toml`, an index page holding
/// the GM map, and one page per system.
pub fn write(doc: &SectorDocument, dir: &Path) -> Result<(), String> {
    let root = dir.join("site");
    let content = root.join("content");

    super::write_file(&root.join("config.toml"), &config(&doc.name))?;
    super::write_file(&content.join("_index.md"), &index(doc))?;

    for star in doc.sector.systems() {
        let path = content.join("systems").join(format!("{}.md", slug(&star.name)));
        super::write_file(&path, &system_page(star))?;
    }

    Ok(())
}

fn config(title: &str) -> String {
    format!("baseURL = \"/\"\ntitle = {title:?}\n")
}

fn index(doc: &SectorDocument) -> String {
    let mut out = format!("---\ntitle: {:?}\n---\n\n# {}\n\n", doc.name, doc.name);
    out.push_str("```\n");
    out.push_str(&render_hex_map(&doc.sector, false, false));
    out.push_str("```\n\n## Systems\n\n");
    for star in doc.sector.by_coords() {
        let _ = writeln!(
            out,
            "- [{}](systems/{}/) {}",
            star.name,
            slug(&star.name),
            star.coord_label()
        );
    }
    out
}

fn system_page(star: &Star) -> String {
    format!(
        "---\ntitle: {:?}\nhex: {:?}\nculture: {:?}\n---\n\n{}",
        star.name,
        star.coord_label(),
        star.culture.to_string(),
        star.format(OutputFormat::Markdown)
    )
}

/// Lower-case file stem with anything but letters and digits turned into `-`.
fn slug(name: &str) -> String {
    let mut out = String::new();
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}
