use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sk_core::{Format, OutputFormat, Sector, Star};

pub fn run(file: &Path, system: Option<&str>, format: OutputFormat) -> Result<(), String> {
    let doc = super::load_document(file)?;
    let sector = &doc.sector;

    if let Some(wanted) = system {
        let star = lookup(sector, wanted)
            .ok_or_else(|| format!("no system \"{wanted}\" in {}", doc.name))?;
        print!("{}", star.format(format));
        return Ok(());
    }

    println!(
        "  {} ({}x{}, {} systems)",
        doc.name.bold(),
        sector.rows(),
        sector.cols(),
        sector.len()
    );
    if let Some(seed) = doc.seed {
        println!("  {}", format!("seed {seed}").dimmed());
    }

    if sector.is_empty() {
        println!("  No systems.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Hex", "System", "Culture", "Tags", "Tech", "Worlds", "POIs"]);

    for star in sector.by_coords() {
        let (tags, tech) = match star.primary_world() {
            Some(world) => (world.tag_names().join(", "), world.tech_level_code().to_string()),
            None => ("—".to_string(), "—".to_string()),
        };
        table.add_row(vec![
            star.coord_label(),
            star.name.clone(),
            star.culture.to_string(),
            tags,
            tech,
            star.worlds.len().to_string(),
            star.pois.len().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Find a system by hex label ("RR,CC") or, failing that, by name.
fn lookup<'a>(sector: &'a Sector, wanted: &str) -> Option<&'a Star> {
    let hex = wanted
        .split_once(',')
        .and_then(|(r, c)| Some((r.trim().parse().ok()?, c.trim().parse().ok()?)));
    match hex {
        Some((row, col)) => sector.system_at(row, col),
        None => sector.find_by_name(wanted),
    }
}
