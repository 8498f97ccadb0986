use comfy_table::{ContentArrangement, Table};
use sk_content::{TAGS, find_tag};
use sk_core::{Format, OutputFormat};

pub fn run(name: Option<&str>) -> Result<(), String> {
    let Some(name) = name else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Tag", "Description"]);
        for tag in TAGS {
            table.add_row(vec![tag.name, tag.description]);
        }
        println!("{table}");
        println!();
        println!("  {} tags", TAGS.len());
        return Ok(());
    };

    let tag = find_tag(name).ok_or_else(|| format!("no tag named \"{name}\""))?;
    print!("{}", tag.to_world_tag().format(OutputFormat::Text));
    Ok(())
}
