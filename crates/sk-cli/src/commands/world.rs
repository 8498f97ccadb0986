use sk_content::{check_exclusions, roll_world};
use sk_core::{Format, OutputFormat};

pub fn run(
    culture: Option<&str>,
    primary: bool,
    full_tags: bool,
    exclude: Vec<String>,
    format: OutputFormat,
    seed: Option<u64>,
) -> Result<(), String> {
    check_exclusions(&exclude).map_err(|e| e.to_string())?;
    let (mut rng, _) = super::seeded_rng(seed);

    let culture = super::pick_culture(culture, &mut rng)?;

    let world = roll_world(&mut rng, culture, primary, &exclude, full_tags);
    print!("{}", world.format(format));
    Ok(())
}
