use sk_content::{Gender, roll_npc};
use sk_core::{Format, OutputFormat};

pub fn run(
    culture: Option<&str>,
    gender: Option<&str>,
    patron: bool,
    format: OutputFormat,
    seed: Option<u64>,
) -> Result<(), String> {
    let (mut rng, _) = super::seeded_rng(seed);
    let culture = super::pick_culture(culture, &mut rng)?;
    let gender = match gender {
        None => Gender::random(&mut rng),
        Some(name) if name.trim().eq_ignore_ascii_case("any") => Gender::random(&mut rng),
        Some(name) => name.parse::<Gender>().map_err(|e| e.to_string())?,
    };

    print!("{}", roll_npc(&mut rng, culture, gender, patron).format(format));
    Ok(())
}
