use sk_content::roll_poi;
use sk_core::{Format, OutputFormat};

pub fn run(format: OutputFormat, seed: Option<u64>) -> Result<(), String> {
    let (mut rng, _) = super::seeded_rng(seed);
    print!("{}", roll_poi(&mut rng).format(format));
    Ok(())
}
