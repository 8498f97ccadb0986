use sk_content::roll_alien;
use sk_core::{Format, OutputFormat};

pub fn run(format: OutputFormat, seed: Option<u64>) -> Result<(), String> {
    let (mut rng, _) = super::seeded_rng(seed);
    print!("{}", roll_alien(&mut rng).format(format));
    Ok(())
}
