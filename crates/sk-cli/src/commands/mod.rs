pub mod alien;
pub mod export;
pub mod npc;
pub mod poi;
pub mod render;
pub mod roll;
pub mod sector;
pub mod show;
pub mod tag;
pub mod world;

use std::fs;
use std::path::Path;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sk_core::{Culture, SectorDocument};

/// An RNG seeded from `seed`, or from fresh entropy. Returns the seed used.
fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    info!("using seed {seed}");
    (StdRng::seed_from_u64(seed), seed)
}

/// The named culture, or a random one for `None` and "any".
fn pick_culture(name: Option<&str>, rng: &mut StdRng) -> Result<Culture, String> {
    match name {
        None => Ok(Culture::random(rng)),
        Some(name) if name.trim().eq_ignore_ascii_case("any") => Ok(Culture::random(rng)),
        Some(name) => name.parse::<Culture>().map_err(|e| e.to_string()),
    }
}

/// Read and validate a saved sector.
fn load_document(path: &Path) -> Result<SectorDocument, String> {
    let json =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    SectorDocument::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}
