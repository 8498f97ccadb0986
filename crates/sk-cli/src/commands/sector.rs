use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sk_content::{TableContent, check_exclusions, names};
use sk_core::{Density, DensityPolicy, FillRange, GeneratorConfig, SectorDocument, generate_sector};
use sk_hexmap::render_hex_map;

use crate::exporters::{self, ExportFormat};

/// Flags for `sk sector`.
#[derive(Args, Debug)]
pub struct SectorArgs {
    /// Number of hex rows (2-99)
    #[arg(short, long, default_value = "8")]
    rows: u32,

    /// Number of hex columns (2-99)
    #[arg(short, long, default_value = "10")]
    cols: u32,

    /// How crowded the sector is: sparse, average, dense
    #[arg(short, long, default_value = "average")]
    density: Density,

    /// Override the lowest fill percentage for the chosen density
    #[arg(long)]
    fill_min: Option<u32>,

    /// Override the highest fill percentage for the chosen density
    #[arg(long)]
    fill_max: Option<u32>,

    /// Percent chance of a point of interest per system
    #[arg(short, long, default_value = "30")]
    poi_chance: u32,

    /// Percent chance, rolled again after each hit, of another world per system
    #[arg(short, long = "other-worlds-chance", default_value = "10")]
    other_worlds_chance: u32,

    /// Most extra worlds one system may have
    #[arg(long = "max-other-worlds", default_value = "8")]
    max_other_worlds: u32,

    /// World tags to exclude (repeatable)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Include full tag descriptions in system write-ups
    #[arg(short, long)]
    full_tags: bool,

    /// Colour the preview map by tech level
    #[arg(short = 'l', long, alias = "color")]
    colour: bool,

    /// Comma-separated export formats: txt, site, json
    #[arg(short, long, value_delimiter = ',', default_value = "txt,json")]
    export: Vec<ExportFormat>,

    /// Directory the sector directory is created in
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// RNG seed for a reproducible sector
    #[arg(long)]
    seed: Option<u64>,

    /// Write the first sector without asking
    #[arg(short, long)]
    yes: bool,
}

impl SectorArgs {
    fn config(&self) -> Result<GeneratorConfig, String> {
        let mut policy = DensityPolicy::default();
        if self.fill_min.is_some() || self.fill_max.is_some() {
            let base = policy.range(self.density);
            let range = FillRange::new(
                self.fill_min.unwrap_or(base.min),
                self.fill_max.unwrap_or(base.max),
            );
            policy = policy.with_range(self.density, range);
        }

        let config = GeneratorConfig::default()
            .with_size(self.rows, self.cols)
            .with_density(self.density)
            .with_density_policy(policy)
            .with_poi_chance(self.poi_chance)
            .with_other_world_chance(self.other_worlds_chance)
            .with_max_secondary_worlds(self.max_other_worlds)
            .with_exclude_tags(self.exclude.clone())
            .with_full_tags(self.full_tags);

        config.validate().map_err(|e| e.to_string())?;
        check_exclusions(&config.exclude_tags).map_err(|e| e.to_string())?;
        Ok(config)
    }
}

enum Answer {
    Write,
    Discard,
    Reroll,
}

pub fn run(args: &SectorArgs) -> Result<(), String> {
    let config = args.config()?;
    let mut seed = args.seed.unwrap_or_else(rand::random);
    let mut reseed = StdRng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        info!("generating sector with seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        let sector = generate_sector(&config, &mut TableContent::new(), &mut rng);
        let name = sector_name(&mut rng, &args.out);

        println!("{}", name.bold());
        print!("{}", render_hex_map(&sector, args.colour, false));

        let answer = if args.yes {
            Answer::Write
        } else {
            prompt(&mut input)?
        };

        match answer {
            Answer::Write => {
                let doc = SectorDocument::new(name, Some(seed), sector);
                let dir = exporters::export_all(&doc, &args.export, &args.out)?;
                println!("  Wrote {} to {}", doc.name, dir.display());
                return Ok(());
            }
            Answer::Discard => {
                println!("  Nothing written.");
                return Ok(());
            }
            Answer::Reroll => {
                seed = reseed.random();
                debug!("rerolling with seed {seed}");
            }
        }
    }
}

/// "<Name> Sector", redrawn until no directory of that name exists under `out`.
fn sector_name(rng: &mut StdRng, out: &Path) -> String {
    loop {
        let name = format!("{} Sector", names::system_name(rng));
        if !out.join(&name).exists() {
            return name;
        }
        debug!("{name} already exists in {}", out.display());
    }
}

fn prompt(input: &mut impl BufRead) -> Result<Answer, String> {
    let mut line = String::new();
    loop {
        print!("Write Sector? [y]es, [n]o, [r]eroll: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            println!();
            return Ok(Answer::Discard);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Answer::Write),
            "n" | "no" => return Ok(Answer::Discard),
            "r" | "reroll" => return Ok(Answer::Reroll),
            _ => continue,
        }
    }
}
