//! CLI frontend for the sektor sector generator.

mod commands;
mod exporters;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use env_logger::Env;
use sk_core::OutputFormat;

use crate::commands::sector::SectorArgs;
use crate::exporters::ExportFormat;

#[derive(Parser)]
#[command(
    name = "sk",
    about = "sektor: star sector generator for Stars Without Number",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sector, preview its map, and write it out
    Sector(SectorArgs),

    /// Draw the hex map of a saved sector
    Render {
        /// Sector JSON file
        file: PathBuf,

        /// Colour system labels by tech level
        #[arg(short = 'l', long, alias = "color")]
        colour: bool,

        /// Player map: system names only
        #[arg(short, long)]
        player: bool,
    },

    /// Run exporters on a saved sector
    Export {
        /// Sector JSON file
        file: PathBuf,

        /// Comma-separated export formats: txt, site, json
        #[arg(short, long, value_delimiter = ',', default_value = "txt")]
        export: Vec<ExportFormat>,

        /// Directory the sector directory is created in
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Summarise the systems of a saved sector
    Show {
        /// Sector JSON file
        file: PathBuf,

        /// Print one system's write-up, by name or by hex ("RR,CC")
        #[arg(short, long)]
        system: Option<String>,

        /// Write-up format: txt or md
        #[arg(long, default_value = "txt")]
        format: OutputFormat,
    },

    /// Roll a single world
    World {
        /// Culture of the inhabitants (default: random)
        #[arg(short, long)]
        culture: Option<String>,

        /// Roll a primary world (no relationship to a primary)
        #[arg(long)]
        primary: bool,

        /// Show full tag descriptions
        #[arg(short, long)]
        full_tags: bool,

        /// Tags to exclude (repeatable)
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,

        /// Output format: txt or md
        #[arg(long, default_value = "txt")]
        format: OutputFormat,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll a point of interest
    Poi {
        /// Output format: txt or md
        #[arg(long, default_value = "txt")]
        format: OutputFormat,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll a character, optionally with a job to offer
    Npc {
        /// Culture of the character (default: random)
        #[arg(short, long)]
        culture: Option<String>,

        /// Gender: male, female, other (default: random)
        #[arg(short, long)]
        gender: Option<String>,

        /// Make the character a patron with a job for the party
        #[arg(short, long)]
        patron: bool,

        /// Output format: txt or md
        #[arg(long, default_value = "txt")]
        format: OutputFormat,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll an alien species
    Alien {
        /// Output format: txt or md
        #[arg(long, default_value = "txt")]
        format: OutputFormat,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List world tags, or describe one
    Tag {
        /// Tag name (case-insensitive)
        name: Option<String>,
    },

    /// Roll dice expressions such as 2d6 or 1d20+3
    Roll {
        /// Dice expressions
        #[arg(required = true)]
        exprs: Vec<String>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::init_from_env(Env::new().filter_or("SK_LOG", "warn"));
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sector(args) => commands::sector::run(&args),
        Commands::Render {
            file,
            colour,
            player,
        } => commands::render::run(&file, colour, player),
        Commands::Export { file, export, out } => commands::export::run(&file, &export, &out),
        Commands::Show {
            file,
            system,
            format,
        } => commands::show::run(&file, system.as_deref(), format),
        Commands::World {
            culture,
            primary,
            full_tags,
            exclude,
            format,
            seed,
        } => commands::world::run(culture.as_deref(), primary, full_tags, exclude, format, seed),
        Commands::Poi { format, seed } => commands::poi::run(format, seed),
        Commands::Npc {
            culture,
            gender,
            patron,
            format,
            seed,
        } => commands::npc::run(culture.as_deref(), gender.as_deref(), patron, format, seed),
        Commands::Alien { format, seed } => commands::alien::run(format, seed),
        Commands::Tag { name } => commands::tag::run(name.as_deref()),
        Commands::Roll { exprs, seed } => commands::roll::run(&exprs, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
