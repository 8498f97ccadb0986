//! Core types for sektor: sectors, star systems, worlds, and the generator.
//!
//! This crate defines the data model a generated sector is made of and the
//! placement algorithm that fills a hex grid with star systems. Flavor text
//! comes from a [`ContentSource`]; this crate never interprets it beyond
//! reading names, tags, and tech levels.

/// Generation parameters and density policy.
pub mod config;
/// Cultural backgrounds used for naming worlds.
pub mod culture;
/// Error types used throughout the crate.
pub mod error;
/// Text and Markdown write-ups.
pub mod format;
/// The sector grid generator and its content collaborator.
pub mod generator;
/// Points of interest attached to star systems.
pub mod poi;
/// Sectors, star systems, and the saved sector document.
pub mod sector;
/// Worlds and world tags.
pub mod world;

/// Re-export configuration types.
pub use config::{Density, DensityPolicy, FillRange, GeneratorConfig};
/// Re-export culture.
pub use culture::Culture;
/// Re-export error types.
pub use error::{SkError, SkResult};
/// Re-export formatting types.
pub use format::{Format, OutputFormat};
/// Re-export the generator entry points.
pub use generator::{ContentSource, generate_sector};
/// Re-export point of interest.
pub use poi::Poi;
/// Re-export sector types.
pub use sector::{Sector, SectorDocument, Star, coord_label};
/// Re-export world types.
pub use world::{World, WorldTag};
