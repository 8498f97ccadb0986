//! The built-in content corpus for sektor.
//!
//! Place names for each culture, the syllable name generator, 2d6 world
//! attribute tables, world tags, and points of interest. [`TableContent`]
//! plugs all of it into the sector generator.
//!
//! Characters ([`roll_npc`]) and alien species ([`roll_alien`]) are rolled
//! on their own, outside any sector.

pub mod alien;
pub mod error;
pub mod names;
pub mod npc;
pub mod people;
pub mod poi;
pub mod source;
pub mod tables;
pub mod tags;
pub mod world;

pub use alien::{Alien, roll_alien};
pub use error::{ContentError, ContentResult};
pub use npc::{Npc, roll_npc};
pub use people::{Gender, person_name};
pub use poi::{POI_KINDS, PoiKind, roll_poi};
pub use source::TableContent;
pub use tags::{TAGS, TagDef, check_exclusions, find_tag, tag_names};
pub use world::roll_world;
