//! [`TableContent`], the table-driven content source for the sector generator.

use log::trace;
use rand::rngs::StdRng;
use sk_core::{ContentSource, Culture, Poi, World};

use crate::{names, poi, world};

/// [`ContentSource`] backed by the built-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableContent;

impl TableContent {
    /// Create the table-backed source.
    pub fn new() -> Self {
        Self
    }
}

impl ContentSource for TableContent {
    fn system_name(&mut self, rng: &mut StdRng) -> String {
        let name = names::system_name(rng);
        trace!("candidate system name {name}");
        name
    }

    fn primary_world(
        &mut self,
        rng: &mut StdRng,
        culture: Culture,
        exclude_tags: &[String],
        full_tags: bool,
    ) -> World {
        world::roll_world(rng, culture, true, exclude_tags, full_tags)
    }

    fn secondary_world(
        &mut self,
        rng: &mut StdRng,
        culture: Culture,
        exclude_tags: &[String],
        full_tags: bool,
    ) -> World {
        world::roll_world(rng, culture, false, exclude_tags, full_tags)
    }

    fn poi(&mut self, rng: &mut StdRng) -> Poi {
        poi::roll_poi(rng)
    }
}
