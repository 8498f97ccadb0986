//! Rolling complete worlds from the tables.

use rand::rngs::StdRng;
use sk_core::{Culture, World};
use sk_mechanics::Rollable;

use crate::{names, tables, tags};

/// Roll a world. Secondary worlds also get an origin, relationship, and contact point.
pub fn roll_world(
    rng: &mut StdRng,
    culture: Culture,
    primary: bool,
    exclude_tags: &[String],
    full_tags: bool,
) -> World {
    let tags = tags::pick_pair(rng, exclude_tags);
    let name = names::place_name(culture, rng);
    let atmosphere = tables::ATMOSPHERE.roll(rng);
    let temperature = tables::TEMPERATURE.roll(rng);
    let biosphere = tables::BIOSPHERE.roll(rng);
    let population = tables::POPULATION.roll(rng);
    let tech_level = tables::TECH_LEVEL.roll(rng);

    let (origin, relationship, contact) = if primary {
        (None, None, None)
    } else {
        (
            Some(tables::ORIGIN.roll(rng)),
            Some(tables::RELATIONSHIP.roll(rng)),
            Some(tables::CONTACT.roll(rng)),
        )
    };

    World {
        primary,
        full_tags,
        name,
        culture,
        tags,
        atmosphere,
        temperature,
        biosphere,
        population,
        tech_level,
        origin,
        relationship,
        contact,
    }
}
