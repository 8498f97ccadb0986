//! Alien species: body plan, cultural lens, and social structure.

use rand::rngs::StdRng;
use sk_core::format::table;
use sk_core::{Format, OutputFormat};
use sk_mechanics::{DiceExpr, Die, RollList, RollTable, Rollable, TableAction, TableEntry};

static BODY_TYPES: RollList = RollList::new(
    "Body types",
    &[
        "Avian",
        "Reptilian",
        "Insectile",
        "Mammalian",
        "Exotic matter",
    ],
);

/// Body plan. Hybrids mix two or more of the other types.
pub static BODY: RollTable = RollTable::new(
    "Body",
    DiceExpr::new(1, Die::D6),
    &[
        TableEntry::single(1, "Avian: winged, bat-like or pterosaurian"),
        TableEntry::single(2, "Reptilian: scaled, amphibious or draconic"),
        TableEntry::single(3, "Insectile: chitinous, many-limbed or hive-built"),
        TableEntry::single(4, "Mammalian: furred or bare-skinned"),
        TableEntry::single(5, "Exotic: made of some unfamiliar substance"),
        TableEntry::single(6, "Hybrid").with_action(TableAction::Mix {
            list: &BODY_TYPES,
            min: 2,
            max: 5,
        }),
    ],
);

/// The trait that colours how the species sees everything.
pub static LENS: RollList = RollList::new(
    "Lens",
    &[
        "Collectivity", "Curiosity", "Despair", "Dominion", "Faith", "Fear", "Gluttony",
        "Greed", "Hate", "Honour", "Wandering", "Joy", "Pacifism", "Pride", "Wisdom",
        "Subtlety", "Tradition", "Treachery", "Tribalism", "Wrath",
    ],
);

static GOVERNMENTS: RollList = RollList::new(
    "Governments",
    &["Democratic", "Monarchic", "Tribal", "Oligarchic"],
);

/// How the species governs itself. Multipolar species run several systems at once.
pub static SOCIAL_STRUCTURE: RollTable = RollTable::new(
    "Social Structure",
    DiceExpr::new(1, Die::D8),
    &[
        TableEntry::single(1, "Democratic"),
        TableEntry::single(2, "Monarchic"),
        TableEntry::single(3, "Tribal"),
        TableEntry::single(4, "Oligarchic"),
        TableEntry::range(5, 6, "Multipolar, competitive").with_action(TableAction::Mix {
            list: &GOVERNMENTS,
            min: 2,
            max: 4,
        }),
        TableEntry::range(7, 8, "Multipolar, cooperative").with_action(TableAction::Mix {
            list: &GOVERNMENTS,
            min: 2,
            max: 4,
        }),
    ],
);

/// A generated alien species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alien {
    /// Body plan.
    pub body: String,
    /// Cultural lens.
    pub lens: String,
    /// Social structure.
    pub social_structure: String,
}

/// Roll a species.
pub fn roll_alien(rng: &mut StdRng) -> Alien {
    Alien {
        body: BODY.roll(rng),
        lens: LENS.roll(rng),
        social_structure: SOCIAL_STRUCTURE.roll(rng),
    }
}

impl Format for Alien {
    fn format(&self, fmt: OutputFormat) -> String {
        table(
            fmt,
            Some("Alien"),
            &[
                (BODY.name, self.body.as_str()),
                (LENS.name, self.lens.as_str()),
                (SOCIAL_STRUCTURE.name, self.social_structure.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn tables_cover_their_dice() {
        assert_eq!(BODY.validate(), Ok(()));
        assert_eq!(SOCIAL_STRUCTURE.validate(), Ok(()));
        assert_eq!(LENS.len(), 20);
    }

    #[test]
    fn hybrids_mix_distinct_body_types() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut seen_hybrid = false;
        for _ in 0..200 {
            let body = BODY.roll(&mut rng);
            let Some(types) = body.strip_prefix("Hybrid: ") else {
                continue;
            };
            seen_hybrid = true;
            let parts: Vec<&str> = types.split(", ").collect();
            assert!((2..=5).contains(&parts.len()), "{body}");
            assert!(parts.iter().all(|p| BODY_TYPES.items.contains(p)));
        }
        assert!(seen_hybrid);
    }

    #[test]
    fn multipolar_species_name_their_governments() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let social = SOCIAL_STRUCTURE.roll(&mut rng);
            if let Some((_, parts)) = social.split_once(": ") {
                assert!(social.starts_with("Multipolar"));
                let count = parts.split(", ").count();
                assert!((2..=4).contains(&count), "{social}");
            } else {
                assert!(GOVERNMENTS.items.contains(&social.as_str()), "{social}");
            }
        }
    }

    #[test]
    fn write_up() {
        let alien = Alien {
            body: "Reptilian".into(),
            lens: "Pride".into(),
            social_structure: "Tribal".into(),
        };
        assert_eq!(
            alien.format(OutputFormat::Text),
            "Alien\nBody             : Reptilian\nLens             : Pride\nSocial Structure : Tribal\n"
        );
    }

    #[test]
    fn rolled_species_fills_every_field() {
        let mut rng = StdRng::seed_from_u64(14);
        let alien = roll_alien(&mut rng);
        assert!(!alien.body.is_empty() && !alien.social_structure.is_empty());
        assert!(LENS.items.contains(&alien.lens.as_str()));
    }
}
