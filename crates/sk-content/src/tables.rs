//! World attribute tables rolled on 2d6, and the secondary-world lists.

use sk_mechanics::{DiceExpr, Die, RollList, RollTable, TableEntry};

const TWO_D6: DiceExpr = DiceExpr::new(2, Die::D6);

/// Atmosphere.
pub static ATMOSPHERE: RollTable = RollTable::new(
    "Atmosphere",
    TWO_D6,
    &[
        TableEntry::single(2, "Corrosive"),
        TableEntry::single(3, "Inert gas"),
        TableEntry::single(4, "Airless or thin atmosphere"),
        TableEntry::range(5, 9, "Breathable mix"),
        TableEntry::single(10, "Thick atmosphere, breathable with a pressure mask"),
        TableEntry::single(11, "Invasive, toxic atmosphere"),
        TableEntry::single(12, "Corrosive and invasive atmosphere"),
    ],
);

/// Temperature.
pub static TEMPERATURE: RollTable = RollTable::new(
    "Temperature",
    TWO_D6,
    &[
        TableEntry::single(2, "Frozen"),
        TableEntry::single(3, "Cold"),
        TableEntry::range(4, 5, "Variable cold-to-temperate"),
        TableEntry::range(6, 8, "Temperate"),
        TableEntry::range(9, 10, "Variable temperate-to-warm"),
        TableEntry::single(11, "Warm"),
        TableEntry::single(12, "Burning"),
    ],
);

/// Biosphere.
pub static BIOSPHERE: RollTable = RollTable::new(
    "Biosphere",
    TWO_D6,
    &[
        TableEntry::single(2, "Remnant biosphere"),
        TableEntry::single(3, "Microbial life forms exist"),
        TableEntry::range(4, 5, "No native biosphere"),
        TableEntry::range(6, 8, "Human-miscible biosphere"),
        TableEntry::range(9, 10, "Immiscible biosphere"),
        TableEntry::single(11, "Hybrid biosphere"),
        TableEntry::single(12, "Engineered biosphere"),
    ],
);

/// Population.
pub static POPULATION: RollTable = RollTable::new(
    "Population",
    TWO_D6,
    &[
        TableEntry::single(2, "Failed colony"),
        TableEntry::single(3, "Outpost"),
        TableEntry::range(4, 5, "Fewer than a million inhabitants"),
        TableEntry::range(6, 8, "Several million inhabitants"),
        TableEntry::range(9, 10, "Hundreds of millions of inhabitants"),
        TableEntry::single(11, "Billions of inhabitants"),
        TableEntry::single(12, "Alien inhabitants"),
    ],
);

/// Tech level. Every entry starts with its `TLn` code followed by a comma.
pub static TECH_LEVEL: RollTable = RollTable::new(
    "Tech Level",
    TWO_D6,
    &[
        TableEntry::single(2, "TL0, neolithic-level technology"),
        TableEntry::single(3, "TL1, medieval technology"),
        TableEntry::range(4, 5, "TL2, early Industrial Age tech"),
        TableEntry::range(6, 8, "TL4, modern postech"),
        TableEntry::range(9, 10, "TL3, tech like that of present-day Earth"),
        TableEntry::single(11, "TL4+, postech with specialties"),
        TableEntry::single(12, "TL5, pretech with surviving infrastructure"),
    ],
);

/// How a secondary world came to be settled.
pub static ORIGIN: RollList = RollList::new(
    "Origin of the World",
    &[
        "Recent colony from the primary world",
        "Refuge for exiles from primary",
        "Founded ages ago by a different group",
        "Founded long before the primary world",
        "Lost ancient colony of the primary",
        "Colony recently torn free of the primary",
        "Long-standing cooperative colony world",
        "Recent interstellar colony from elsewhere",
    ],
);

/// How a secondary world feels about the primary.
pub static RELATIONSHIP: RollList = RollList::new(
    "Current Relationship",
    &[
        "Confirmed hatred of each other",
        "Active cold war between them",
        "Old grudges or resentments",
        "Cultural disgust and avoidance",
        "Polite interchange and trade",
        "Cultural admiration for primary",
        "Long-standing friendship",
        "Unflinching mutual loyalty",
    ],
);

/// What keeps a secondary world in touch with the primary.
pub static CONTACT: RollList = RollList::new(
    "Contact Point",
    &[
        "Trade in vital goods",
        "Shared religion",
        "Mutual language",
        "Entertainment content",
        "Shared research",
        "Threat to both of them",
        "Shared elite families",
        "Exploiting shared resource",
    ],
);

/// Every weighted world table, for validation and listing.
pub static WORLD_TABLES: [&RollTable; 5] =
    [&ATMOSPHERE, &TEMPERATURE, &BIOSPHERE, &POPULATION, &TECH_LEVEL];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sk_mechanics::Rollable;

    #[test]
    fn world_tables_cover_2d6() {
        for table in WORLD_TABLES {
            table.validate().unwrap_or_else(|e| panic!("{}: {e}", table.name));
        }
    }

    #[test]
    fn secondary_lists_have_eight_entries() {
        for list in [&ORIGIN, &RELATIONSHIP, &CONTACT] {
            assert_eq!(list.len(), 8, "{}", list.name);
        }
    }

    #[test]
    fn tech_levels_lead_with_code() {
        for entry in TECH_LEVEL.entries {
            let code = entry.text.split(',').next().unwrap();
            assert!(code.starts_with("TL"), "{}", entry.text);
            assert!(entry.text.contains(", "), "{}", entry.text);
        }
    }

    #[test]
    fn modern_postech_is_most_common() {
        let mut rng = StdRng::seed_from_u64(3);
        let rolls: Vec<String> = (0..600).map(|_| TECH_LEVEL.roll(&mut rng)).collect();
        let modern = rolls.iter().filter(|r| r.starts_with("TL4,")).count();
        let pretech = rolls.iter().filter(|r| r.starts_with("TL5")).count();
        assert!(modern > pretech * 4, "modern {modern}, pretech {pretech}");
    }
}
