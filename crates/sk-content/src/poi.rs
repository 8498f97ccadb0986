//! Points of interest: a kind of place, who is there, and what is going on.

use rand::Rng;
use rand::rngs::StdRng;
use sk_core::Poi;
use sk_mechanics::{RollList, Rollable};

/// Column headers of the three-part table.
pub const HEADERS: [&str; 3] = ["A Point", "Occupied By", "With This Situation"];

/// One kind of point of interest with its two sub-tables.
#[derive(Debug, Clone, Copy)]
pub struct PoiKind {
    /// What the point is.
    pub name: &'static str,
    /// Who might be there.
    pub occupied_by: RollList,
    /// What might be happening.
    pub situation: RollList,
}

impl PoiKind {
    const fn new(
        name: &'static str,
        occupied_by: &'static [&'static str],
        situation: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            occupied_by: RollList::new(HEADERS[1], occupied_by),
            situation: RollList::new(HEADERS[2], situation),
        }
    }

    /// Roll who and what for this kind.
    pub fn roll(&self, rng: &mut StdRng) -> Poi {
        Poi {
            point: self.name.to_string(),
            occupied_by: self.occupied_by.roll(rng),
            situation: self.situation.roll(rng),
        }
    }
}

/// Every kind of point of interest.
pub static POI_KINDS: [PoiKind; 8] = [
    PoiKind::new(
        "Deep-space station",
        &[
            "Transhumans of unsettling habits",
            "Preserved corpses of the old crew",
            "Covert military observers",
            "Eccentric oligarch and hangers-on",
            "Brilliant, unhinged scientist",
        ],
        &[
            "Systems failing one by one",
            "Sabotage by a foreign power",
            "Secret market for the rich",
            "Vault of dangerous pretech",
            "Quiet supply depot for pirates",
        ],
    ),
    PoiKind::new(
        "Asteroid base",
        &[
            "Religious sectarians",
            "Rebels who lost on another world",
            "Wage-slave miners",
            "Independent prospectors",
            "Pirates posing as miners",
        ],
        &[
            "Life support failing",
            "The rock is nearly mined out",
            "Miners dug up something awful",
            "Feud with a neighbouring rock",
            "Struck a fortune in ore",
        ],
    ),
    PoiKind::new(
        "Remote moon base",
        &[
            "Luckless corporate researchers",
            "Reclusive genius",
            "Last remnant of a failed colony",
            "Military listening post",
            "Lonely overseers of robot miners",
        ],
        &[
            "Something below has woken",
            "Criminals seizing control",
            "Outbreak of an unknown disease",
            "Desperately short of supplies",
            "Wealthy and poorly defended",
        ],
    ),
    PoiKind::new(
        "Ancient orbital ruin",
        &[
            "Robots that may be sentient",
            "Scavengers quick to shoot",
            "Government researchers",
            "Quarantine troops",
            "Heirs of the alien builders",
        ],
        &[
            "Something inside is waking",
            "Visitors tampering with strange tech",
            "A disaster is imminent",
            "A terrible secret just surfaced",
            "Holding off interlopers",
        ],
    ),
    PoiKind::new(
        "Research base",
        &[
            "Escaped experiments",
            "Corporate scientists",
            "Black-budget government team",
            "Agents of a foreign power",
            "Aliens studying the locals",
        ],
        &[
            "Dangerous work underway",
            "Monstrous, unethical research",
            "Staff held hostage",
            "Creations loose in the halls",
            "Selling tech on the black market",
        ],
    ),
    PoiKind::new(
        "Asteroid belt",
        &[
            "Hard-bitten belter miners",
            "Ancient guardian drones",
            "Survivors of a destroyed base",
            "Pirates hiding in the rocks",
            "Bored patrol crews",
        ],
        &[
            "A cracked rock released a hazard",
            "Spy ships hide in the belt",
            "Rush for a new mineral",
            "Ruins found on the rocks",
            "War between mining claims",
        ],
    ),
    PoiKind::new(
        "Gas giant mine",
        &[
            "Indentured gas miners",
            "Odd robots and their keepers",
            "Scientists studying native life",
            "Scrappers in an abandoned mine",
            "Poor separatists",
        ],
        &[
            "Things rising from the depths",
            "Out of vital supplies",
            "Workers in open revolt",
            "Pirates refuel here in secret",
            "Alien remains discovered",
        ],
    ),
    PoiKind::new(
        "Refueling station",
        &[
            "Half-mad caretaker",
            "Purveyors of vice",
            "Price-gouging company staff",
            "Missionaries to passing crews",
            "Automated vendors and nobody else",
        ],
        &[
            "A ship nearby is in distress",
            "Pirates have seized it",
            "Customs agents on the take",
            "Saboteurs at work",
            "Picking up an alien signal",
        ],
    ),
];

/// Roll a random point of interest.
pub fn roll_poi(rng: &mut StdRng) -> Poi {
    POI_KINDS[rng.random_range(0..POI_KINDS.len())].roll(rng)
}
