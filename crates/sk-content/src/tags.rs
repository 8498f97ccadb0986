//! World tags: short hooks that give each world its trouble.

use log::warn;
use rand::Rng;
use rand::rngs::StdRng;
use sk_core::WorldTag;

use crate::error::{ContentError, ContentResult};

/// A world tag as stored in the corpus.
#[derive(Debug, Clone, Copy)]
pub struct TagDef {
    /// Tag name.
    pub name: &'static str,
    /// What the tag means for a world.
    pub description: &'static str,
    /// Example enemies.
    pub enemies: &'static [&'static str],
    /// Example friends.
    pub friends: &'static [&'static str],
    /// Example complications.
    pub complications: &'static [&'static str],
    /// Example things.
    pub things: &'static [&'static str],
    /// Example places.
    pub places: &'static [&'static str],
}

impl TagDef {
    /// Owned copy for embedding in a generated world.
    pub fn to_world_tag(&self) -> WorldTag {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        WorldTag {
            name: self.name.to_string(),
            description: self.description.to_string(),
            enemies: owned(self.enemies),
            friends: owned(self.friends),
            complications: owned(self.complications),
            things: owned(self.things),
            places: owned(self.places),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// Every world tag.
pub static TAGS: &[TagDef] = &[
    TagDef {
        name: "Abandoned Colony",
        description: "The world once held a colony that died or fled, leaving its buildings to the weather.",
        enemies: &["Crazed survivor", "Scavenger chief", "Whatever killed the colonists"],
        friends: &["Surveyor for a new settlement", "Descendant hunting for family records"],
        complications: &["The colony is not quite empty", "A legal claim still covers the site"],
        things: &["Colony data core", "Sealed seed vault", "Undelivered payroll"],
        places: &["Overgrown landing field", "Hastily barricaded hospital"],
    },
    TagDef {
        name: "Alien Ruins",
        description: "Structures left by a vanished alien race dot the surface, and some of them still work.",
        enemies: &["Looter with heavy backing", "Cultist who thinks the builders will return"],
        friends: &["Xenoarchaeologist", "Ruin guide with a good memory"],
        complications: &["Local law forbids entering the ruins", "A device inside is still running"],
        things: &["Alien artifact of unknown use", "Translation key"],
        places: &["Half-buried spire", "Chamber that hums at night"],
    },
    TagDef {
        name: "Altered Humanity",
        description: "The locals were engineered or mutated into something not quite baseline human.",
        enemies: &["Purist agitator", "Geneticist who wants a new generation"],
        friends: &["Altered native curious about outsiders", "Offworld doctor"],
        complications: &["The alteration is failing", "Baseline humans are treated as lesser"],
        things: &["Original gene templates", "Suppressant stockpile"],
        places: &["Old gene clinic", "Settlement built for a different body plan"],
    },
    TagDef {
        name: "Badlands World",
        description: "Most of the surface is ruined waste, and settlements cling to the few habitable patches.",
        enemies: &["Raider warlord", "Water baron"],
        friends: &["Caravan master", "Terraforming engineer"],
        complications: &["Storms cut off travel for weeks", "Old weapons still lie in the dust"],
        things: &["Working atmosphere processor", "Map of safe routes"],
        places: &["Glass desert", "Fortified well town"],
    },
    TagDef {
        name: "Bubble Cities",
        description: "The population lives in sealed domes, and a breach means death for everyone inside.",
        enemies: &["Saboteur", "Dome administrator hoarding air"],
        friends: &["Seal technician", "Smuggler who runs between domes"],
        complications: &["A dome is losing pressure", "Neighbouring domes refuse refugees"],
        things: &["Emergency air reserves", "Dome control codes"],
        places: &["Airlock market", "Maintenance crawlway in the dome shell"],
    },
    TagDef {
        name: "Civil War",
        description: "Two or more factions are fighting openly for control of the world.",
        enemies: &["Ruthless field commander", "Arms dealer supplying both sides"],
        friends: &["Peace envoy", "Medic behind the lines"],
        complications: &["Both sides demand the party pick one", "The front moves overnight"],
        things: &["Captured war plans", "Refugee transit papers"],
        places: &["Shelled city quarter", "Ceasefire checkpoint"],
    },
    TagDef {
        name: "Cold War",
        description: "Rival powers on the world prepare for a war neither is ready to start.",
        enemies: &["Spymaster", "Provocateur seeking an incident"],
        friends: &["Defecting analyst", "Diplomat with back channels"],
        complications: &["Every offworlder is assumed to be a spy", "An accident could start the war"],
        things: &["Launch codes", "Leaked dossier"],
        places: &["Border embassy", "Neutral café full of listeners"],
    },
    TagDef {
        name: "Desert World",
        description: "Water is scarce and precious, and whoever controls it controls the world.",
        enemies: &["Cistern lord", "Sand raider"],
        friends: &["Nomad guide", "Hydrologist"],
        complications: &["A new water source has been found", "Dune storms bury the roads"],
        things: &["Deep aquifer map", "Moisture reclamation rig"],
        places: &["Oasis fortress", "Salt flat under a killing sun"],
    },
    TagDef {
        name: "Feral World",
        description: "Society collapsed into savagery after the Silence, and the survivors live by brutal custom.",
        enemies: &["Blood priest", "Tribal chieftain who fears outsiders"],
        friends: &["Reformer within the tribe", "Stranded trader"],
        complications: &["Outsiders are sacrificed", "The old ways hide a real danger"],
        things: &["Pretech heirloom used as an idol", "Record of the collapse"],
        places: &["Ruined arcology turned temple", "Killing ground"],
    },
    TagDef {
        name: "Forbidden Tech",
        description: "Someone on the world is building or hoarding technology that is banned for good reason.",
        enemies: &["Mad researcher", "Broker selling to the highest bidder"],
        friends: &["Investigator on the trail", "Conscience-stricken lab tech"],
        complications: &["The tech works exactly as feared", "Local authorities are complicit"],
        things: &["Prototype", "Research notes"],
        places: &["Hidden laboratory", "Test site that no longer exists on maps"],
    },
    TagDef {
        name: "Gold Rush",
        description: "A valuable discovery has brought a flood of prospectors and the trouble that follows them.",
        enemies: &["Claim jumper", "Company enforcer"],
        friends: &["Honest assayer", "Prospector with a real find"],
        complications: &["The strike is drying up", "The find belongs to something that wants it back"],
        things: &["Rich claim deed", "Cart of unrefined ore"],
        places: &["Boom town", "Crowded claim field"],
    },
    TagDef {
        name: "Hivemind",
        description: "Part of the population shares a single consciousness, and it is growing.",
        enemies: &["Speaker for the hive", "Anti-hive zealot"],
        friends: &["Newly freed member", "Researcher studying the link"],
        complications: &["Joining is not always voluntary", "The hive knows what any member knows"],
        things: &["Link suppression device", "Record of the hive's origin"],
        places: &["Silent city district", "Node chamber"],
    },
    TagDef {
        name: "Hostile Biosphere",
        description: "Native life is aggressive and deadly, and the colony survives behind walls.",
        enemies: &["Poacher of dangerous beasts", "Official hiding a breach"],
        friends: &["Xenobiologist", "Perimeter guard"],
        complications: &["The wilderness is spreading", "A useful drug only grows outside"],
        things: &["Effective repellent", "Beast specimen"],
        places: &["Walled settlement", "Jungle outpost overrun last year"],
    },
    TagDef {
        name: "Local Specialty",
        description: "The world produces something prized across the sector and guards the secret of making it.",
        enemies: &["Industrial spy", "Monopolist guild"],
        friends: &["Artisan", "Exporter"],
        complications: &["A cheap imitation is flooding the market", "The raw material is running out"],
        things: &["Master sample", "Production secret"],
        places: &["Workshop district", "Export warehouse"],
    },
    TagDef {
        name: "Major Spaceyard",
        description: "The world hosts a large orbital shipyard that builds and refits starships.",
        enemies: &["Corrupt yard boss", "Saboteur for a rival yard"],
        friends: &["Shipwright", "Dock union organiser"],
        complications: &["A warship is being built in secret", "Strikes have halted work"],
        things: &["Ship schematics", "Spike drive components"],
        places: &["Orbital dry dock", "Zero-g fitting hall"],
    },
    TagDef {
        name: "Night World",
        description: "The surface lies in permanent darkness, and the locals have adapted to it.",
        enemies: &["Thing that hunts in the dark", "Lamp-oil monopolist"],
        friends: &["Native guide who sees in the dark", "Astronomer"],
        complications: &["The lights are failing", "Visitors stand out badly"],
        things: &["Night-vision implants", "Generator core"],
        places: &["Lantern-lit market", "Cave city"],
    },
    TagDef {
        name: "Oceanic World",
        description: "Little or no land breaks the surface, and life is lived on or under the water.",
        enemies: &["Pirate captain", "Leviathan"],
        friends: &["Fishing fleet master", "Deep diver"],
        complications: &["A storm season is coming", "Something is rising from the trench"],
        things: &["Sunken cargo", "Submersible"],
        places: &["Floating city", "Pressure dome on the seabed"],
    },
    TagDef {
        name: "Pilgrimage Site",
        description: "A holy site draws pilgrims from across the sector, along with those who prey on them.",
        enemies: &["Relic forger", "Fanatic guard"],
        friends: &["Pilgrim", "Temple keeper"],
        complications: &["Rival faiths claim the site", "The holy relic is fake"],
        things: &["True relic", "Pilgrim donations"],
        places: &["Shrine complex", "Crowded pilgrim camp"],
    },
    TagDef {
        name: "Police State",
        description: "The government watches everything and punishes dissent without mercy.",
        enemies: &["Secret police chief", "Informer"],
        friends: &["Underground dissident", "Sympathetic officer"],
        complications: &["Offworlders need constant permits", "The resistance is infiltrated"],
        things: &["Surveillance records", "Forged identity papers"],
        places: &["Interrogation centre", "Checkpoint plaza"],
    },
    TagDef {
        name: "Prison Planet",
        description: "The world is a prison, whether for criminals sent from elsewhere or for its own people.",
        enemies: &["Warden", "Gang boss among the inmates"],
        friends: &["Wrongly convicted prisoner", "Guard with a conscience"],
        complications: &["Escape is impossible without help", "The prisoners run the place"],
        things: &["Release orders", "Contraband cache"],
        places: &["Cell block city", "Orbital control station"],
    },
    TagDef {
        name: "Radioactive World",
        description: "Radiation soaks the surface, from nature or an old war, and shortens every life.",
        enemies: &["Mutant raider", "Profiteer selling fake rad meds"],
        friends: &["Rad doctor", "Shelter warden"],
        complications: &["Radiation levels are rising", "The shelters are full"],
        things: &["Anti-radiation drugs", "Hardened vehicle"],
        places: &["Glowing crater", "Deep shelter"],
    },
    TagDef {
        name: "Sealed Menace",
        description: "Something terrible is locked away on the world, and the seal is weakening.",
        enemies: &["Cultist trying to open the seal", "Warden gone mad"],
        friends: &["Keeper of the seal", "Scholar of the old records"],
        complications: &["Only one person knows how to reseal it", "Breaking the seal would pay very well"],
        things: &["Key to the seal", "Account of the last breach"],
        places: &["Guarded vault", "Exclusion zone"],
    },
    TagDef {
        name: "Trade Hub",
        description: "Goods and ships from across the sector pass through the world's ports.",
        enemies: &["Smuggling kingpin", "Customs chief on the take"],
        friends: &["Merchant captain", "Broker"],
        complications: &["A trade war is brewing", "Contraband is everywhere"],
        things: &["Valuable cargo", "Shipping manifests"],
        places: &["Busy starport", "Bazaar of a hundred worlds"],
    },
    TagDef {
        name: "Zombies",
        description: "Some plague, nanite swarm, or psychic blight turns people into mindless, violent husks.",
        enemies: &["Researcher spreading the plague", "Survivor warlord"],
        friends: &["Immune survivor", "Quarantine officer"],
        complications: &["The infected can be cured, slowly", "The plague is spreading offworld"],
        things: &["Cure sample", "Evacuation transport"],
        places: &["Overrun city", "Fortified quarantine camp"],
    },
];

/// Look a tag up by name, ignoring case.
pub fn find_tag(name: &str) -> Option<&'static TagDef> {
    TAGS.iter().find(|t| t.matches(name))
}

/// Every tag name.
pub fn tag_names() -> Vec<&'static str> {
    TAGS.iter().map(|t| t.name).collect()
}

/// Check that every excluded name is a known tag and that at least two remain.
pub fn check_exclusions(exclude: &[String]) -> ContentResult<()> {
    if let Some(unknown) = exclude.iter().find(|name| find_tag(name).is_none()) {
        return Err(ContentError::UnknownTag(unknown.clone()));
    }
    let remaining = available(exclude).len();
    if remaining < 2 {
        return Err(ContentError::TooFewTags {
            excluded: TAGS.len() - remaining,
            remaining,
        });
    }
    Ok(())
}

/// Pick two distinct tags, skipping excluded names.
///
/// Falls back to the whole corpus when the exclusions leave fewer than two.
pub fn pick_pair(rng: &mut StdRng, exclude: &[String]) -> [WorldTag; 2] {
    let mut pool = available(exclude);
    if pool.len() < 2 {
        warn!("tag exclusions leave {} tag(s); ignoring them", pool.len());
        pool = TAGS.iter().collect();
    }

    let first = rng.random_range(0..pool.len());
    let mut second = rng.random_range(0..pool.len());
    while second == first {
        second = rng.random_range(0..pool.len());
    }
    [pool[first].to_world_tag(), pool[second].to_world_tag()]
}

fn available(exclude: &[String]) -> Vec<&'static TagDef> {
    TAGS.iter()
        .filter(|t| !exclude.iter().any(|x| t.matches(x)))
        .collect()
}
