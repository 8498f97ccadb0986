//! Non-player characters: who they are, how they deal, and what a patron wants.

use rand::rngs::StdRng;
use sk_core::format::table;
use sk_core::{Culture, Format, OutputFormat};
use sk_mechanics::{DiceExpr, Die, RollList, RollTable, Rollable, TableAction, TableEntry};

use crate::people::{Gender, person_name};

/// How old the character is.
pub static AGE: RollList = RollList::new(
    "Age",
    &[
        "Strikingly young or old for their position",
        "Young adult",
        "In their prime",
        "Middle-aged or elderly",
    ],
);

static SOCIAL_CLASS: RollList = RollList::new(
    "Social class",
    &[
        "Poorest natives",
        "Labourers and cube workers",
        "Aspiring middle class",
        "Local elite",
    ],
);

/// Where the character comes from. Outsiders also get a local class.
pub static BACKGROUND: RollTable = RollTable::new(
    "Background",
    DiceExpr::new(1, Die::D6),
    &[
        TableEntry::single(1, "Poorest natives"),
        TableEntry::single(2, "Labourers and cube workers"),
        TableEntry::single(3, "Aspiring middle class"),
        TableEntry::single(4, "Local elite"),
        TableEntry::single(5, "Minority or foreigner").with_action(TableAction::Chain(&SOCIAL_CLASS)),
        TableEntry::single(6, "Offworlder or exotic").with_action(TableAction::Chain(&SOCIAL_CLASS)),
    ],
);

/// What the character does for a living.
pub static ROLE: RollList = RollList::new(
    "Role in Society",
    &[
        "Criminal: fence, enforcer, con artist",
        "Menial: cleaner, shop hand, servant",
        "Heavy labour: docker, hauler, builder",
        "Skilled trade: mechanic, medic, pilot",
        "Knowledge work: coder, analyst, writer",
        "Commerce: trader, banker, shopkeeper",
        "Officialdom: clerk, courtier, inspector",
        "Force: soldier, guard, constable",
    ],
);

/// What weighs on the character most.
pub static PROBLEM: RollList = RollList::new(
    "Biggest Problem",
    &[
        "Crushing debt",
        "Someone they love is in trouble",
        "A failed romance",
        "An addiction they hide badly",
        "A superior who resents them",
        "A lingering illness",
        "They loathe their work",
        "Someone dangerous is hunting them",
        "They are chasing a ruinous goal",
        "Nothing worth mentioning",
    ],
);

/// What the character wants most.
pub static DESIRE: RollList = RollList::new(
    "Greatest Desire",
    &[
        "A particular lover",
        "Money for themselves or family",
        "Promotion",
        "The truth about an old wound",
        "Revenge on an enemy",
        "Rescue for a struggling friend",
        "A completely different job",
        "Protection from a threat",
        "Escape from their current life",
        "Fame",
        "Power over the people around them",
        "Nothing; they are content",
    ],
);

/// The trait anyone meeting them notices first.
pub static TRAIT: RollList = RollList::new(
    "Most Obvious Trait",
    &[
        "Ambition", "Greed", "Bitterness", "Courage", "Cowardice", "Curiosity", "Deceit",
        "Stubbornness", "Zeal", "Family loyalty", "Hatred", "Honesty", "Optimism",
        "Devotion to someone", "Nihilism", "Paternalism", "Gloom", "Protectiveness",
        "Resentment", "Shame",
    ],
);

/// How the character first treats the party.
pub static MANNER: RollList = RollList::new(
    "Initial Manner",
    &[
        "Fawning and eager to please",
        "Openly suspicious",
        "Fascinated by strangers",
        "Businesslike",
        "Flirtatious",
        "Pushy salesman patter",
        "Awestruck",
        "Cool and superior",
        "Desperate",
        "Fearful",
        "Tipsy and overfamiliar",
        "Distracted by their own troubles",
    ],
);

/// How the character honours a bargain by default.
pub static OUTCOME: RollList = RollList::new(
    "Default Deal Outcome",
    &[
        "Will betray the party even at a loss",
        "Plans to betray the party",
        "Keeps the deal only under pressure",
        "Twists the terms in their favour",
        "Keeps their word while it pays",
        "Pays late and grudgingly",
        "Keeps most of the deal",
        "Keeps the deal but asks a small favour",
        "Reliable unless it hurts them",
        "Scrupulously fair",
        "Keeps bargains even at their own cost",
    ],
);

/// Why the character acts.
pub static MOTIVATION: RollList = RollList::new(
    "Motivation",
    &[
        "Greed",
        "Fear of a rival",
        "Love",
        "Ideology",
        "Boredom",
        "Duty to an employer",
        "Revenge",
        "Religious conviction",
        "Protecting family",
        "Ambition",
    ],
);

/// What the character wants from the party.
pub static WANT: RollList = RollList::new(
    "Want",
    &[
        "Deliver a message no one else will carry",
        "Find a missing person",
        "Recover stolen property",
        "Escort them somewhere dangerous",
        "Keep a secret buried",
        "Embarrass a rival",
        "Buy something the party owns",
        "Smuggle a small package",
        "Vouch for them to the authorities",
        "Get rid of an inconvenient witness",
    ],
);

/// What leverage the character has.
pub static POWER: RollList = RollList::new(
    "Power",
    &[
        "Plenty of money",
        "Friends in the government",
        "A loyal gang",
        "Knowledge others would kill for",
        "A working starship",
        "Control of a vital supply",
        "Blackmail material",
        "A devoted congregation",
        "Respect of the local underworld",
        "Nothing but charm",
    ],
);

/// A detail that makes the character memorable.
pub static HOOK: RollList = RollList::new(
    "Hook",
    &[
        "A striking scar",
        "Always eating",
        "Speaks only through an assistant",
        "Dresses far above their station",
        "Constant nervous laughter",
        "Collects something odd",
        "Never without a bodyguard",
        "Quotes scripture at every turn",
        "Heavy cybernetic modifications",
        "An unmistakable voice",
    ],
);

/// First reaction when the party meets them.
pub static REACTION: RollTable = RollTable::new(
    "Reaction",
    DiceExpr::new(2, Die::D6),
    &[
        TableEntry::single(2, "Hostile, as far as is plausible"),
        TableEntry::range(3, 5, "Unfriendly and unhelpful"),
        TableEntry::range(6, 8, "Neutral and wary"),
        TableEntry::range(9, 11, "Positive, open to cooperation"),
        TableEntry::single(12, "Friendly and as helpful as they can be"),
    ],
);

/// How keen a patron is to hire.
pub static EAGERNESS: RollList = RollList::new(
    "Eagerness to Hire",
    &[
        "Cautious, needs convincing",
        "Offers standard rates",
        "Eager, offers a bonus",
        "Desperate, promises more than they have",
    ],
);

/// How far a patron can be trusted.
pub static TRUST: RollList = RollList::new(
    "Trustworthiness",
    &[
        "Means to cheat the party completely",
        "Pays only when forced",
        "Pays slowly",
        "Docks pay for every mistake",
        "Pays without argument",
        "Pays more than promised",
    ],
);

/// The heart of the job.
pub static CHALLENGE: RollList = RollList::new(
    "Basic Challenge",
    &[
        "Kill someone who may deserve it",
        "Kidnap someone dangerous",
        "Steal a guarded object",
        "Sabotage a facility",
        "Prove a crime was committed",
        "Protect someone under threat",
        "Move someone through danger",
        "Guard a shipment",
    ],
);

/// What stands against the patron.
pub static OPPOSITION: RollList = RollList::new(
    "Main Opposition",
    &[
        "A treacherous ally or employee",
        "A known enemy of the patron",
        "Government interference",
        "A rival the patron knows nothing about",
        "The target itself fights back",
        "An impossible deadline",
        "The job is badly illegal",
        "Someone profits if it fails",
        "The patron is wrong about something important",
        "The locals side against the patron",
    ],
);

/// What the patron can offer besides cash.
pub static REWARD: RollList = RollList::new(
    "Non-Cash Reward",
    &[
        "Favours from an official",
        "Local property",
        "Goods worth a fortune elsewhere",
        "Pretech mod parts",
        "A useful pretech artifact",
        "Information the party needs",
        "Membership in a powerful group",
        "Black market contacts",
        "Access to a restricted shipyard",
        "Shares in a business",
        "A treasure map",
        "Illegal weapons",
    ],
);

/// What goes wrong on the job.
pub static COMPLICATION: RollList = RollList::new(
    "Complication",
    &[
        "An ambush",
        "The enemy learns who the party is",
        "The patron's help is faulty",
        "Failure would be lethal",
        "The job marks them as allies of a faction",
        "The target is physically dangerous",
        "A key location is hard to enter",
        "Success would be distasteful",
        "An ally is useless",
        "The job changes halfway through",
        "Critical gear fails",
        "Payment comes in an awkward form",
        "Someone is betraying the patron",
        "No complications; it is what it seems",
    ],
);

/// The tables rolled for a patron, in write-up order.
pub static PATRON_TABLES: [&RollList; 6] =
    [&EAGERNESS, &TRUST, &CHALLENGE, &OPPOSITION, &REWARD, &COMPLICATION];

/// A generated character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    /// Full name.
    pub name: String,
    /// Cultural background.
    pub culture: Culture,
    /// Gender.
    pub gender: Gender,
    /// Age, background, role, problem, desire, and trait.
    pub details: Vec<(&'static str, String)>,
    /// Manner, deal outcome, motivation, want, power, hook, and reaction.
    pub hooks: Vec<(&'static str, String)>,
    /// The job on offer, if the character is a patron.
    pub patron: Option<Vec<(&'static str, String)>>,
}

fn row(list: &RollList, rng: &mut StdRng) -> (&'static str, String) {
    (list.name, list.roll(rng))
}

/// Roll a character. Patrons also get a job.
pub fn roll_npc(rng: &mut StdRng, culture: Culture, gender: Gender, patron: bool) -> Npc {
    let name = person_name(culture, gender, rng);
    let details = vec![
        row(&AGE, rng),
        (BACKGROUND.name, BACKGROUND.roll(rng)),
        row(&ROLE, rng),
        row(&PROBLEM, rng),
        row(&DESIRE, rng),
        row(&TRAIT, rng),
    ];
    let hooks = vec![
        row(&MANNER, rng),
        row(&OUTCOME, rng),
        row(&MOTIVATION, rng),
        row(&WANT, rng),
        row(&POWER, rng),
        row(&HOOK, rng),
        (REACTION.name, REACTION.roll(rng)),
    ];
    let patron = patron.then(|| PATRON_TABLES.iter().map(|t| row(t, rng)).collect());

    Npc {
        name,
        culture,
        gender,
        details,
        hooks,
        patron,
    }
}

fn borrowed<'a>(rows: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    rows.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

impl Format for Npc {
    fn format(&self, fmt: OutputFormat) -> String {
        let culture = self.culture.to_string();
        let mut rows = vec![("Culture", culture.as_str()), ("Gender", self.gender.as_str())];
        rows.extend(borrowed(&self.details));

        let mut out = table(fmt, Some(self.name.as_str()), &rows);
        out.push('\n');
        out.push_str(&table(fmt, Some("Hooks"), &borrowed(&self.hooks)));
        if let Some(patron) = &self.patron {
            out.push('\n');
            out.push_str(&table(fmt, Some("Patron"), &borrowed(patron)));
        }
        out
    }
}
