//! Personal names per culture.

use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use sk_core::Culture;
use sk_mechanics::{RollList, Rollable};

use crate::error::ContentError;

/// Gender of a generated person, which picks the given-name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Drawn from the male given names.
    Male,
    /// Drawn from the female given names.
    Female,
    /// Drawn from either list.
    Other,
}

impl Gender {
    /// Every gender.
    pub const ALL: [Gender; 3] = [Self::Male, Self::Female, Self::Other];

    /// A uniformly random gender.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ContentError::UnknownGender(wanted.to_string()))
    }
}

/// Given names and surnames for one culture.
#[derive(Debug, Clone, Copy)]
pub struct PersonNames {
    /// Male given names.
    pub male: RollList,
    /// Female given names.
    pub female: RollList,
    /// Family names.
    pub surname: RollList,
}

impl PersonNames {
    const fn new(
        male: &'static [&'static str],
        female: &'static [&'static str],
        surname: &'static [&'static str],
    ) -> Self {
        Self {
            male: RollList::new("Male names", male),
            female: RollList::new("Female names", female),
            surname: RollList::new("Surnames", surname),
        }
    }
}

static ARABIC: PersonNames = PersonNames::new(
    &["Amir", "Faisal", "Hakim", "Idris", "Karim", "Mahmud", "Nasser", "Rashid", "Tariq", "Yusuf"],
    &["Aisha", "Dalia", "Farah", "Hana", "Jamila", "Layla", "Mariam", "Nadia", "Salma", "Zainab"],
    &["al-Amin", "Bakr", "Darwish", "Haddad", "Khalil", "Mansour", "Nasr", "Qasim", "Saleh", "Zayed"],
);

static CHINESE: PersonNames = PersonNames::new(
    &["Bo", "Chen", "Gang", "Jian", "Lei", "Ming", "Qiang", "Tao", "Wei", "Zhong"],
    &["Fang", "Hua", "Jing", "Lan", "Li", "Mei", "Na", "Xiu", "Yan", "Yun"],
    &["Chen", "Guo", "He", "Huang", "Li", "Liu", "Wang", "Wu", "Zhang", "Zhou"],
);

static ENGLISH: PersonNames = PersonNames::new(
    &["Arthur", "Edmund", "Geoffrey", "Harold", "Jack", "Oliver", "Percy", "Robert", "Thomas", "Walter"],
    &["Agnes", "Alice", "Beatrice", "Edith", "Eleanor", "Florence", "Joan", "Margaret", "Rose", "Victoria"],
    &["Ashdown", "Barker", "Cooper", "Fletcher", "Hughes", "Marsh", "Pryce", "Thatcher", "Walker", "Wright"],
);

static GREEK: PersonNames = PersonNames::new(
    &["Alexios", "Demetrios", "Giorgos", "Konstantinos", "Leandros", "Nikos", "Petros", "Spyros", "Stavros", "Yannis"],
    &["Athena", "Daphne", "Eleni", "Ioanna", "Kalliope", "Maria", "Penelope", "Sofia", "Theodora", "Zoe"],
    &["Angelopoulos", "Dimitriou", "Georgiou", "Kallas", "Makris", "Nikolaidis", "Papadakis", "Stavrou", "Vlachos", "Zervas"],
);

static INDIAN: PersonNames = PersonNames::new(
    &["Arjun", "Dev", "Harish", "Kiran", "Manoj", "Naveen", "Pranav", "Rahul", "Sanjay", "Vikram"],
    &["Ananya", "Deepa", "Gita", "Kavya", "Lakshmi", "Meera", "Priya", "Radha", "Sunita", "Uma"],
    &["Bhatt", "Chopra", "Desai", "Iyer", "Kapoor", "Menon", "Nair", "Rao", "Sharma", "Verma"],
);

static JAPANESE: PersonNames = PersonNames::new(
    &["Daichi", "Haruto", "Hiroshi", "Kenji", "Makoto", "Ren", "Shin", "Takeshi", "Yuto", "Yoshiro"],
    &["Akiko", "Aoi", "Emi", "Hana", "Keiko", "Mai", "Naomi", "Sakura", "Yui", "Yumiko"],
    &["Fujita", "Hayashi", "Ito", "Kato", "Kobayashi", "Mori", "Nakamura", "Sato", "Tanaka", "Yamada"],
);

static LATIN: PersonNames = PersonNames::new(
    &["Aulus", "Decimus", "Gaius", "Lucius", "Marcus", "Publius", "Quintus", "Servius", "Titus", "Tiberius"],
    &["Aurelia", "Claudia", "Cornelia", "Flavia", "Julia", "Livia", "Octavia", "Porcia", "Valeria", "Vipsania"],
    &["Agrippa", "Brutus", "Cato", "Crassus", "Galba", "Gracchus", "Nerva", "Scipio", "Severus", "Varro"],
);

static NIGERIAN: PersonNames = PersonNames::new(
    &["Adebayo", "Chidi", "Emeka", "Femi", "Ifeanyi", "Kayode", "Nnamdi", "Obinna", "Segun", "Tunde"],
    &["Adaeze", "Amara", "Chioma", "Folake", "Ifeoma", "Kemi", "Ngozi", "Nkechi", "Titilayo", "Yetunde"],
    &["Adeyemi", "Bello", "Eze", "Nwosu", "Obi", "Ogunleye", "Okafor", "Okonkwo", "Oyelaran", "Uche"],
);

static RUSSIAN: PersonNames = PersonNames::new(
    &["Aleksei", "Boris", "Dmitri", "Grigori", "Ivan", "Maksim", "Nikolai", "Pavel", "Sergei", "Yuri"],
    &["Anastasia", "Daria", "Ekaterina", "Irina", "Ludmila", "Natalia", "Olga", "Svetlana", "Tatiana", "Vera"],
    &["Belov", "Fedorov", "Ivanov", "Kuznetsov", "Morozov", "Orlov", "Petrov", "Smirnov", "Sokolov", "Volkov"],
);

static SPANISH: PersonNames = PersonNames::new(
    &["Alejandro", "Carlos", "Diego", "Enrique", "Francisco", "Javier", "Luis", "Miguel", "Rafael", "Santiago"],
    &["Ana", "Beatriz", "Carmen", "Dolores", "Elena", "Isabel", "Lucia", "Mercedes", "Pilar", "Sofia"],
    &["Castillo", "Delgado", "Fernandez", "Garcia", "Herrera", "Lopez", "Morales", "Navarro", "Ortega", "Ruiz"],
);

/// The personal-name lists for a culture.
pub fn people(culture: Culture) -> &'static PersonNames {
    match culture {
        Culture::Arabic => &ARABIC,
        Culture::Chinese => &CHINESE,
        Culture::English => &ENGLISH,
        Culture::Greek => &GREEK,
        Culture::Indian => &INDIAN,
        Culture::Japanese => &JAPANESE,
        Culture::Latin => &LATIN,
        Culture::Nigerian => &NIGERIAN,
        Culture::Russian => &RUSSIAN,
        Culture::Spanish => &SPANISH,
    }
}

/// A full name, given name then surname. `Other` draws from either list.
pub fn person_name(culture: Culture, gender: Gender, rng: &mut StdRng) -> String {
    let names = people(culture);
    let given = match gender {
        Gender::Male => &names.male,
        Gender::Female => &names.female,
        Gender::Other if rng.random_bool(0.5) => &names.male,
        Gender::Other => &names.female,
    };
    format!("{} {}", given.roll(rng), names.surname.roll(rng))
}
