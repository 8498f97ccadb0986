//! Place names per culture and the syllable-based system name generator.

use rand::Rng;
use rand::rngs::StdRng;
use sk_core::Culture;
use sk_mechanics::{DiceExpr, Die, RollList, RollTable, Rollable, TableEntry};

/// Consonant clusters that read badly at the start of a name begin with one
/// of these and are followed by anything other than a vowel or `h`.
const AWKWARD_LEADS: &[char] = &['c', 'f', 'l', 'm', 'n', 'r'];
const SOFT_FOLLOWERS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'h'];

static VOWELS: RollTable = RollTable::new(
    "Vowels",
    DiceExpr::new(10, Die::Custom(5)),
    &[
        TableEntry::single(10, "ii"),
        TableEntry::single(11, "yu"),
        TableEntry::single(12, "uy"),
        TableEntry::single(13, "oy"),
        TableEntry::single(14, "ao"),
        TableEntry::single(15, "ye"),
        TableEntry::single(16, "ae"),
        TableEntry::single(17, "oe"),
        TableEntry::single(18, "eo"),
        TableEntry::single(19, "oi"),
        TableEntry::single(20, "ua"),
        TableEntry::single(21, "au"),
        TableEntry::single(22, "ia"),
        TableEntry::single(23, "ey"),
        TableEntry::single(24, "oo"),
        TableEntry::single(25, "io"),
        TableEntry::single(26, "ea"),
        TableEntry::single(27, "y"),
        TableEntry::single(28, "o"),
        TableEntry::single(29, "a"),
        TableEntry::single(30, "e"),
        TableEntry::single(31, "i"),
        TableEntry::single(32, "u"),
        TableEntry::single(33, "ou"),
        TableEntry::single(34, "ee"),
        TableEntry::single(35, "ai"),
        TableEntry::single(36, "ie"),
        TableEntry::single(37, "ei"),
        TableEntry::single(38, "ue"),
        TableEntry::single(39, "ay"),
        TableEntry::single(40, "ui"),
        TableEntry::single(41, "oa"),
        TableEntry::single(42, "yi"),
        TableEntry::single(43, "ya"),
        TableEntry::single(44, "eu"),
        TableEntry::single(45, "iu"),
        TableEntry::single(46, "yo"),
        TableEntry::single(47, "aa"),
        TableEntry::single(48, "uo"),
        TableEntry::single(49, "uu"),
        TableEntry::single(50, "'"),
    ],
);

static CONSONANTS: RollTable = RollTable::new(
    "Consonants",
    DiceExpr::new(10, Die::Custom(5)),
    &[
        TableEntry::single(10, "tt"),
        TableEntry::single(11, "rr"),
        TableEntry::single(12, "ct"),
        TableEntry::single(13, "pr"),
        TableEntry::single(14, "ns"),
        TableEntry::single(15, "bl"),
        TableEntry::single(16, "sh"),
        TableEntry::single(17, "ld"),
        TableEntry::single(18, "k"),
        TableEntry::single(19, "nd"),
        TableEntry::single(20, "ll"),
        TableEntry::single(21, "nt"),
        TableEntry::single(22, "st"),
        TableEntry::single(23, "f"),
        TableEntry::single(24, "ng"),
        TableEntry::single(25, "w"),
        TableEntry::single(26, "th"),
        TableEntry::single(27, "m"),
        TableEntry::single(28, "n"),
        TableEntry::single(29, "d"),
        TableEntry::single(30, "r"),
        TableEntry::single(31, "s"),
        TableEntry::single(32, "t"),
        TableEntry::single(33, "l"),
        TableEntry::single(34, "c"),
        TableEntry::single(35, "v"),
        TableEntry::single(36, "b"),
        TableEntry::single(37, "p"),
        TableEntry::single(38, "h"),
        TableEntry::single(39, "g"),
        TableEntry::single(40, "wh"),
        TableEntry::single(41, "ch"),
        TableEntry::single(42, "ss"),
        TableEntry::single(43, "rs"),
        TableEntry::single(44, "nc"),
        TableEntry::single(45, "fr"),
        TableEntry::single(46, "rt"),
        TableEntry::single(47, "gr"),
        TableEntry::single(48, "rd"),
        TableEntry::single(49, "sp"),
        TableEntry::single(50, "ck"),
    ],
);

static ARABIC_PLACES: RollList = RollList::new(
    "Arabic places",
    &[
        "Adan", "Andalus", "Asqlan", "Basit", "Baytlahm", "Dahilah", "Dawhah", "Gebal",
        "Giddah", "Hartum", "Hims", "Karbala", "Lacant", "Masqat", "Muruni", "Qina", "Ramlah",
        "Sabtah", "Sana", "Suqutrah", "Tabuk", "Tarifah", "Tisit", "Urdunn", "Yaburah",
    ],
);

static CHINESE_PLACES: RollList = RollList::new(
    "Chinese places",
    &[
        "Andong", "Anshan", "Chaozhou", "Dalian", "Fengjia", "Fuliang", "Gansu", "Guizhou",
        "Hunan", "Jingdezhen", "Jinzhou", "Liaoning", "Lushun", "Ningxia", "Pizhou", "Qingdao",
        "Rehe", "Taiyuan", "Urumqi", "Wugang", "Xiamen", "Xikang", "Xinjiang", "Yingkou",
        "Zigong",
    ],
);

static ENGLISH_PLACES: RollList = RollList::new(
    "English places",
    &[
        "Aldington", "Ashdon", "Bramford", "Carden", "Clifton", "Copford", "Davenham",
        "Doverdale", "Ferring", "Heydon", "Hunston", "Inkberrow", "Isfield", "Latchford",
        "Leighton", "Markshall", "Newton", "Preston", "Rochford", "Selsey", "Stockham",
        "Sutton", "Thetford", "Ulting", "Westhorpe",
    ],
);

static GREEK_PLACES: RollList = RollList::new(
    "Greek places",
    &[
        "Adramyttion", "Alikarnassos", "Dakia", "Dekapoli", "Efesos", "Elefsina", "Epidavros",
        "Evripos", "Gytheio", "Ilios", "Iraia", "Isminos", "Kadmeia", "Katerini", "Kydonia",
        "Leros", "Limnos", "Megara", "Milos", "Orontis", "Petro", "Syros", "Thessalia", "Thiva",
        "Voiotia",
    ],
);

static INDIAN_PLACES: RollList = RollList::new(
    "Indian places",
    &[
        "Ahmedabad", "Alubari", "Ankleshwar", "Bhanuja", "Brahmaghosa", "Candrama",
        "Chandragiri", "Chayanka", "Dayabasti", "Ekanga", "Gollaprolu", "Guwahati",
        "Indraprastha", "Jharonda", "Kalasipalyam", "Kutchuhery", "Mainaguri", "Nandidurg",
        "Panipat", "Pathankot", "Porbandar", "Renigunta", "Shakurbasti", "Sonepat", "Tinpahar",
    ],
);

static JAPANESE_PLACES: RollList = RollList::new(
    "Japanese places",
    &[
        "Bando", "Chikusei", "Hitachi", "Hitachiomiya", "Iida", "Ina", "Ishioka", "Kamisu",
        "Kashima", "Kitaibaraki", "Koga", "Komoro", "Mito", "Moriya", "Naka", "Ogi", "Omachi",
        "Saku", "Shimotsuma", "Suwa", "Takahagi", "Tomi", "Tsuchiura", "Ueda", "Yoshikawa",
    ],
);

static LATIN_PLACES: RollList = RollList::new(
    "Latin places",
    &[
        "Abilia", "Aquileia", "Ascrivium", "Attalia", "Batavorum", "Bobbium", "Burgodunum",
        "Clausentum", "Coriovallum", "Eboracum", "Florentia", "Lentia", "Londinium", "Lugdunum",
        "Novaesium", "Pistoria", "Raurica", "Roma", "Salona", "Sirmium", "Tarraco",
        "Verulamium", "Vetera", "Vindobona", "Viroconium",
    ],
);

static NIGERIAN_PLACES: RollList = RollList::new(
    "Nigerian places",
    &[
        "Abadan", "Agatu", "Akpabuyo", "Askira", "Bama", "Bekwara", "Boki", "Calabar", "Damboa",
        "Etung", "Gubio", "Gwoza", "Ikom", "Kalabalge", "Knoduga", "Kukawa", "Kwayakusar",
        "Mafa", "Nganzai", "Obi", "Obudu", "Ogbadibo", "Okpokwu", "Shani", "Vandeikya",
    ],
);

static RUSSIAN_PLACES: RollList = RollList::new(
    "Russian places",
    &[
        "Amur", "Astrakhan", "Bryansk", "Chita", "Irkutsk", "Kaliningrad", "Kamchatka", "Kirov",
        "Kurgan", "Leningrad", "Magadan", "Murmansk", "Novosibirsk", "Orenburg", "Penza",
        "Pskov", "Ryazan", "Samara", "Smolensk", "Tambov", "Tula", "Tyumen", "Vladimir",
        "Vologda", "Vyborg",
    ],
);

static SPANISH_PLACES: RollList = RollList::new(
    "Spanish places",
    &[
        "Aguascebas", "Barranquete", "Cabezudos", "Cantera", "Delgadas", "Encinetas",
        "Faustino", "Gafarillos", "Higueros", "Humilladero", "Isabela", "Jandilla", "Limones",
        "Lujar", "Matagorda", "Niguelas", "Ortegicar", "Pelado", "Quintera", "Ruescas",
        "Santopitar", "Torres", "Valdecazorla", "Vistahermosa", "Zahora",
    ],
);

/// The place-name list for a culture.
pub fn places(culture: Culture) -> &'static RollList {
    match culture {
        Culture::Arabic => &ARABIC_PLACES,
        Culture::Chinese => &CHINESE_PLACES,
        Culture::English => &ENGLISH_PLACES,
        Culture::Greek => &GREEK_PLACES,
        Culture::Indian => &INDIAN_PLACES,
        Culture::Japanese => &JAPANESE_PLACES,
        Culture::Latin => &LATIN_PLACES,
        Culture::Nigerian => &NIGERIAN_PLACES,
        Culture::Russian => &RUSSIAN_PLACES,
        Culture::Spanish => &SPANISH_PLACES,
    }
}

/// A world name drawn from the culture's place list.
pub fn place_name(culture: Culture, rng: &mut StdRng) -> String {
    places(culture).roll(rng)
}

/// Build a name by alternating vowel and consonant clusters until it is
/// longer than `min_len` characters.
pub fn generate(min_len: usize, rng: &mut StdRng) -> String {
    let mut name = String::new();
    let mut consonant = rng.random_bool(0.5);
    while name.len() <= min_len {
        if consonant {
            let mut cluster = CONSONANTS.roll(rng);
            while name.is_empty() && awkward_start(&cluster) {
                cluster = CONSONANTS.roll(rng);
            }
            name.push_str(&cluster);
        } else {
            name.push_str(&VOWELS.roll(rng));
        }
        consonant = !consonant;
    }
    capitalize(&name)
}

/// A system name of the usual length.
pub fn system_name(rng: &mut StdRng) -> String {
    let len = rng.random_range(3..7);
    generate(len, rng)
}

fn awkward_start(cluster: &str) -> bool {
    let mut chars = cluster.chars();
    match (chars.next(), chars.next()) {
        (Some(lead), Some(next)) => {
            AWKWARD_LEADS.contains(&lead) && !SOFT_FOLLOWERS.contains(&next)
        }
        _ => false,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn syllable_tables_cover_every_total() {
        VOWELS.validate().unwrap();
        CONSONANTS.validate().unwrap();
    }

    #[test]
    fn every_culture_has_places() {
        for culture in Culture::ALL {
            assert!(places(culture).len() >= 20, "{culture} is short on places");
        }
    }

    #[test]
    fn place_name_comes_from_culture() {
        let mut rng = StdRng::seed_from_u64(1);
        for culture in Culture::ALL {
            let name = place_name(culture, &mut rng);
            assert!(places(culture).items.contains(&name.as_str()));
        }
    }

    #[test]
    fn awkward_starts() {
        assert!(awkward_start("ct"));
        assert!(awkward_start("nd"));
        assert!(awkward_start("rr"));
        assert!(!awkward_start("ch"));
        assert!(!awkward_start("th"));
        assert!(!awkward_start("n"));
        assert!(!awkward_start("sh"));
    }

    #[test]
    fn generated_names_are_capitalized_and_long_enough() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..500 {
            let name = generate(4, &mut rng);
            assert!(name.len() > 4, "{name} too short");
            let first = name.chars().next().unwrap();
            assert!(!first.is_lowercase(), "{name} not capitalized");
        }
    }

    #[test]
    fn system_names_vary() {
        let mut rng = StdRng::seed_from_u64(5);
        let names: std::collections::HashSet<_> = (0..50).map(|_| system_name(&mut rng)).collect();
        assert!(names.len() > 40);
    }

    #[test]
    fn capitalize_handles_edges() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("oris"), "Oris");
        assert_eq!(capitalize("'ae"), "'ae");
    }
}
