use serde::{Deserialize, Serialize};

use crate::culture::Culture;
use crate::format::{Format, OutputFormat, table};

/// A world tag: a named hook with adventure seeds attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldTag {
    /// Tag name, e.g. "Zombies".
    pub name: String,
    /// What the tag means for the world.
    pub description: String,
    /// Example enemies.
    pub enemies: Vec<String>,
    /// Example friends.
    pub friends: Vec<String>,
    /// Example complications.
    pub complications: Vec<String>,
    /// Example things worth finding.
    pub things: Vec<String>,
    /// Example places.
    pub places: Vec<String>,
}

impl Format for WorldTag {
    fn format(&self, fmt: OutputFormat) -> String {
        let enemies = self.enemies.join(", ");
        let friends = self.friends.join(", ");
        let complications = self.complications.join(", ");
        let things = self.things.join(", ");
        let places = self.places.join(", ");

        table(
            fmt,
            Some(self.name.as_str()),
            &[
                ("Description", self.description.as_str()),
                ("Enemies", enemies.as_str()),
                ("Friends", friends.as_str()),
                ("Complications", complications.as_str()),
                ("Things", things.as_str()),
                ("Places", places.as_str()),
            ],
        )
    }
}

/// A generated world inside a star system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// Whether this is the system's primary world.
    pub primary: bool,
    /// Whether write-ups include full tag descriptions instead of names only.
    pub full_tags: bool,
    /// World name.
    pub name: String,
    /// Cultural background of the population.
    pub culture: Culture,
    /// The world's two distinct tags.
    pub tags: [WorldTag; 2],
    /// Atmosphere description.
    pub atmosphere: String,
    /// Temperature description.
    pub temperature: String,
    /// Biosphere description.
    pub biosphere: String,
    /// Population description.
    pub population: String,
    /// Tech level, e.g. "TL4, modern postech".
    pub tech_level: String,
    /// How a secondary world came to be settled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// A secondary world's relationship with the primary world.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    /// What keeps a secondary world in touch with the primary world.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl World {
    /// The tech level code without its qualifier: "TL4, modern postech" gives "TL4".
    pub fn tech_level_code(&self) -> &str {
        self.tech_level.split(',').next().unwrap_or_default().trim()
    }

    /// Names of both tags.
    pub fn tag_names(&self) -> [&str; 2] {
        [self.tags[0].name.as_str(), self.tags[1].name.as_str()]
    }
}

impl Format for World {
    fn format(&self, fmt: OutputFormat) -> String {
        let tag_list = self.tag_names().join(", ");
        let culture = self.culture.to_string();

        let mut rows: Vec<(&str, &str)> = vec![
            ("Atmosphere", self.atmosphere.as_str()),
            ("Temperature", self.temperature.as_str()),
            ("Biosphere", self.biosphere.as_str()),
            ("Population", self.population.as_str()),
            ("Culture", culture.as_str()),
            ("Tech Level", self.tech_level.as_str()),
        ];

        if self.full_tags {
            rows.push(("Tags", ""));
            for tag in &self.tags {
                rows.push((tag.name.as_str(), tag.description.as_str()));
            }
        } else {
            rows.push(("Tags", tag_list.as_str()));
        }

        if !self.primary {
            rows.push(("Origins", ""));
            for (key, value) in [
                ("Origin of the World", &self.origin),
                ("Current Relationship", &self.relationship),
                ("Contact Point", &self.contact),
            ] {
                if let Some(value) = value {
                    rows.push((key, value.as_str()));
                }
            }
        }

        table(fmt, Some(self.name.as_str()), &rows)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn tag(name: &str) -> WorldTag {
        WorldTag {
            name: name.to_string(),
            description: format!("{name} description"),
            enemies: vec!["Rival".into()],
            friends: vec!["Ally".into()],
            complications: vec![],
            things: vec![],
            places: vec![],
        }
    }

    pub(crate) fn world(name: &str, tech_level: &str, primary: bool) -> World {
        World {
            primary,
            full_tags: false,
            name: name.to_string(),
            culture: Culture::Latin,
            tags: [tag("Zombies"), tag("Radioactive World")],
            atmosphere: "Breathable mix".into(),
            temperature: "Temperate".into(),
            biosphere: "Human-miscible biosphere".into(),
            population: "Several million inhabitants".into(),
            tech_level: tech_level.to_string(),
            origin: (!primary).then(|| "Refuge for exiles".to_string()),
            relationship: (!primary).then(|| "Old grudges".to_string()),
            contact: (!primary).then(|| "Shared religion".to_string()),
        }
    }

    #[test]
    fn tech_level_code_strips_qualifier() {
        assert_eq!(world("A", "TL4, modern postech", true).tech_level_code(), "TL4");
        assert_eq!(
            world("A", "TL4+, postech with specialties", true).tech_level_code(),
            "TL4+"
        );
        assert_eq!(world("A", "TL3", true).tech_level_code(), "TL3");
        assert_eq!(world("A", "", true).tech_level_code(), "");
    }

    #[test]
    fn primary_write_up_lists_tag_names() {
        let text = world("Sheol", "TL2, early industrial", true).format(OutputFormat::Text);
        assert!(text.starts_with("Sheol\n"));
        assert!(text.contains("Tags        : Zombies, Radioactive World\n"));
        assert!(!text.contains("Origins"));
    }

    #[test]
    fn full_tags_include_descriptions() {
        let mut w = world("Sheol", "TL2", true);
        w.full_tags = true;
        let text = w.format(OutputFormat::Text);
        assert!(text.contains("Zombies description"));
        assert!(text.contains("Radioactive World description"));
    }

    #[test]
    fn secondary_write_up_includes_origins() {
        let md = world("Tophet", "TL1", false).format(OutputFormat::Markdown);
        assert!(md.starts_with("| Tophet | |\n| --- | --- |\n"));
        assert!(md.contains("| Origin of the World | Refuge for exiles |"));
        assert!(md.contains("| Contact Point | Shared religion |"));
    }

    #[test]
    fn tag_write_up() {
        let text = tag("Zombies").format(OutputFormat::Text);
        assert!(text.starts_with("Zombies\nDescription   : Zombies description\n"));
        assert!(text.contains("Enemies       : Rival\n"));
    }
}
