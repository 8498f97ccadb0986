use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::culture::Culture;
use crate::error::{SkError, SkResult};
use crate::format::{Format, OutputFormat, header};
use crate::poi::Poi;
use crate::world::World;

/// Zero-padded "RR,CC" label for a hex coordinate.
pub fn coord_label(row: u32, col: u32) -> String {
    format!("{row:02},{col:02}")
}

/// A star system occupying one hex of a sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// Hex row.
    pub row: u32,
    /// Hex column.
    pub col: u32,
    /// System name, unique within its sector.
    pub name: String,
    /// Culture of the primary world.
    pub culture: Culture,
    /// Worlds in the system; the first is the primary world.
    pub worlds: Vec<World>,
    /// Points of interest in the system.
    #[serde(default)]
    pub pois: Vec<Poi>,
}

impl Star {
    /// The primary world, if the system has any worlds at all.
    pub fn primary_world(&self) -> Option<&World> {
        self.worlds.first()
    }

    /// Every world after the primary one.
    pub fn secondary_worlds(&self) -> &[World] {
        self.worlds.get(1..).unwrap_or_default()
    }

    /// This system's "RR,CC" hex label.
    pub fn coord_label(&self) -> String {
        coord_label(self.row, self.col)
    }
}

impl Format for Star {
    fn format(&self, fmt: OutputFormat) -> String {
        let mut out = header(fmt, 2, &format!("{} [{}]", self.name, self.coord_label()));

        if let Some(primary) = self.primary_world() {
            out.push_str(&header(fmt, 3, "Primary World"));
            out.push_str(&primary.format(fmt));
            out.push('\n');
        }

        if !self.secondary_worlds().is_empty() {
            out.push_str(&header(fmt, 3, "Other Worlds"));
            for world in self.secondary_worlds() {
                out.push_str(&world.format(fmt));
                out.push('\n');
            }
        }

        if !self.pois.is_empty() {
            out.push_str(&header(fmt, 3, "Points of Interest"));
            for poi in &self.pois {
                out.push_str(&poi.format(fmt));
                out.push('\n');
            }
        }

        out
    }
}

/// A generated sector: a bounded hex grid and the star systems on it.
///
/// A sector is never edited after generation. Rerolling builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    rows: u32,
    cols: u32,
    systems: Vec<Star>,
}

impl Sector {
    /// Smallest supported grid dimension.
    pub const MIN_DIMENSION: u32 = 2;
    /// Largest supported grid dimension.
    pub const MAX_DIMENSION: u32 = 99;

    pub(crate) fn empty(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            systems: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, star: Star) {
        self.systems.push(star);
    }

    /// Build a sector from existing systems, checking every sector invariant.
    pub fn from_systems(rows: u32, cols: u32, systems: Vec<Star>) -> SkResult<Self> {
        let sector = Self {
            rows,
            cols,
            systems,
        };
        sector.validate()?;
        Ok(sector)
    }

    /// Grid height.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Grid width.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Systems in generation order.
    pub fn systems(&self) -> &[Star] {
        &self.systems
    }

    /// Number of systems.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true if the sector has no systems.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Whether a system already sits at (`row`, `col`).
    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.systems.iter().any(|s| s.row == row && s.col == col)
    }

    /// Whether a system already uses `name`.
    pub fn name_in_use(&self, name: &str) -> bool {
        self.systems.iter().any(|s| s.name == name)
    }

    /// The system at (`row`, `col`), if any.
    pub fn system_at(&self, row: u32, col: u32) -> Option<&Star> {
        self.systems.iter().find(|s| s.row == row && s.col == col)
    }

    /// Find a system by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Star> {
        self.systems
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Systems sorted by row, then column.
    pub fn by_coords(&self) -> Vec<&Star> {
        let mut sorted: Vec<&Star> = self.systems.iter().collect();
        sorted.sort_by_key(|s| (s.row, s.col));
        sorted
    }

    /// Check dimensions, coordinate bounds, uniqueness, and that every system has a world.
    pub fn validate(&self) -> SkResult<()> {
        for (axis, value) in [("rows", self.rows), ("cols", self.cols)] {
            if !(Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&value) {
                return Err(SkError::InvalidDimension {
                    axis,
                    value,
                    min: Self::MIN_DIMENSION,
                    max: Self::MAX_DIMENSION,
                });
            }
        }

        let mut coords = HashSet::new();
        let mut names = HashSet::new();
        for star in &self.systems {
            if star.row >= self.rows || star.col >= self.cols {
                return Err(SkError::InvalidSector(format!(
                    "system \"{}\" at {} lies outside the {}x{} grid",
                    star.name,
                    star.coord_label(),
                    self.rows,
                    self.cols
                )));
            }
            if !coords.insert((star.row, star.col)) {
                return Err(SkError::InvalidSector(format!(
                    "more than one system at {}",
                    star.coord_label()
                )));
            }
            if !names.insert(star.name.as_str()) {
                return Err(SkError::InvalidSector(format!(
                    "system name \"{}\" is used twice",
                    star.name
                )));
            }
            if star.worlds.is_empty() {
                return Err(SkError::InvalidSector(format!(
                    "system \"{}\" has no primary world",
                    star.name
                )));
            }
        }

        Ok(())
    }
}

/// A named sector as saved to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorDocument {
    /// Sector name, e.g. "Oroyu Sector".
    pub name: String,
    /// RNG seed the sector was generated from, when known.
    #[serde(default)]
    pub seed: Option<u64>,
    /// When the sector was generated.
    pub generated_at: DateTime<Utc>,
    /// The sector itself.
    pub sector: Sector,
}

impl SectorDocument {
    /// Wrap a freshly generated sector.
    pub fn new(name: impl Into<String>, seed: Option<u64>, sector: Sector) -> Self {
        Self {
            name: name.into(),
            seed,
            generated_at: Utc::now(),
            sector,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> SkResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a saved document and check the sector invariants.
    pub fn from_json(json: &str) -> SkResult<Self> {
        let doc: Self = serde_json::from_str(json)?;
        doc.sector.validate()?;
        Ok(doc)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::poi::Poi;
    use crate::world::tests::world;

    pub(crate) fn star(row: u32, col: u32, name: &str) -> Star {
        Star {
            row,
            col,
            name: name.to_string(),
            culture: Culture::Latin,
            worlds: vec![world(name, "TL4, modern postech", true)],
            pois: vec![],
        }
    }

    #[test]
    fn coord_labels_are_zero_padded() {
        assert_eq!(coord_label(0, 0), "00,00");
        assert_eq!(coord_label(3, 12), "03,12");
        assert_eq!(coord_label(98, 7), "98,07");
    }

    #[test]
    fn lookups() {
        let sector =
            Sector::from_systems(4, 4, vec![star(2, 1, "Sheol"), star(0, 3, "Tophet")]).unwrap();
        assert!(sector.is_occupied(2, 1));
        assert!(!sector.is_occupied(1, 2));
        assert!(sector.name_in_use("Sheol"));
        assert_eq!(sector.system_at(0, 3).map(|s| s.name.as_str()), Some("Tophet"));
        assert_eq!(sector.find_by_name("sheol").map(|s| s.row), Some(2));
        assert_eq!(sector.len(), 2);
    }

    #[test]
    fn by_coords_sorts_row_major() {
        let sector = Sector::from_systems(
            5,
            5,
            vec![star(3, 0, "C"), star(0, 4, "B"), star(0, 1, "A")],
        )
        .unwrap();
        let names: Vec<_> = sector.by_coords().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        let err = Sector::from_systems(1, 5, vec![]).unwrap_err();
        assert!(matches!(
            err,
            SkError::InvalidDimension {
                axis: "rows",
                value: 1,
                ..
            }
        ));
        assert!(Sector::from_systems(5, 100, vec![]).is_err());
    }

    #[test]
    fn validate_rejects_broken_invariants() {
        let outside = Sector::from_systems(2, 2, vec![star(2, 0, "A")]);
        assert!(matches!(outside, Err(SkError::InvalidSector(_))));

        let shared_hex = Sector::from_systems(3, 3, vec![star(1, 1, "A"), star(1, 1, "B")]);
        assert!(matches!(shared_hex, Err(SkError::InvalidSector(m)) if m.contains("01,01")));

        let shared_name = Sector::from_systems(3, 3, vec![star(0, 0, "A"), star(1, 1, "A")]);
        assert!(matches!(shared_name, Err(SkError::InvalidSector(m)) if m.contains("\"A\"")));

        let mut empty = star(0, 0, "A");
        empty.worlds.clear();
        assert!(Sector::from_systems(3, 3, vec![empty]).is_err());
    }

    #[test]
    fn star_write_up_sections() {
        let mut s = star(1, 2, "Sheol");
        s.worlds.push(world("Tophet", "TL1, medieval technology", false));
        s.pois.push(Poi {
            point: "Gas giant mine".into(),
            occupied_by: "Scrappers".into(),
            situation: "Workers in revolt".into(),
        });

        let md = s.format(OutputFormat::Markdown);
        assert!(md.starts_with("## Sheol [01,02]\n\n### Primary World\n\n"));
        assert!(md.contains("### Other Worlds\n\n| Tophet | |"));
        assert!(md.contains("### Points of Interest\n\n| Gas giant mine | |"));

        let text = s.format(OutputFormat::Text);
        assert!(text.starts_with("Sheol [01,02]\nPrimary World\nSheol\n"));
    }

    #[test]
    fn document_round_trips_through_json() {
        let mut s = star(1, 2, "Sheol");
        s.worlds.push(world("Tophet", "TL1", false));
        let sector = Sector::from_systems(3, 4, vec![s, star(0, 0, "Gehenna")]).unwrap();
        let doc = SectorDocument::new("Test Sector", Some(42), sector);

        let json = doc.to_json().unwrap();
        let back = SectorDocument::from_json(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn from_json_rejects_invalid_sectors() {
        let sector = Sector {
            rows: 2,
            cols: 2,
            systems: vec![star(0, 0, "A"), star(0, 0, "B")],
        };
        let doc = SectorDocument::new("Broken Sector", None, sector);
        let json = serde_json::to_string(&doc).unwrap();
        assert!(matches!(
            SectorDocument::from_json(&json),
            Err(SkError::InvalidSector(_))
        ));
        assert!(matches!(
            SectorDocument::from_json("{not json"),
            Err(SkError::Json(_))
        ));
    }
}
