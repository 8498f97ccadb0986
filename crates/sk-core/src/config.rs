use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{SkError, SkResult};
use crate::sector::Sector;

/// How crowded a sector is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Density {
    /// Few systems.
    Sparse,
    /// The usual spread.
    #[default]
    Average,
    /// Many systems.
    Dense,
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sparse => write!(f, "sparse"),
            Self::Average => write!(f, "average"),
            Self::Dense => write!(f, "dense"),
        }
    }
}

impl FromStr for Density {
    type Err = SkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sparse" => Ok(Self::Sparse),
            "average" => Ok(Self::Average),
            "dense" => Ok(Self::Dense),
            other => Err(SkError::UnknownDensity(other.to_string())),
        }
    }
}

/// Share of a sector's cells to fill, in percent (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRange {
    /// Lowest fill percentage.
    pub min: u32,
    /// Highest fill percentage.
    pub max: u32,
}

impl FillRange {
    /// Build a range from two percentages.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Fill ranges for each density tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityPolicy {
    /// Range used for [`Density::Sparse`].
    pub sparse: FillRange,
    /// Range used for [`Density::Average`].
    pub average: FillRange,
    /// Range used for [`Density::Dense`].
    pub dense: FillRange,
}

impl Default for DensityPolicy {
    fn default() -> Self {
        Self {
            sparse: FillRange::new(10, 25),
            average: FillRange::new(25, 50),
            dense: FillRange::new(50, 75),
        }
    }
}

impl DensityPolicy {
    /// The fill range for a tier.
    pub fn range(&self, density: Density) -> FillRange {
        match density {
            Density::Sparse => self.sparse,
            Density::Average => self.average,
            Density::Dense => self.dense,
        }
    }

    /// Replace the fill range for one tier.
    pub fn with_range(mut self, density: Density, range: FillRange) -> Self {
        match density {
            Density::Sparse => self.sparse = range,
            Density::Average => self.average = range,
            Density::Dense => self.dense = range,
        }
        self
    }

    /// Smallest and largest system count a tier can produce for `cells` hexes.
    pub fn count_bounds(&self, cells: u32, density: Density) -> (u32, u32) {
        let range = self.range(density);
        let low = cells * range.min / 100;
        let high = (cells * range.max / 100).max(low);
        (low.clamp(1, cells), high.clamp(1, cells))
    }

    /// Draw how many systems to place on a grid of `cells` hexes.
    ///
    /// The count starts at the tier's lower bound and adds a uniform jitter
    /// up to the upper bound, so repeated runs at the same settings differ.
    pub fn target_count(&self, cells: u32, density: Density, rng: &mut StdRng) -> u32 {
        let (low, high) = self.count_bounds(cells, density);
        rng.random_range(low..=high)
    }

    /// Check every tier's range.
    pub fn validate(&self) -> SkResult<()> {
        for density in [Density::Sparse, Density::Average, Density::Dense] {
            let range = self.range(density);
            if range.min > range.max {
                return Err(SkError::InvalidDensity(format!(
                    "{density} minimum {}% is above its maximum {}%",
                    range.min, range.max
                )));
            }
            if range.max > 100 {
                return Err(SkError::InvalidDensity(format!(
                    "{density} maximum {}% is above 100%",
                    range.max
                )));
            }
        }
        Ok(())
    }
}

/// Parameters for one sector generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Grid height.
    pub rows: u32,
    /// Grid width.
    pub cols: u32,
    /// Density tier.
    pub density: Density,
    /// Fill ranges per tier.
    pub density_policy: DensityPolicy,
    /// Percent chance that a system gets a point of interest.
    pub poi_chance: u32,
    /// Percent chance, rolled repeatedly, of one more secondary world.
    pub other_world_chance: u32,
    /// Upper bound on secondary worlds per system.
    pub max_secondary_worlds: u32,
    /// World tags that must never be picked.
    pub exclude_tags: Vec<String>,
    /// Whether write-ups include full tag descriptions.
    pub full_tags: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 10,
            density: Density::Average,
            density_policy: DensityPolicy::default(),
            poi_chance: 30,
            other_world_chance: 10,
            max_secondary_worlds: 8,
            exclude_tags: Vec::new(),
            full_tags: false,
        }
    }
}

impl GeneratorConfig {
    /// Set the grid size.
    pub fn with_size(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the density tier.
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Set the fill ranges.
    pub fn with_density_policy(mut self, policy: DensityPolicy) -> Self {
        self.density_policy = policy;
        self
    }

    /// Set the point-of-interest chance.
    pub fn with_poi_chance(mut self, chance: u32) -> Self {
        self.poi_chance = chance;
        self
    }

    /// Set the secondary-world chance.
    pub fn with_other_world_chance(mut self, chance: u32) -> Self {
        self.other_world_chance = chance;
        self
    }

    /// Set the cap on secondary worlds per system.
    pub fn with_max_secondary_worlds(mut self, max: u32) -> Self {
        self.max_secondary_worlds = max;
        self
    }

    /// Set the excluded world tags.
    pub fn with_exclude_tags(mut self, tags: Vec<String>) -> Self {
        self.exclude_tags = tags;
        self
    }

    /// Toggle full tag descriptions.
    pub fn with_full_tags(mut self, full: bool) -> Self {
        self.full_tags = full;
        self
    }

    /// Number of hexes on the grid.
    pub fn cells(&self) -> u32 {
        self.rows * self.cols
    }

    /// Reject parameters the generator cannot honour.
    pub fn validate(&self) -> SkResult<()> {
        for (axis, value) in [("rows", self.rows), ("cols", self.cols)] {
            if !(Sector::MIN_DIMENSION..=Sector::MAX_DIMENSION).contains(&value) {
                return Err(SkError::InvalidDimension {
                    axis,
                    value,
                    min: Sector::MIN_DIMENSION,
                    max: Sector::MAX_DIMENSION,
                });
            }
        }
        for (name, value) in [
            ("poi chance", self.poi_chance),
            ("other worlds chance", self.other_world_chance),
        ] {
            if value > 100 {
                return Err(SkError::InvalidChance { name, value });
            }
        }
        if self.other_world_chance > 0 && self.max_secondary_worlds == 0 {
            return Err(SkError::NoRoomForOtherWorlds {
                chance: self.other_world_chance,
            });
        }
        self.density_policy.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn default_config() {
        let cfg = GeneratorConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (8, 10));
        assert_eq!(cfg.density, Density::Average);
        assert_eq!(cfg.poi_chance, 30);
        assert_eq!(cfg.other_world_chance, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = GeneratorConfig::default()
            .with_size(4, 6)
            .with_density(Density::Dense)
            .with_poi_chance(0)
            .with_other_world_chance(100)
            .with_max_secondary_worlds(2)
            .with_exclude_tags(vec!["Zombies".into()])
            .with_full_tags(true);
        assert_eq!(cfg.cells(), 24);
        assert_eq!(cfg.density, Density::Dense);
        assert_eq!(cfg.max_secondary_worlds, 2);
        assert_eq!(cfg.exclude_tags, ["Zombies"]);
        assert!(cfg.full_tags);
    }

    #[test]
    fn validate_dimensions() {
        for (rows, cols) in [(1, 5), (5, 1), (100, 5), (5, 100), (0, 0)] {
            let cfg = GeneratorConfig::default().with_size(rows, cols);
            assert!(
                matches!(cfg.validate(), Err(SkError::InvalidDimension { .. })),
                "{rows}x{cols} should be rejected"
            );
        }
        assert!(GeneratorConfig::default().with_size(2, 2).validate().is_ok());
        assert!(GeneratorConfig::default().with_size(99, 99).validate().is_ok());
    }

    #[test]
    fn validate_chances() {
        let cfg = GeneratorConfig::default().with_poi_chance(101);
        assert!(matches!(
            cfg.validate(),
            Err(SkError::InvalidChance {
                name: "poi chance",
                value: 101
            })
        ));
        let cfg = GeneratorConfig::default().with_other_world_chance(100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_world_cap_needs_zero_chance() {
        let capped = GeneratorConfig::default()
            .with_other_world_chance(100)
            .with_max_secondary_worlds(0);
        assert!(matches!(
            capped.validate(),
            Err(SkError::NoRoomForOtherWorlds { chance: 100 })
        ));
        let off = capped.with_other_world_chance(0);
        assert!(off.validate().is_ok());
    }

    #[test]
    fn validate_density_policy() {
        let inverted = DensityPolicy::default().with_range(Density::Dense, FillRange::new(80, 60));
        assert!(matches!(inverted.validate(), Err(SkError::InvalidDensity(_))));
        let overfull = DensityPolicy::default().with_range(Density::Sparse, FillRange::new(10, 120));
        assert!(matches!(overfull.validate(), Err(SkError::InvalidDensity(_))));
    }

    #[test]
    fn parse_density() {
        assert_eq!("Sparse".parse::<Density>().unwrap(), Density::Sparse);
        assert_eq!("dense".parse::<Density>().unwrap(), Density::Dense);
        assert!(matches!(
            "crowded".parse::<Density>(),
            Err(SkError::UnknownDensity(d)) if d == "crowded"
        ));
    }

    #[test]
    fn average_four_by_four_bounds() {
        let policy = DensityPolicy::default();
        assert_eq!(policy.count_bounds(16, Density::Average), (4, 8));
    }

    #[test]
    fn tiny_grids_always_get_a_system() {
        let policy = DensityPolicy::default();
        assert_eq!(policy.count_bounds(4, Density::Sparse), (1, 1));
        let empty = policy.with_range(Density::Sparse, FillRange::new(0, 0));
        assert_eq!(empty.count_bounds(4, Density::Sparse), (1, 1));
        let full = policy.with_range(Density::Dense, FillRange::new(100, 100));
        assert_eq!(full.count_bounds(9, Density::Dense), (9, 9));
    }

    #[test]
    fn target_count_jitters_within_bounds() {
        let policy = DensityPolicy::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let n = policy.target_count(80, Density::Average, &mut rng);
            assert!((20..=40).contains(&n));
            seen.insert(n);
        }
        assert!(seen.len() > 1, "count should vary between runs");
    }
}
