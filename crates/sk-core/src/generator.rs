use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::GeneratorConfig;
use crate::culture::Culture;
use crate::poi::Poi;
use crate::sector::{Sector, Star};
use crate::world::World;

/// Supplies names and flavour for generated systems.
///
/// The generator only decides *where* systems go and *how many* worlds and
/// points of interest each gets; everything descriptive comes from here.
pub trait ContentSource {
    /// Draw a candidate system name. Collisions are handled by the caller.
    fn system_name(&mut self, rng: &mut StdRng) -> String;

    /// Build a system's primary world.
    fn primary_world(
        &mut self,
        rng: &mut StdRng,
        culture: Culture,
        exclude_tags: &[String],
        full_tags: bool,
    ) -> World;

    /// Build one secondary world.
    fn secondary_world(
        &mut self,
        rng: &mut StdRng,
        culture: Culture,
        exclude_tags: &[String],
        full_tags: bool,
    ) -> World;

    /// Build a point of interest.
    fn poi(&mut self, rng: &mut StdRng) -> Poi;
}

/// Populate a `rows` x `cols` grid with star systems.
///
/// Expects a config that has passed [`GeneratorConfig::validate`].
pub fn generate_sector<C: ContentSource + ?Sized>(
    config: &GeneratorConfig,
    content: &mut C,
    rng: &mut StdRng,
) -> Sector {
    let cells = config.cells();
    let target = config
        .density_policy
        .target_count(cells, config.density, rng) as usize;
    info!(
        "generating {}x{} sector ({}, {target} systems)",
        config.rows, config.cols, config.density
    );

    let mut sector = Sector::empty(config.rows, config.cols);
    while sector.len() < target {
        let row = rng.random_range(0..config.rows);
        let col = rng.random_range(0..config.cols);
        if sector.is_occupied(row, col) {
            continue;
        }

        let name = unique_name(&sector, content, rng);
        let star = build_star(config, content, rng, row, col, name);
        debug!(
            "placed {} at {} with {} world(s), {} poi(s)",
            star.name,
            star.coord_label(),
            star.worlds.len(),
            star.pois.len()
        );
        sector.push(star);
    }
    sector
}

fn unique_name<C: ContentSource + ?Sized>(
    sector: &Sector,
    content: &mut C,
    rng: &mut StdRng,
) -> String {
    loop {
        let name = content.system_name(rng);
        if !sector.name_in_use(&name) {
            return name;
        }
        debug!("system name {name} already taken, redrawing");
    }
}

fn build_star<C: ContentSource + ?Sized>(
    config: &GeneratorConfig,
    content: &mut C,
    rng: &mut StdRng,
    row: u32,
    col: u32,
    name: String,
) -> Star {
    let culture = Culture::random(rng);
    let mut worlds = vec![content.primary_world(
        rng,
        culture,
        &config.exclude_tags,
        config.full_tags,
    )];

    let mut extra = 0;
    while extra < config.max_secondary_worlds
        && rng.random_range(0..100) < config.other_world_chance
    {
        let culture = Culture::random(rng);
        worlds.push(content.secondary_world(
            rng,
            culture,
            &config.exclude_tags,
            config.full_tags,
        ));
        extra += 1;
    }

    let mut pois = Vec::new();
    if rng.random_range(0..100) < config.poi_chance {
        pois.push(content.poi(rng));
    }

    Star {
        row,
        col,
        name,
        culture,
        worlds,
        pois,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::config::{Density, DensityPolicy, FillRange};
    use crate::world::tests::world;

    /// Hands out names from a tiny pool so collisions actually happen.
    struct StubContent {
        names: Vec<&'static str>,
        primaries: usize,
        secondaries: usize,
        excluded_seen: Vec<String>,
    }

    impl StubContent {
        fn new() -> Self {
            Self {
                names: vec!["Acre", "Bel", "Cato", "Dusk", "Eos"],
                primaries: 0,
                secondaries: 0,
                excluded_seen: Vec::new(),
            }
        }
    }

    impl ContentSource for StubContent {
        fn system_name(&mut self, rng: &mut StdRng) -> String {
            let base = self.names[rng.random_range(0..self.names.len())];
            // Mostly collide, occasionally widen the pool.
            if rng.random_range(0..4) == 0 {
                format!("{base}-{}", rng.random_range(0..100_000))
            } else {
                base.to_string()
            }
        }

        fn primary_world(
            &mut self,
            _rng: &mut StdRng,
            culture: Culture,
            exclude_tags: &[String],
            full_tags: bool,
        ) -> World {
            self.primaries += 1;
            self.excluded_seen = exclude_tags.to_vec();
            let mut w = world("Prime", "TL4, modern postech", true);
            w.culture = culture;
            w.full_tags = full_tags;
            w
        }

        fn secondary_world(
            &mut self,
            _rng: &mut StdRng,
            culture: Culture,
            _exclude_tags: &[String],
            full_tags: bool,
        ) -> World {
            self.secondaries += 1;
            let mut w = world("Second", "TL2, early Industrial Age tech", false);
            w.culture = culture;
            w.full_tags = full_tags;
            w
        }

        fn poi(&mut self, _rng: &mut StdRng) -> Poi {
            Poi {
                point: "Asteroid base".into(),
                occupied_by: "Miners".into(),
                situation: "Life support failing".into(),
            }
        }
    }

    fn generate(config: &GeneratorConfig, seed: u64) -> (Sector, StubContent) {
        let mut content = StubContent::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let sector = generate_sector(config, &mut content, &mut rng);
        (sector, content)
    }

    fn assert_invariants(sector: &Sector) {
        let mut coords = HashSet::new();
        let mut names = HashSet::new();
        for star in sector.systems() {
            assert!(star.row < sector.rows() && star.col < sector.cols());
            assert!(coords.insert((star.row, star.col)), "duplicate hex");
            assert!(names.insert(star.name.clone()), "duplicate name");
            assert!(!star.worlds.is_empty());
            assert!(star.worlds[0].primary);
            assert!(star.worlds[1..].iter().all(|w| !w.primary));
        }
        assert!(sector.validate().is_ok());
    }

    #[test]
    fn four_by_four_average_count() {
        let config = GeneratorConfig::default().with_size(4, 4);
        for seed in 0..50 {
            let (sector, _) = generate(&config, seed);
            assert!((4..=8).contains(&sector.len()), "got {}", sector.len());
            assert_invariants(&sector);
        }
    }

    #[test]
    fn no_secondary_worlds_at_zero_chance() {
        let config = GeneratorConfig::default().with_other_world_chance(0);
        let (sector, content) = generate(&config, 3);
        assert!(sector.systems().iter().all(|s| s.worlds.len() == 1));
        assert_eq!(content.secondaries, 0);
        assert_eq!(content.primaries, sector.len());
    }

    #[test]
    fn full_chance_cascade_is_capped() {
        let config = GeneratorConfig::default()
            .with_other_world_chance(100)
            .with_max_secondary_worlds(3);
        let (sector, _) = generate(&config, 5);
        assert!(sector.systems().iter().all(|s| s.worlds.len() == 4));
    }

    #[test]
    fn poi_chance_extremes() {
        let never = GeneratorConfig::default().with_poi_chance(0);
        let (sector, _) = generate(&never, 1);
        assert!(sector.systems().iter().all(|s| s.pois.is_empty()));

        let always = GeneratorConfig::default().with_poi_chance(100);
        let (sector, _) = generate(&always, 1);
        assert!(sector.systems().iter().all(|s| s.pois.len() == 1));
    }

    #[test]
    fn star_culture_matches_primary_world() {
        let (sector, _) = generate(&GeneratorConfig::default(), 11);
        for star in sector.systems() {
            assert_eq!(star.primary_world().map(|w| w.culture), Some(star.culture));
        }
    }

    #[test]
    fn exclusions_and_full_tags_pass_through() {
        let config = GeneratorConfig::default()
            .with_exclude_tags(vec!["Zombies".into()])
            .with_full_tags(true);
        let (sector, content) = generate(&config, 2);
        assert_eq!(content.excluded_seen, ["Zombies"]);
        assert!(sector.systems().iter().all(|s| s.worlds[0].full_tags));
    }

    #[test]
    fn same_seed_same_sector() {
        let config = GeneratorConfig::default();
        let (a, _) = generate(&config, 42);
        let (b, _) = generate(&config, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn smallest_grid_is_never_empty() {
        let config = GeneratorConfig::default()
            .with_size(2, 2)
            .with_density(Density::Sparse);
        for seed in 0..20 {
            let (sector, _) = generate(&config, seed);
            assert!(!sector.is_empty());
            assert_invariants(&sector);
        }
    }

    #[test]
    fn fully_packed_grid_completes() {
        let policy = DensityPolicy::default().with_range(Density::Dense, FillRange::new(100, 100));
        let config = GeneratorConfig::default()
            .with_size(3, 3)
            .with_density(Density::Dense)
            .with_density_policy(policy);
        let (sector, _) = generate(&config, 9);
        assert_eq!(sector.len(), 9);
        assert_invariants(&sector);
    }

    #[test]
    fn largest_grid_completes() {
        let config = GeneratorConfig::default()
            .with_size(99, 99)
            .with_density(Density::Average);
        let (sector, _) = generate(&config, 7);
        assert!(sector.len() >= 99 * 99 / 4);
        assert_invariants(&sector);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn generated_sectors_hold_invariants(
            rows in 2u32..=12,
            cols in 2u32..=12,
            density in prop_oneof![
                Just(Density::Sparse),
                Just(Density::Average),
                Just(Density::Dense)
            ],
            other in 0u32..=100,
            seed in any::<u64>(),
        ) {
            let config = GeneratorConfig::default()
                .with_size(rows, cols)
                .with_density(density)
                .with_other_world_chance(other);
            let (sector, _) = generate(&config, seed);
            let (low, high) = config.density_policy.count_bounds(config.cells(), density);
            prop_assert!((low as usize..=high as usize).contains(&sector.len()));
            assert_invariants(&sector);
        }
    }
}
