//! The stamped hex lattice and the sector overlay.

use std::collections::BTreeMap;
use std::fmt;

use colored::Color;
use log::debug;
use sk_core::{Sector, coord_label};

use crate::canvas::Canvas;
use crate::palette::tech_level_color;
use crate::template::HexCellTemplate;

/// A lattice of empty hexes, each labelled with its coordinates.
///
/// Label positions are recorded as cells are stamped, so text can be placed
/// under a hex without searching the canvas.
#[derive(Debug, Clone)]
pub struct HexMap {
    template: HexCellTemplate,
    canvas: Canvas,
    labels: BTreeMap<(u32, u32), (usize, usize)>,
}

impl HexMap {
    /// Stamp a `rows` x `cols` lattice with the standard hexagon.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::with_template(HexCellTemplate::STANDARD, rows, cols)
    }

    /// Stamp a `rows` x `cols` lattice with a custom hexagon.
    pub fn with_template(template: HexCellTemplate, rows: u32, cols: u32) -> Self {
        let (height, width) = template.canvas_size(rows as usize, cols as usize);
        let mut canvas = Canvas::blank(height, width);
        let mut labels = BTreeMap::new();

        for row in 0..rows {
            for col in 0..cols {
                let origin = template.cell_origin(row as usize, col as usize);
                let at = canvas.stamp(&template, origin, &coord_label(row, col));
                labels.insert((row, col), at);
            }
        }

        Self {
            template,
            canvas,
            labels,
        }
    }

    /// Canvas position of the label for (`row`, `col`).
    pub fn label_position(&self, row: u32, col: u32) -> Option<(usize, usize)> {
        self.labels.get(&(row, col)).copied()
    }

    /// The underlying canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Write up to `lines` centred below the label of (`row`, `col`).
    ///
    /// Empty lines leave the canvas untouched. Returns `false` if the
    /// coordinates are outside the lattice.
    pub fn set_text(&mut self, row: u32, col: u32, lines: &[&str], color: Option<Color>) -> bool {
        let Some((label_row, label_col)) = self.label_position(row, col) else {
            return false;
        };
        let center = label_col - self.template.label_col + self.template.width_middle / 2;

        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let start = center.saturating_sub(line.chars().count() / 2);
            self.canvas.write_text(label_row + i + 1, start, line, color);
        }
        true
    }
}

impl fmt::Display for HexMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canvas)
    }
}

/// Draw `sector` as a hex map.
///
/// Each system shows its name and, unless `player_facing`, its primary
/// world's two tags and tech-level code. With `use_color` the overlaid text
/// is coloured by tech level.
pub fn render_hex_map(sector: &Sector, use_color: bool, player_facing: bool) -> String {
    let mut map = HexMap::new(sector.rows(), sector.cols());

    for star in sector.systems() {
        let Some(world) = star.primary_world() else {
            continue;
        };
        let code = world.tech_level_code();
        let color = use_color.then(|| tech_level_color(code));
        let [first, second] = world.tag_names();
        let lines: Vec<&str> = if player_facing {
            vec![star.name.as_str()]
        } else {
            vec![star.name.as_str(), first, second, code]
        };

        if !map.set_text(star.row, star.col, &lines, color) {
            debug!("{} at {} is off the map", star.name, star.coord_label());
        }
    }

    map.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_core::{Culture, Star, World, WorldTag};

    fn tag(name: &str) -> WorldTag {
        WorldTag {
            name: name.to_string(),
            description: String::new(),
            enemies: vec![],
            friends: vec![],
            complications: vec![],
            things: vec![],
            places: vec![],
        }
    }

    fn star(row: u32, col: u32, name: &str, tags: [&str; 2], tech_level: &str) -> Star {
        Star {
            row,
            col,
            name: name.to_string(),
            culture: Culture::Latin,
            worlds: vec![World {
                primary: true,
                full_tags: false,
                name: "Prime".into(),
                culture: Culture::Latin,
                tags: [tag(tags[0]), tag(tags[1])],
                atmosphere: "Breathable mix".into(),
                temperature: "Temperate".into(),
                biosphere: "Human-miscible biosphere".into(),
                population: "Outpost".into(),
                tech_level: tech_level.to_string(),
                origin: None,
                relationship: None,
                contact: None,
            }],
            pois: vec![],
        }
    }

    fn sheol_sector() -> Sector {
        Sector::from_systems(
            2,
            2,
            vec![star(0, 1, "Sheol", ["Zombies", "Trade Hub"], "TL4, modern postech")],
        )
        .unwrap()
    }

    fn joined(lines: &[&str]) -> String {
        lines.iter().map(|l| format!("{l}\n")).collect()
    }

    #[test]
    fn every_hex_is_labelled() {
        let map = HexMap::new(3, 4);
        for row in 0..3 {
            for col in 0..4 {
                let at = map.label_position(row, col).unwrap();
                assert_eq!(map.canvas().find(&coord_label(row, col)), Some(at));
            }
        }
        assert_eq!(map.label_position(3, 0), None);
    }

    #[test]
    fn gm_map() {
        let expected = joined(&[
            r"  \__________/               ",
            r"  /00,00     \               ",
            r" /            \              ",
            r"/              \__________/  ",
            r"\              /00,01     \  ",
            r" \            /    Sheol   \ ",
            r"  \__________/    Zombies   \",
            r"  /01,00     \   Trade Hub  /",
            r" /            \     TL4    / ",
            r"/              \__________/  ",
            r"\              /01,01     \  ",
            r" \            /            \ ",
            r"  \__________/              \",
            r"             \              /",
            r"              \            / ",
            r"               \__________/  ",
        ]);
        assert_eq!(render_hex_map(&sheol_sector(), false, false), expected);
    }

    #[test]
    fn lone_star_at_origin_replaces_blank_under_its_label() {
        let blank = HexMap::new(2, 2);
        assert_eq!(blank.canvas().find("00,00"), Some((1, 3)));
        assert_eq!(blank.label_position(0, 0), Some((1, 3)));

        let sector =
            Sector::from_systems(2, 2, vec![star(0, 0, "Tophet", ["A", "B"], "TL1")]).unwrap();
        let map = render_hex_map(&sector, false, true);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines[1], r"  /00,00     \               ");
        assert_eq!(lines[2], r" /   Tophet   \              ");
        assert_eq!(lines[3], r"/              \__________/  ");
        // Centred on the middle of the hex: "Tophet" spans columns 5..11 of 16.
        assert_eq!(lines[2].find("Tophet"), Some(5));
    }

    #[test]
    fn player_map_hides_tags() {
        let map = render_hex_map(&sheol_sector(), false, true);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines[5], r" \            /    Sheol   \ ");
        assert_eq!(lines[6], r"  \__________/              \");
        assert_eq!(lines[8], r" /            \            / ");
        assert!(!map.contains("Zombies") && !map.contains("TL4"));
    }

    #[test]
    fn empty_sector_draws_bare_lattice() {
        let sector = Sector::from_systems(2, 2, vec![]).unwrap();
        let map = render_hex_map(&sector, true, false);
        assert_eq!(map.lines().count(), 16);
        assert!(map.lines().all(|l| l.chars().count() == 29));
        assert!(!map.contains('\x1b'));
    }

    #[test]
    fn colour_wraps_each_overlay_char() {
        let map = render_hex_map(&sheol_sector(), true, false);
        assert!(map.contains("\x1b[32mS\x1b[0m\x1b[32mh\x1b[0m"));
        let line = map.lines().nth(5).unwrap();
        assert!(line.starts_with(r" \            /    "));
        // Outlines and labels stay plain.
        assert!(map.contains("/00,01     \\"));
    }

    #[test]
    fn unknown_tech_level_is_white() {
        let sector =
            Sector::from_systems(2, 2, vec![star(0, 0, "Odd", ["A", "B"], "TL9, strange")]).unwrap();
        let map = render_hex_map(&sector, true, false);
        assert!(map.contains("\x1b[37mO\x1b[0m"));
        assert!(map.contains("\x1b[37mT\x1b[0m\x1b[37mL\x1b[0m\x1b[37m9\x1b[0m"));
    }

    #[test]
    fn long_names_extend_the_row() {
        let sector = Sector::from_systems(
            2,
            2,
            vec![star(1, 1, "Hyperborealisssss", ["A", "B"], "TL5")],
        )
        .unwrap();
        let map = render_hex_map(&sector, false, false);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines[11], r" \           Hyperborealisssss");
        assert_eq!(lines[12], r"  \__________/       A      \");
        assert_eq!(lines[14], r"              \     TL5    / ");
    }

    #[test]
    fn overflow_past_right_edge_is_kept() {
        let sector = Sector::from_systems(
            2,
            2,
            vec![star(0, 1, "Thessaloniki-Prime-Station", ["A", "B"], "TL2")],
        )
        .unwrap();
        let map = render_hex_map(&sector, false, false);
        let line = map.lines().nth(5).unwrap();
        assert!(line.ends_with("Thessaloniki-Prime-Station"));
        assert!(line.chars().count() > 29);
    }

    #[test]
    fn rendering_is_repeatable() {
        let sector = sheol_sector();
        for (color, player) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_eq!(
                render_hex_map(&sector, color, player),
                render_hex_map(&sector, color, player)
            );
        }
    }
}
