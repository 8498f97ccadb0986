//! A grid of characters that glyphs and labels are written onto.

use std::fmt;

use colored::Color;

use crate::palette::paint;
use crate::template::HexCellTemplate;

/// One canvas position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// The character shown.
    pub ch: char,
    /// Foreground colour, if any.
    pub color: Option<Color>,
}

impl Cell {
    const BLANK: Self = Self {
        ch: ' ',
        color: None,
    };
}

/// A mutable character grid. Rows may grow past the initial width.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    rows: Vec<Vec<Cell>>,
}

impl Canvas {
    /// A canvas of spaces.
    pub fn blank(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![Cell::BLANK; width]; height],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of one row, or 0 past the bottom.
    pub fn row_width(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Copy `template`'s glyph with its top-left at `origin`, burning `label`
    /// into the label slot. Returns the canvas position of the label.
    pub fn stamp(
        &mut self,
        template: &HexCellTemplate,
        origin: (usize, usize),
        label: &str,
    ) -> (usize, usize) {
        let (top, left) = origin;
        for (i, line) in template.glyph.iter().enumerate() {
            self.write_text(top + i, left, line, None);
        }
        let position = (top + template.label_row, left + template.label_col);
        self.write_text(position.0, position.1, label, None);
        position
    }

    /// Write `text` starting at (`row`, `col`), one cell per character.
    ///
    /// Characters past the end of the row extend it. Rows past the bottom
    /// are ignored.
    pub fn write_text(&mut self, row: usize, col: usize, text: &str, color: Option<Color>) {
        let Some(cells) = self.rows.get_mut(row) else {
            return;
        };
        for (offset, ch) in text.chars().enumerate() {
            let cell = Cell { ch, color };
            match cells.get_mut(col + offset) {
                Some(slot) => *slot = cell,
                None => {
                    cells.resize(col + offset, Cell::BLANK);
                    cells.push(cell);
                }
            }
        }
    }

    /// First position of `needle`, scanning rows top to bottom and columns left to right.
    pub fn find(&self, needle: &str) -> Option<(usize, usize)> {
        let needle: Vec<char> = needle.chars().collect();
        if needle.is_empty() {
            return None;
        }
        self.rows.iter().enumerate().find_map(|(r, cells)| {
            cells
                .windows(needle.len())
                .position(|w| w.iter().zip(&needle).all(|(cell, ch)| cell.ch == *ch))
                .map(|c| (r, c))
        })
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.rows {
            for cell in cells {
                match cell.color {
                    Some(color) => f.write_str(&paint(cell.ch, color))?,
                    None => write!(f, "{}", cell.ch)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(canvas: &Canvas) -> Vec<String> {
        canvas.to_string().lines().map(str::to_string).collect()
    }

    #[test]
    fn blank_canvas_is_spaces() {
        let canvas = Canvas::blank(2, 3);
        assert_eq!(canvas.to_string(), "   \n   \n");
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.row_width(1), 3);
        assert_eq!(canvas.row_width(5), 0);
    }

    #[test]
    fn stamp_burns_label() {
        let t = HexCellTemplate::STANDARD;
        let mut canvas = Canvas::blank(7, 16);
        let at = canvas.stamp(&t, (0, 0), "03,07");
        assert_eq!(at, (1, 3));
        assert_eq!(lines(&canvas)[1], r"  /03,07     \  ");
        assert_eq!(lines(&canvas)[6], r"  \__________/  ");
        assert_eq!(canvas.find("03,07"), Some((1, 3)));
    }

    #[test]
    fn write_past_edge_extends_row() {
        let mut canvas = Canvas::blank(1, 4);
        canvas.write_text(0, 2, "wide", None);
        assert_eq!(canvas.to_string(), "  wide\n");
        assert_eq!(canvas.row_width(0), 6);
    }

    #[test]
    fn write_below_bottom_is_ignored() {
        let mut canvas = Canvas::blank(1, 2);
        canvas.write_text(3, 0, "x", None);
        assert_eq!(canvas.to_string(), "  \n");
    }

    #[test]
    fn find_prefers_top_left() {
        let mut canvas = Canvas::blank(3, 10);
        canvas.write_text(2, 0, "ab", None);
        canvas.write_text(1, 6, "ab", None);
        canvas.write_text(1, 2, "ab", None);
        assert_eq!(canvas.find("ab"), Some((1, 2)));
        assert_eq!(canvas.find("zz"), None);
        assert_eq!(canvas.find(""), None);
    }

    #[test]
    fn coloured_cells_are_wrapped() {
        let mut canvas = Canvas::blank(1, 1);
        canvas.write_text(0, 0, "ab", Some(Color::Red));
        assert_eq!(canvas.to_string(), "\x1b[31ma\x1b[0m\x1b[31mb\x1b[0m\n");
    }
}
