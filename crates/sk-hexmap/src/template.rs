//! The hexagon glyph and the lattice geometry derived from it.

/// A fixed hexagon outline and its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexCellTemplate {
    /// Glyph rows, all `width_middle` characters wide.
    pub glyph: &'static [&'static str],
    /// Number of glyph rows.
    pub height: usize,
    /// Width of the flat top edge.
    pub width_top: usize,
    /// Width of the widest row.
    pub width_middle: usize,
    /// Glyph row holding the coordinate label.
    pub label_row: usize,
    /// Glyph column where the coordinate label starts.
    pub label_col: usize,
}

impl HexCellTemplate {
    /// The 7x16 hexagon used for every map.
    pub const STANDARD: Self = Self {
        glyph: &[
            r"  \__________/  ",
            r"  /r         \  ",
            r" /            \ ",
            r"/              \",
            r"\              /",
            r" \            / ",
            r"  \__________/  ",
        ],
        height: 7,
        width_top: 10,
        width_middle: 16,
        label_row: 1,
        label_col: 3,
    };

    /// How far a slanted edge reaches past the top edge on each side.
    pub const fn width_delta(&self) -> usize {
        (self.width_middle - self.width_top) / 2
    }

    /// Horizontal distance between neighbouring columns.
    pub const fn column_step(&self) -> usize {
        self.width_middle - self.width_delta()
    }

    /// Vertical distance between neighbouring rows.
    pub const fn row_step(&self) -> usize {
        self.height - 1
    }

    /// Canvas `(height, width)` for a `rows` x `cols` lattice.
    pub const fn canvas_size(&self, rows: usize, cols: usize) -> (usize, usize) {
        (
            rows * self.row_step() + self.height / 2 + 1,
            cols * self.column_step() + self.width_delta(),
        )
    }

    /// Top-left canvas position of the cell at (`row`, `col`).
    ///
    /// Odd columns sit half a cell lower than even ones.
    pub const fn cell_origin(&self, row: usize, col: usize) -> (usize, usize) {
        let shift = if col % 2 == 1 { self.height / 2 } else { 0 };
        (row * self.row_step() + shift, col * self.column_step())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: HexCellTemplate = HexCellTemplate::STANDARD;

    #[test]
    fn glyph_matches_constants() {
        assert_eq!(T.glyph.len(), T.height);
        assert!(T.glyph.iter().all(|row| row.chars().count() == T.width_middle));
        assert_eq!(T.glyph[T.label_row].chars().nth(T.label_col), Some('r'));
        assert_eq!(T.width_delta(), 3);
    }

    #[test]
    fn canvas_sizes() {
        assert_eq!(T.canvas_size(2, 2), (16, 29));
        assert_eq!(T.canvas_size(8, 10), (52, 133));
        assert_eq!(T.canvas_size(99, 99), (598, 1290));
    }

    #[test]
    fn odd_columns_shift_down() {
        assert_eq!(T.cell_origin(0, 0), (0, 0));
        assert_eq!(T.cell_origin(0, 1), (3, 13));
        assert_eq!(T.cell_origin(2, 2), (12, 26));
        assert_eq!(T.cell_origin(1, 3), (9, 39));
    }

    #[test]
    fn last_cells_fit_the_canvas() {
        for (rows, cols) in [(2, 2), (3, 5), (8, 10)] {
            let (height, width) = T.canvas_size(rows, cols);
            let (r, c) = T.cell_origin(rows - 1, cols - 1);
            let odd = T.cell_origin(rows - 1, (cols - 1) | 1);
            assert!(r + T.height <= height && c + T.width_middle <= width);
            assert!(odd.0 + T.height <= height);
        }
    }
}
