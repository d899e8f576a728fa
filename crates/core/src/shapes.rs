//! Shapes module - the stone catalogue and the clockwise rotation transform
//!
//! A shape is a small rectangular grid of colour indices (0 = empty). Shapes
//! are plain `Copy` values: rotating produces a new shape and never touches
//! the catalogue.

use crate::types::{Cell, PieceKind, EMPTY};

/// Largest supported side length
pub const MAX_SIDE: usize = 4;

const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;

/// Rectangular grid of cells, row-major, at most 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Packed row-major cells (`y * width + x`); unused tail is always zero
    cells: [Cell; MAX_CELLS],
}

/// Build a catalogue entry from packed row-major cells
const fn packed<const N: usize>(width: u8, height: u8, src: [Cell; N]) -> Shape {
    let mut cells = [EMPTY; MAX_CELLS];
    let mut i = 0;
    while i < N {
        cells[i] = src[i];
        i += 1;
    }
    Shape {
        width,
        height,
        cells,
    }
}

static CATALOGUE: [Shape; 7] = [
    // T
    packed(3, 2, [1, 1, 1, 0, 1, 0]),
    // S
    packed(3, 2, [0, 2, 2, 2, 2, 0]),
    // Z
    packed(3, 2, [3, 3, 0, 0, 3, 3]),
    // J
    packed(3, 2, [4, 0, 0, 4, 4, 4]),
    // L
    packed(3, 2, [0, 0, 5, 5, 5, 5]),
    // I
    packed(4, 1, [6, 6, 6, 6]),
    // O
    packed(2, 2, [7, 7, 7, 7]),
];

/// Spawn orientation of a stone kind
pub fn get_shape(kind: PieceKind) -> Shape {
    CATALOGUE[kind.color() as usize - 1]
}

impl Shape {
    /// Build a shape from rows.
    ///
    /// Returns `None` for empty, ragged or oversized input.
    ///
    /// ```
    /// use stonefall_core::Shape;
    ///
    /// let s = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((s.width(), s.height()), (3, 2));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [EMPTY; MAX_CELLS];
        for (y, row) in rows.iter().enumerate() {
            cells[y * width..(y + 1) * width].copy_from_slice(row);
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at column `x`, row `y`; 0 when out of range
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize || y >= self.height as usize {
            return EMPTY;
        }
        self.cells[y * self.width as usize + x]
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height as usize {
            return &[];
        }
        let w = self.width as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Non-empty cells as `(x, y, colour)`
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let w = self.width as usize;
        self.cells[..w * self.height as usize]
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != EMPTY)
            .map(move |(i, &c)| ((i % w) as i32, (i / w) as i32, c))
    }

    /// Quarter turn.
    ///
    /// A `R x C` shape becomes `C x R`; output row `i`, column `j` is input
    /// row `j`, column `C - 1 - i`.
    pub fn rotate_clockwise(&self) -> Self {
        let in_w = self.width as usize;
        let in_h = self.height as usize;
        // Output is in_h wide and in_w tall.
        let mut cells = [EMPTY; MAX_CELLS];
        for i in 0..in_w {
            for j in 0..in_h {
                cells[i * in_h + j] = self.get(in_w - 1 - i, j);
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Free-function form of [`Shape::rotate_clockwise`]
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    shape.rotate_clockwise()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rows_of(shape: &Shape) -> Vec<Vec<Cell>> {
        (0..shape.height() as usize)
            .map(|y| shape.row(y).to_vec())
            .collect()
    }

    #[test]
    fn test_catalogue_colors_match_kind() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            assert!(shape.filled().all(|(_, _, c)| c == kind.color()));
            assert_eq!(shape.filled().count(), 4, "{:?} has 4 cells", kind);
        }
    }

    #[test]
    fn test_rotate_t_piece() {
        let t = get_shape(PieceKind::T);
        let r = t.rotate_clockwise();
        assert_eq!(rows_of(&r), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn test_rotate_i_piece_becomes_vertical() {
        let i = get_shape(PieceKind::I);
        let r = i.rotate_clockwise();
        assert_eq!((r.width(), r.height()), (1, 4));
        assert_eq!(r.filled().count(), 4);
    }

    #[test]
    fn test_o_piece_is_rotation_invariant() {
        let o = get_shape(PieceKind::O);
        assert_eq!(o.rotate_clockwise(), o);
    }

    #[test]
    fn test_unused_tail_stays_zero_after_rotation() {
        // Equality relies on the tail being zero.
        let j = get_shape(PieceKind::J);
        let back = j
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise();
        assert_eq!(back, j);
    }

    #[test]
    fn test_from_rows_rejects_oversized() {
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert!(Shape::from_rows(&[&[1], &[1], &[1], &[1], &[1]]).is_none());
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[]]).is_none());
    }

    #[test]
    fn test_get_out_of_range_is_empty() {
        let s = get_shape(PieceKind::T);
        assert_eq!(s.get(3, 0), EMPTY);
        assert_eq!(s.get(0, 2), EMPTY);
        assert!(s.row(2).is_empty());
    }

    fn arb_shape() -> impl Strategy<Value = Shape> {
        (1usize..=4, 1usize..=4)
            .prop_flat_map(|(w, h)| (Just(w), Just(h), prop::collection::vec(0u8..=7, w * h)))
            .prop_map(|(w, h, cells)| {
                let rows: Vec<&[u8]> = cells.chunks(w).collect();
                assert_eq!(rows.len(), h);
                Shape::from_rows(&rows).unwrap()
            })
    }

    proptest! {
        #[test]
        fn four_quarter_turns_restore_shape(shape in arb_shape()) {
            let back = shape
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise();
            prop_assert_eq!(back, shape);
        }

        #[test]
        fn rotation_swaps_dimensions_and_keeps_cells(shape in arb_shape()) {
            let r = rotate_clockwise(&shape);
            prop_assert_eq!(r.width(), shape.height());
            prop_assert_eq!(r.height(), shape.width());
            let mut before: Vec<u8> = shape.filled().map(|(_, _, c)| c).collect();
            let mut after: Vec<u8> = r.filled().map(|(_, _, c)| c).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }
    }
}
