//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid of colour indices plus one extra floor row
//! at the bottom that is always filled. Stones settle when they would sink into
//! the floor, so the playfield needs no special bottom-edge case.
//!
//! Storage is a flat row-major vector of `(rows + 1) * cols` cells.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::shapes::Shape;
use crate::types::{Cell, BOARD_COLS, BOARD_ROWS, EMPTY, FLOOR};

/// The game board: playfield plus a trailing floor row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the default 10x22 size
    pub fn new() -> Self {
        Self::with_size(BOARD_COLS, BOARD_ROWS)
    }

    /// Create an empty board with `rows` playable rows and a floor row below.
    ///
    /// Zero dimensions are raised to 1.
    pub fn with_size(cols: u8, rows: u8) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let playfield = cols as usize * rows as usize;
        let mut cells = vec![EMPTY; playfield + cols as usize];
        cells[playfield..].fill(FLOOR);
        Self { cols, rows, cells }
    }

    /// Calculate flat index from (x, y) coordinates; the floor row is addressable
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.cols as i32 || y > self.rows as i32 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of playable rows (floor excluded)
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Cell at (x, y), including the floor row; `None` when out of range
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set a playfield cell. The floor row cannot be written.
    /// Returns false if out of range.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if y >= self.rows as i32 {
            return false;
        }
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// One row including the floor row; empty slice when out of range
    pub fn row(&self, y: usize) -> &[Cell] {
        if y > self.rows as usize {
            return &[];
        }
        let w = self.cols as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Playfield cells without the floor row
    pub fn playfield(&self) -> &[Cell] {
        &self.cells[..self.cols as usize * self.rows as usize]
    }

    /// Check if a playfield row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        self.row(y).iter().all(|&c| c != EMPTY)
    }

    /// Add a stone's colours into the grid.
    ///
    /// Stone row `cy` lands on board row `cy + y - 1`: `y` is the first
    /// position where the stone collided, so the stone settles one row above
    /// it. Cells that would fall outside the playfield are skipped.
    pub fn merge(&mut self, shape: &Shape, x: i32, y: i32) {
        for (cx, cy, color) in shape.filled() {
            let bx = cx + x;
            let by = cy + y - 1;
            if by >= self.rows as i32 {
                continue;
            }
            if let Some(i) = self.index(bx, by) {
                self.cells[i] = self.cells[i].saturating_add(color);
            }
        }
    }

    /// Remove playfield row `y`, shift everything above down one row and
    /// insert an empty row at the top. The floor row is untouched.
    ///
    /// Returns false (and does nothing) for the floor row or beyond.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        let w = self.cols as usize;
        self.cells.copy_within(0..y * w, w);
        self.cells[..w].fill(EMPTY);
        true
    }

    /// Repeatedly clear the topmost full row until none is left.
    ///
    /// Rescans from the top after each clear, so any number of full rows are
    /// removed whether or not they are contiguous. Returns how many were cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        while let Some(y) = (0..self.rows as usize).find(|&y| self.is_row_full(y)) {
            self.clear_row(y);
            cleared += 1;
        }
        cleared
    }

    /// Copy the playfield into `out` (resized to fit)
    pub fn write_playfield(&self, out: &mut Vec<Cell>) {
        out.clear();
        out.extend_from_slice(self.playfield());
    }

    /// Build a board from playfield rows for testing
    #[cfg(test)]
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        let cols = rows[0].len() as u8;
        let mut board = Self::with_size(cols, rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols as usize);
            for (x, &c) in row.iter().enumerate() {
                board.set(x as i32, y as i32, c);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
