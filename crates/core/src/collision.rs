//! Collision detection between a shape and the board
//!
//! The playfield is closed: any filled shape cell that lands outside the grid
//! (left, right, above the top or below the floor row) counts as a collision,
//! exactly like one that lands on a settled cell or the floor.

use crate::board::Board;
use crate::shapes::Shape;
use crate::types::EMPTY;

/// Whether `shape` placed with its top-left corner at (x, y) overlaps the floor,
/// a settled cell, or leaves the grid.
pub fn collides(board: &Board, shape: &Shape, x: i32, y: i32) -> bool {
    shape
        .filled()
        .any(|(cx, cy, _)| !matches!(board.get(cx + x, cy + y), Some(EMPTY)))
}
