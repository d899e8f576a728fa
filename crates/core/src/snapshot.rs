use crate::game_state::Stone;
use crate::shapes::{get_shape, Shape};
use crate::types::{Cell, Phase, PieceKind, BOARD_COLS, BOARD_ROWS, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl From<Stone> for ActiveSnapshot {
    fn from(value: Stone) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a game handed to renderers once per frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cols: u8,
    pub rows: u8,
    /// Playfield cells, row-major, floor row excluded
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub next_shape: Shape,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub gravity_ms: u32,
}

impl GameSnapshot {
    /// Playfield cell; empty when out of range
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols as usize || y >= self.rows as usize {
            return EMPTY;
        }
        self.board
            .get(y * self.cols as usize + x)
            .copied()
            .unwrap_or(EMPTY)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cols: BOARD_COLS,
            rows: BOARD_ROWS,
            board: vec![EMPTY; BOARD_COLS as usize * BOARD_ROWS as usize],
            active: None,
            next: PieceKind::O,
            next_shape: get_shape(PieceKind::O),
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::Playing,
            gravity_ms: 1000,
        }
    }
}
