//! Game state module - the game state machine
//!
//! Ties together board, shapes, piece source and scoring. All operations are
//! total: commands that are not allowed in the current [`Phase`] or that would
//! collide are silently rejected and reported through a `false` return value.
//!
//! Gravity is not driven from here. The caller owns the clock and calls
//! [`GameState::timer_tick`] once per gravity interval.

use log::{debug, info};

use crate::board::Board;
use crate::collision::collides;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{gravity_interval_ms, line_clear_score, reaches_next_level, SOFT_DROP_POINTS};
use crate::shapes::{get_shape, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stone {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Stone {
    /// A stone in spawn orientation, horizontally centred on row 0
    pub fn spawn(kind: PieceKind, cols: u8) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            x: (cols as i32 - shape.width() as i32) / 2,
            y: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    board: Board,
    active: Stone,
    next: PieceKind,
    source: S,
    score: u32,
    level: u32,
    lines: u32,
    phase: Phase,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Default 10x22 game with the seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_source(BOARD_COLS, BOARD_ROWS, SimpleRng::new(seed))
    }

    pub fn seed(&self) -> u32 {
        self.source.seed()
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Build a game of the given size drawing stones from `source`.
    ///
    /// The first stone is spawned immediately.
    pub fn with_source(cols: u8, rows: u8, mut source: S) -> Self {
        let board = Board::with_size(cols, rows);
        let next = source.next_kind();
        let mut state = Self {
            active: Stone::spawn(next, board.cols()),
            board,
            next,
            source,
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::Playing,
            last_event: None,
        };
        state.spawn();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> &Stone {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn next_shape(&self) -> Shape {
        get_shape(self.next)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Current gravity interval for the loop's timer
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.board.cols();
        out.rows = self.board.rows();
        self.board.write_playfield(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.next = self.next;
        out.next_shape = self.next_shape();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase;
        out.gravity_ms = self.gravity_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the next stone to active and draw a new next stone.
    ///
    /// If the new stone already collides the game is over. Returns false in
    /// that case, and when called after game over.
    pub fn spawn(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        let stone = Stone::spawn(self.next, self.board.cols());
        self.next = self.source.next_kind();
        self.active = stone;

        if collides(&self.board, &stone.shape, stone.x, stone.y) {
            self.phase = Phase::GameOver;
            info!(
                "game over: score {} level {} lines {}",
                self.score, self.level, self.lines
            );
            return false;
        }
        true
    }

    /// Shift the stone horizontally, clamped to the walls.
    ///
    /// Returns true if the stone moved.
    pub fn move_by(&mut self, dx: i32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        let max_x = self.board.cols() as i32 - self.active.shape.width() as i32;
        let mut new_x = self.active.x + dx;
        if new_x < 0 {
            new_x = 0;
        }
        if new_x > max_x {
            new_x = max_x;
        }

        if new_x == self.active.x
            || collides(&self.board, &self.active.shape, new_x, self.active.y)
        {
            return false;
        }
        self.active.x = new_x;
        true
    }

    /// Rotate clockwise in place; no wall kicks.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        let rotated = self.active.shape.rotate_clockwise();
        if collides(&self.board, &rotated, self.active.x, self.active.y) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Move the stone down one row, locking it if it cannot go further.
    ///
    /// Returns true if the stone locked. Manual steps that do not lock score
    /// one point.
    pub fn soft_drop(&mut self, manual: bool) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        let y = self.active.y + 1;
        if collides(&self.board, &self.active.shape, self.active.x, y) {
            self.lock(y);
            return true;
        }

        self.active.y = y;
        if manual {
            self.score += SOFT_DROP_POINTS;
        }
        false
    }

    /// Soft-drop until the stone locks. Returns false if not playing.
    pub fn hard_drop(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        // The floor row guarantees a lock within rows + 1 steps.
        for _ in 0..=self.board.rows() as usize + 1 {
            if self.soft_drop(true) {
                return true;
            }
        }
        false
    }

    /// Gravity step from the external timer
    pub fn timer_tick(&mut self) -> bool {
        self.soft_drop(false)
    }

    /// Playing <-> Paused. Rejected after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver => return false,
        };
        info!("{}", if self.paused() { "paused" } else { "resumed" });
        true
    }

    /// Fresh board, score, level and lines. Only accepted after game over.
    ///
    /// The piece source and the pending next stone carry over.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }

        self.board = Board::with_size(self.board.cols(), self.board.rows());
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.last_event = None;
        self.phase = Phase::Playing;
        self.spawn();
        info!("restarted");
        true
    }

    /// Dispatch a player command.
    ///
    /// Returns whether the command was accepted. `Quit` never touches the game
    /// and always returns false; the caller decides how to exit.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1),
            GameAction::MoveRight => self.move_by(1),
            GameAction::SoftDrop => {
                let accepted = self.phase == Phase::Playing;
                self.soft_drop(true);
                accepted
            }
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
            GameAction::Quit => false,
        }
    }

    /// Settle the active stone given its first colliding row, clear rows,
    /// score and spawn the next stone.
    fn lock(&mut self, colliding_y: i32) {
        let stone = self.active;
        self.board.merge(&stone.shape, stone.x, colliding_y);

        let cleared = self.board.clear_full_rows();
        let points = line_clear_score(cleared, self.level);
        self.lines += cleared;
        self.score += points;

        let level_up = reaches_next_level(self.lines, self.level);
        if level_up {
            self.level += 1;
            info!(
                "level {} reached, gravity {}ms",
                self.level,
                self.gravity_interval_ms()
            );
        }

        debug!(
            "locked {} at ({}, {}), cleared {} for {} points",
            stone.kind.as_str(),
            stone.x,
            colliding_y - 1,
            cleared,
            points
        );

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            line_clear_score: points,
            level_up,
        });

        self.spawn();
    }
}
