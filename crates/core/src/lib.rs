//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the game rules and the state machine. It has no dependency
//! on terminal, input or clock, so the same seed replays the same game.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven stone shapes and clockwise rotation
//! - [`board`]: the playfield grid with its floor row, merging and row clearing
//! - [`collision`]: the single overlap test every move goes through
//! - [`scoring`]: line-clear points, soft-drop points and level speed
//! - [`rng`]: where stones come from (seeded LCG or a scripted sequence)
//! - [`game_state`]: Playing / Paused / GameOver state machine
//! - [`gravity`]: turns elapsed milliseconds into gravity ticks
//! - [`snapshot`]: read-only per-frame view for renderers
//!
//! # Rules
//!
//! - Stones spawn centred on row 0; a spawn that overlaps ends the game
//! - Rotation is clockwise only and never kicks off walls
//! - A stone locks on the first gravity or drop step that would collide
//! - 40/100/300/1200 points per 1-4 rows, times the level
//! - One level per six cleared rows; gravity speeds up 50ms per level down to 100ms
//!
//! # Example
//!
//! ```
//! use stonefall_core::GameState;
//! use stonefall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Every row of the hard drop scores a point.
//! assert!(game.score() > 0);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod gravity;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use stonefall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::{GameState, Stone};
pub use gravity::GravityTimer;
pub use rng::{PieceSource, SequenceSource, SimpleRng};
pub use scoring::{gravity_interval_ms, line_clear_score};
pub use shapes::{get_shape, rotate_clockwise, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
