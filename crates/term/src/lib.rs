//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is flushed to the terminal as a diff.
//!
//! - [`GameView`] turns a snapshot into a framebuffer and owns the screen
//!   [`Layout`] used for pointer hit-testing
//! - [`TerminalRenderer`] owns the terminal modes and writes frames
//! - [`FrameClock`] caps the frame rate

pub mod fb;
pub mod frame_clock;
pub mod game_view;
pub mod renderer;

pub use stonefall_core as core;
pub use stonefall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_clock::FrameClock;
pub use game_view::{GameView, Layout, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
