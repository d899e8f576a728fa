//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], auto-repeats held
//! movement keys, and turns pointer movement into swipe gestures and
//! hover-confirmed button presses.

pub mod handler;
pub mod hover;
pub mod map;
pub mod swipe;

pub use stonefall_types as types;

pub use handler::InputHandler;
pub use hover::HoverConfirm;
pub use map::{handle_key_event, should_quit};
pub use swipe::SwipeDetector;
