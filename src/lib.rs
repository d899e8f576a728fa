//! Stonefall (workspace facade crate).
//!
//! Re-exports the workspace crates as `stonefall::{core,input,term,types}` so the
//! binary, integration tests and benches share one import path. The game
//! itself lives in dedicated crates under `crates/`.

pub mod config;

pub use stonefall_core as core;
pub use stonefall_input as input;
pub use stonefall_term as term;
pub use stonefall_types as types;

pub use config::Config;
