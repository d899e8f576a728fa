//! Start-up configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `STONEFALL_SEED` | piece RNG seed | system clock |
//! | `STONEFALL_FPS` | frame cap | 120 |
//! | `STONEFALL_LOG_PATH` | log file | none (logging off) |
//!
//! Unparsable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::MAX_FPS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub fps: u32,
    pub log_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("STONEFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let fps = lookup("STONEFALL_FPS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&fps: &u32| fps > 0)
            .unwrap_or(MAX_FPS);

        let log_path = lookup("STONEFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            fps,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
