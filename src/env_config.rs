//! Environment configuration, read once at session start.
//!
//! - `SIMLAB_SEED` — fixed RNG seed; unset means seed from OS entropy.
//! - `SIMLAB_HISTOGRAM_WIDTH` — histogram bar budget (default 40).
//! - `SIMLAB_WALK_MARGIN` — left margin of the walk path (default 10).
//! - `SIMLAB_WALK_RESERVE` — columns excluded from walk scaling
//!   (default 20).
//!
//! Unset or unparseable values fall back to the defaults silently; the
//! terminal belongs to the TUI, so there is nowhere to complain to.

use crate::constants::{HISTOGRAM_WIDTH, WALK_MARGIN, WALK_RESERVE};

fn env_u16(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Read `SIMLAB_SEED`. `None` means seed from OS entropy.
pub fn seed() -> Option<u64> {
    std::env::var("SIMLAB_SEED").ok().and_then(|s| s.parse().ok())
}

pub fn histogram_width() -> u16 {
    env_u16("SIMLAB_HISTOGRAM_WIDTH", HISTOGRAM_WIDTH)
}

pub fn walk_margin() -> u16 {
    env_u16("SIMLAB_WALK_MARGIN", WALK_MARGIN)
}

pub fn walk_reserve() -> u16 {
    env_u16("SIMLAB_WALK_RESERVE", WALK_RESERVE)
}
