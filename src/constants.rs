//! Display-layout constants shared by the formatter and the TUI.
//!
//! The scaling values ([`HISTOGRAM_WIDTH`], [`WALK_MARGIN`],
//! [`WALK_RESERVE`]) are cosmetic defaults, overridable through the
//! environment (see [`crate::env_config`]); the remaining values pin the
//! screen layout.

/// Width budget (in `*` characters) for the longest dice histogram bar.
pub const HISTOGRAM_WIDTH: u16 = 40;

/// Left margin, in columns, for the random-walk path markers.
pub const WALK_MARGIN: u16 = 10;

/// Columns reserved (not available to the path) when scaling the walk.
pub const WALK_RESERVE: u16 = 20;

/// Column where titles, summary fields, and prompts start.
pub const FIELD_COL: u16 = 5;

/// Column where detail rows (frequency table, streaks, path) start.
pub const DETAIL_COL: u16 = 7;

/// Row of the section title, below the banner.
pub const TITLE_ROW: u16 = 10;

/// Rows kept free at the bottom of the grid by detail sections.
pub const BOTTOM_MARGIN: u16 = 4;

/// Maximum characters accepted by the numeric prompt.
pub const INPUT_MAX_LEN: usize = 10;

/// How long invalid-input errors stay visible before re-prompting.
pub const ERROR_DISPLAY_MS: u64 = 1000;
