//! Result formatting: statistics summaries → bounded display lines.
//!
//! The formatter is pure. It receives a summary plus a [`RenderContext`]
//! (grid size and cosmetic scaling constants, captured once at session
//! start) and emits positioned [`DisplayLine`]s. Detail sections stop
//! [`BOTTOM_MARGIN`] rows short of the grid bottom and close with an
//! ellipsis marker; text is clipped to the columns remaining on its row,
//! and anything still out of bounds is dropped by the render surface.

use crate::art;
use crate::constants::{
    BOTTOM_MARGIN, DETAIL_COL, FIELD_COL, HISTOGRAM_WIDTH, TITLE_ROW, WALK_MARGIN, WALK_RESERVE,
};
use crate::statistics::{CoinFlipSummary, DiceSummary, RandomWalkSummary};
use crate::types::SimulatorKind;

const PRESS_ANY_KEY: &str = "Press any key to return to the main menu.";

/// Semantic style of a display line; the TUI maps tags to colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleTag {
    Banner,
    Title,
    Prompt,
    Value,
    Alert,
}

/// One positioned, styled line of output.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayLine {
    pub row: u16,
    pub col: u16,
    pub text: String,
    pub style: StyleTag,
}

/// Grid size plus the cosmetic scaling constants.
///
/// Built once when a session starts and passed into every formatting
/// call; no formatting state lives anywhere else.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    pub height: u16,
    pub width: u16,
    /// Width budget for the longest dice histogram bar.
    pub histogram_width: u16,
    /// Left margin of the walk path markers.
    pub walk_margin: u16,
    /// Columns excluded from the walk scale divisor.
    pub walk_reserve: u16,
}

impl RenderContext {
    /// Grid size with the default scaling constants.
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            height,
            width,
            histogram_width: HISTOGRAM_WIDTH,
            walk_margin: WALK_MARGIN,
            walk_reserve: WALK_RESERVE,
        }
    }

    /// Grid size with the environment-overridable scaling constants.
    pub fn from_env(height: u16, width: u16) -> Self {
        Self {
            height,
            width,
            histogram_width: crate::env_config::histogram_width(),
            walk_margin: crate::env_config::walk_margin(),
            walk_reserve: crate::env_config::walk_reserve(),
        }
    }

    /// First row detail sections may not occupy.
    fn detail_limit(&self) -> u16 {
        self.height.saturating_sub(BOTTOM_MARGIN)
    }
}

// ── Line helpers ────────────────────────────────────────────────────

/// Cut `text` to at most `columns` characters.
pub fn clip_columns(text: &str, columns: usize) -> &str {
    match text.char_indices().nth(columns) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Append one line, clipping to the grid width and dropping writes that
/// start outside the grid columns. Rows are left untouched here: the
/// render surface drops rows below the grid, mirroring how detail
/// sections are allowed to run past a very small screen.
fn push(lines: &mut Vec<DisplayLine>, ctx: &RenderContext, row: u16, col: i32, text: &str, style: StyleTag) {
    if col < 0 || col >= ctx.width as i32 {
        return;
    }
    let budget = (ctx.width as i32 - col - 1).max(0) as usize;
    let clipped = clip_columns(text, budget);
    if clipped.is_empty() {
        return;
    }
    lines.push(DisplayLine {
        row,
        col: col as u16,
        text: clipped.to_string(),
        style,
    });
}

fn push_banner(lines: &mut Vec<DisplayLine>, ctx: &RenderContext, banner: &str, x_offset: i32) {
    for (idx, line) in banner.lines().enumerate() {
        push(lines, ctx, idx as u16, x_offset, line, StyleTag::Banner);
    }
}

/// Centering offset for the per-simulator banners.
fn banner_col(ctx: &RenderContext) -> i32 {
    ctx.width as i32 / 2 - 10
}

// ── Screens ─────────────────────────────────────────────────────────

/// The main menu screen.
pub fn menu_lines(ctx: &RenderContext) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    push_banner(&mut lines, ctx, art::MENU, ctx.width as i32 / 2 - 20);
    let col = FIELD_COL as i32;
    push(&mut lines, ctx, TITLE_ROW, col, "=== Simulation Menu ===", StyleTag::Title);
    push(&mut lines, ctx, TITLE_ROW + 2, col, "1. Dice Rolling Simulator", StyleTag::Prompt);
    push(&mut lines, ctx, TITLE_ROW + 3, col, "2. Coin Flip Simulator", StyleTag::Prompt);
    push(&mut lines, ctx, TITLE_ROW + 4, col, "3. Random Walk Simulator", StyleTag::Prompt);
    push(&mut lines, ctx, TITLE_ROW + 6, col, "Press 'q' to quit.", StyleTag::Banner);
    lines
}

/// Banner and title shown while a simulator prompts for its parameters.
pub fn prompt_lines(kind: SimulatorKind, ctx: &RenderContext) -> Vec<DisplayLine> {
    let (banner, title) = match kind {
        SimulatorKind::Dice => (art::DICE, "=== Dice Rolling Simulator ==="),
        SimulatorKind::CoinFlip => (art::COIN, "=== Coin Flip Simulator ==="),
        SimulatorKind::RandomWalk => (art::WALK, "=== Random Walk Simulator ==="),
    };
    let mut lines = Vec::new();
    push_banner(&mut lines, ctx, banner, banner_col(ctx));
    push(&mut lines, ctx, TITLE_ROW, FIELD_COL as i32, title, StyleTag::Title);
    lines
}

/// Dice results: summary fields plus the frequency table histogram.
pub fn format_dice(s: &DiceSummary, ctx: &RenderContext) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    push_banner(&mut lines, ctx, art::DICE, banner_col(ctx));
    let col = FIELD_COL as i32;
    push(&mut lines, ctx, TITLE_ROW, col, "=== Dice Roll Results ===", StyleTag::Title);
    push(&mut lines, ctx, TITLE_ROW + 2, col, &format!("Number of Rolls: {}", s.rolls), StyleTag::Prompt);
    push(&mut lines, ctx, TITLE_ROW + 3, col, &format!("Dice Sides: {}", s.sides), StyleTag::Prompt);
    push(&mut lines, ctx, TITLE_ROW + 4, col, &format!("Average Roll: {:.2}", s.mean), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 5, col, &format!("Median Roll: {}", s.median), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 6, col, &format!("Mode Roll(s): {}", s.mode), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 7, col, &format!("Variance: {:.2}", s.variance), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 8, col, &format!("Standard Deviation: {:.2}", s.std_dev), StyleTag::Value);

    push(&mut lines, ctx, TITLE_ROW + 10, col, "Frequency Table:", StyleTag::Title);
    let mut row = TITLE_ROW + 11;
    let max_count = s.frequencies.values().copied().max().unwrap_or(0);
    for (&face, &count) in &s.frequencies {
        if row >= ctx.detail_limit() {
            push(&mut lines, ctx, row, col, "...", StyleTag::Prompt);
            break;
        }
        let bar = "*".repeat(bar_length(count, max_count, ctx.histogram_width));
        push(
            &mut lines,
            ctx,
            row,
            DETAIL_COL as i32,
            &format!("{}: {} | {}", face, count, bar),
            StyleTag::Prompt,
        );
        row += 1;
    }

    push(&mut lines, ctx, row + 1, col, PRESS_ANY_KEY, StyleTag::Alert);
    lines
}

/// Histogram bar length: proportional share of the width budget, with
/// the most frequent face taking the full budget.
fn bar_length(count: u32, max_count: u32, histogram_width: u16) -> usize {
    if max_count == 0 {
        return count as usize;
    }
    (count as f64 * histogram_width as f64 / max_count as f64).round() as usize
}

/// Coin-flip results: counts, streak details, and the theoretical vs
/// experimental distribution comparison.
pub fn format_coin_flips(s: &CoinFlipSummary, ctx: &RenderContext) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    push_banner(&mut lines, ctx, art::COIN, banner_col(ctx));
    let col = FIELD_COL as i32;
    push(&mut lines, ctx, TITLE_ROW, col, "=== Coin Flip Results ===", StyleTag::Title);
    push(&mut lines, ctx, TITLE_ROW + 2, col, &format!("Number of Flips: {}", s.flips), StyleTag::Prompt);
    push(&mut lines, ctx, TITLE_ROW + 3, col, &format!("Heads: {} ({:.2}%)", s.heads, s.heads_pct), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 4, col, &format!("Tails: {} ({:.2}%)", s.tails, s.tails_pct), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 5, col, &format!("Longest Streak: {}", s.longest_streak), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 6, col, &format!("Total Streaks: {}", s.total_streaks), StyleTag::Value);

    push(&mut lines, ctx, TITLE_ROW + 8, col, "Streaks Details:", StyleTag::Title);
    let mut row = TITLE_ROW + 9;
    for (idx, length) in s.streaks.iter().enumerate() {
        if row >= ctx.detail_limit() {
            push(&mut lines, ctx, row, col, "...", StyleTag::Prompt);
            break;
        }
        push(
            &mut lines,
            ctx,
            row,
            DETAIL_COL as i32,
            &format!("Streak {}: {}", idx + 1, length),
            StyleTag::Prompt,
        );
        row += 1;
    }

    let detail = DETAIL_COL as i32;
    push(&mut lines, ctx, row + 1, col, "Probability Distribution:", StyleTag::Title);
    push(&mut lines, ctx, row + 2, detail, "Theoretical Heads: 50.00%", StyleTag::Prompt);
    push(&mut lines, ctx, row + 3, detail, &format!("Experimental Heads: {:.2}%", s.heads_pct), StyleTag::Prompt);
    push(&mut lines, ctx, row + 4, detail, "Theoretical Tails: 50.00%", StyleTag::Prompt);
    push(&mut lines, ctx, row + 5, detail, &format!("Experimental Tails: {:.2}%", s.tails_pct), StyleTag::Prompt);

    push(&mut lines, ctx, row + 7, col, PRESS_ANY_KEY, StyleTag::Alert);
    lines
}

/// Random-walk results: summary fields plus the step-by-step path,
/// each position marked proportionally across the grid width.
pub fn format_walk(s: &RandomWalkSummary, ctx: &RenderContext) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    push_banner(&mut lines, ctx, art::WALK, banner_col(ctx));
    let col = FIELD_COL as i32;
    push(&mut lines, ctx, TITLE_ROW, col, "=== Random Walk Results ===", StyleTag::Title);
    push(&mut lines, ctx, TITLE_ROW + 2, col, &format!("Number of Steps: {}", s.steps), StyleTag::Prompt);
    push(&mut lines, ctx, TITLE_ROW + 3, col, &format!("Final Position: {}", s.final_position), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 4, col, &format!("Total Displacement: {}", s.total_displacement), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 5, col, &format!("Net Displacement: {}", s.net_displacement), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 6, col, &format!("Farthest Distance from Origin: {}", s.farthest_distance), StyleTag::Value);
    push(&mut lines, ctx, TITLE_ROW + 7, col, &format!("Average Distance from Origin: {:.2}", s.average_distance), StyleTag::Value);

    push(&mut lines, ctx, TITLE_ROW + 9, col, "Step-by-Step Positions:", StyleTag::Title);
    let mut row = TITLE_ROW + 10;
    // Rows available to the path before the bottom margin; can be
    // non-positive on a very small grid.
    let path_rows = ctx.height as i64 - row as i64 - BOTTOM_MARGIN as i64;
    let shown = (s.positions.len() as i64).min(path_rows.max(0)) as usize;
    let scale =
        (ctx.width as i64 - ctx.walk_reserve as i64).div_euclid(s.farthest_distance.max(1));
    for (i, &pos) in s.positions.iter().take(shown).enumerate() {
        if row >= ctx.detail_limit() {
            break;
        }
        let pad = (ctx.walk_margin as i64 + pos * scale).max(0) as usize;
        push(
            &mut lines,
            ctx,
            row,
            DETAIL_COL as i32,
            &format!("Step {}: Position {} {}*", i, pos, " ".repeat(pad)),
            StyleTag::Prompt,
        );
        row += 1;
    }
    if s.positions.len() as i64 > path_rows {
        push(
            &mut lines,
            ctx,
            row,
            DETAIL_COL as i32,
            &format!("...and {} more steps", s.positions.len() as i64 - path_rows),
            StyleTag::Prompt,
        );
    }

    push(&mut lines, ctx, row + 1, col, PRESS_ANY_KEY, StyleTag::Alert);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::{summarize_coin_flips, summarize_dice, summarize_walk};
    use crate::types::CoinFace::{Heads, Tails};

    fn ctx(height: u16, width: u16) -> RenderContext {
        RenderContext::new(height, width)
    }

    #[test]
    fn test_clip_columns() {
        assert_eq!(clip_columns("hello", 3), "hel");
        assert_eq!(clip_columns("hello", 10), "hello");
        assert_eq!(clip_columns("hello", 0), "");
    }

    #[test]
    fn test_bar_length_scaling() {
        assert_eq!(bar_length(3, 3, 40), 40);
        assert_eq!(bar_length(1, 3, 40), 13); // 13.33 rounds down
        assert_eq!(bar_length(2, 3, 40), 27); // 26.67 rounds up
        assert_eq!(bar_length(5, 0, 40), 5); // degenerate scale factor 1
    }

    #[test]
    fn test_menu_lines_entries() {
        let lines = menu_lines(&ctx(30, 80));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"=== Simulation Menu ==="));
        assert!(texts.contains(&"1. Dice Rolling Simulator"));
        assert!(texts.contains(&"2. Coin Flip Simulator"));
        assert!(texts.contains(&"3. Random Walk Simulator"));
        assert!(texts.contains(&"Press 'q' to quit."));
    }

    #[test]
    fn test_dice_histogram_full_budget_for_max_face() {
        let s = summarize_dice(&[3, 3, 1, 6, 3], 6);
        let lines = format_dice(&s, &ctx(40, 120));
        let row = lines
            .iter()
            .find(|l| l.text.starts_with("3: 3 | "))
            .expect("frequency row for face 3");
        let stars = row.text.chars().filter(|&c| c == '*').count();
        assert_eq!(stars, 40);
    }

    #[test]
    fn test_dice_table_truncates_with_marker() {
        // 30 distinct faces but only a handful of rows before the margin.
        let values: Vec<u32> = (1..=30).collect();
        let s = summarize_dice(&values, 30);
        let c = ctx(30, 80);
        let lines = format_dice(&s, &c);
        let marker = lines
            .iter()
            .find(|l| l.text == "...")
            .expect("truncation marker");
        assert_eq!(marker.row, 26); // height - bottom margin
        let table_rows: Vec<&DisplayLine> = lines
            .iter()
            .filter(|l| l.col == DETAIL_COL && l.text.contains('|'))
            .collect();
        assert_eq!(table_rows.len(), 5); // rows 21..=25
        assert!(table_rows.iter().all(|l| l.row < 26));
    }

    #[test]
    fn test_dice_table_fits_without_marker() {
        let s = summarize_dice(&[1, 1, 2], 2);
        let lines = format_dice(&s, &ctx(40, 80));
        assert!(lines.iter().all(|l| l.text != "..."));
    }

    #[test]
    fn test_coin_sections_present() {
        let s = summarize_coin_flips(&[Heads, Heads, Tails, Tails, Tails, Heads]);
        let lines = format_coin_flips(&s, &ctx(40, 80));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"Heads: 3 (50.00%)"));
        assert!(texts.contains(&"Streak 1: 2"));
        assert!(texts.contains(&"Streak 2: 3"));
        assert!(texts.contains(&"Streak 3: 1"));
        assert!(texts.contains(&"Theoretical Heads: 50.00%"));
        assert!(texts.contains(&"Experimental Tails: 50.00%"));
    }

    #[test]
    fn test_walk_marker_offsets_scale() {
        let s = summarize_walk(&[0, 1, 2, 1, 2]);
        // width 80, reserve 20, farthest 2 -> scale 30.
        let lines = format_walk(&s, &ctx(40, 80));
        let step0 = lines.iter().find(|l| l.text.starts_with("Step 0:")).unwrap();
        let star_at = step0.text.chars().position(|c| c == '*').unwrap();
        // "Step 0: Position 0 " is 19 characters, margin 10.
        assert_eq!(star_at, 19 + 10);
        let step1 = lines.iter().find(|l| l.text.starts_with("Step 1:")).unwrap();
        let star_at = step1.text.chars().position(|c| c == '*').unwrap();
        assert_eq!(star_at, 19 + 10 + 30);
    }

    #[test]
    fn test_walk_truncates_with_count_marker() {
        let positions: Vec<i64> = (0..=20).map(|i| i % 2).collect();
        let s = summarize_walk(&positions);
        // Rows 20..26 available: 6 path rows for 21 positions.
        let lines = format_walk(&s, &ctx(30, 80));
        let marker = lines
            .iter()
            .find(|l| l.text.starts_with("...and "))
            .expect("overflow marker");
        assert_eq!(marker.text, "...and 15 more steps");
        let path_rows = lines
            .iter()
            .filter(|l| l.text.starts_with("Step "))
            .count();
        assert_eq!(path_rows, 6);
    }

    #[test]
    fn test_lines_respect_width_clipping() {
        let s = summarize_walk(&[0, 1, 2, 1, 2]);
        let c = ctx(40, 30);
        for line in format_walk(&s, &c) {
            let cols = line.col as usize + line.text.chars().count();
            assert!(cols < c.width as usize, "line overruns grid: {:?}", line);
        }
    }

    #[test]
    fn test_offscreen_banner_columns_dropped() {
        // Grid narrower than the centering offset math: nothing panics,
        // negative columns are simply not emitted.
        let lines = menu_lines(&ctx(30, 10));
        assert!(lines.iter().all(|l| l.col < 10));
    }
}
