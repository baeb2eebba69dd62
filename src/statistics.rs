//! Descriptive statistics over simulator outcome sequences.
//!
//! One summary type per simulator: [`DiceSummary`], [`CoinFlipSummary`],
//! [`RandomWalkSummary`]. All summarize functions are pure — the same
//! sequence always yields the same summary — and total for the validated
//! inputs the prompt layer produces (non-empty sequences).

use std::collections::BTreeMap;
use std::fmt;

use crate::types::CoinFace;

// ── Dice ────────────────────────────────────────────────────────────

/// Mode of a dice sequence under the multimode tie rule.
///
/// The sentinel case is intentional: a sequence longer than one roll in
/// which every value occurred exactly once reports "No unique mode"
/// instead of listing the entire sequence back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModeReport {
    /// Values tied for the maximum frequency, in first-encountered order.
    Values(Vec<u32>),
    NoUniqueMode,
}

impl fmt::Display for ModeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeReport::Values(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
            ModeReport::NoUniqueMode => write!(f, "No unique mode"),
        }
    }
}

/// Descriptive statistics for a dice-roll sequence.
pub struct DiceSummary {
    pub rolls: u32,
    pub sides: u32,
    /// Face value → occurrence count; iterates in ascending face order.
    pub frequencies: BTreeMap<u32, u32>,
    pub mean: f64,
    /// Arithmetic mean of the two middle values for even-length input.
    pub median: f64,
    pub mode: ModeReport,
    /// Sample variance (n-1 denominator); exactly 0 for a single roll.
    pub variance: f64,
    pub std_dev: f64,
}

/// Summarize a dice-roll sequence.
pub fn summarize_dice(values: &[u32], sides: u32) -> DiceSummary {
    let rolls = values.len() as u32;
    let mut frequencies = BTreeMap::new();
    for &v in values {
        *frequencies.entry(v).or_insert(0u32) += 1;
    }

    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / rolls.max(1) as f64;
    let variance = sample_variance(values, mean);

    DiceSummary {
        rolls,
        sides,
        mode: multimode(values, &frequencies),
        frequencies,
        mean,
        median: median(values),
        variance,
        std_dev: variance.sqrt(),
    }
}

/// Median of an unsorted sequence; even lengths average the two middle
/// elements of the sorted order.
fn median(values: &[u32]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    }
}

/// Sample variance (n-1 denominator), 0 when fewer than two values.
fn sample_variance(values: &[u32], mean: f64) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
    sum_sq / (n - 1) as f64
}

/// All values tied for the maximum frequency, in first-encountered
/// order — or the sentinel when a multi-roll sequence has no repeats.
fn multimode(values: &[u32], frequencies: &BTreeMap<u32, u32>) -> ModeReport {
    let max_count = frequencies.values().copied().max().unwrap_or(0);
    if max_count <= 1 && values.len() > 1 {
        return ModeReport::NoUniqueMode;
    }
    let mut modes: Vec<u32> = Vec::new();
    for &v in values {
        if frequencies[&v] == max_count && !modes.contains(&v) {
            modes.push(v);
        }
    }
    ModeReport::Values(modes)
}

// ── Coin flips ──────────────────────────────────────────────────────

/// Descriptive statistics for a coin-flip sequence.
pub struct CoinFlipSummary {
    pub flips: u32,
    pub heads: u32,
    pub tails: u32,
    pub heads_pct: f64,
    pub tails_pct: f64,
    /// Maximal-run lengths in original order; sums to `flips`.
    pub streaks: Vec<u32>,
    pub longest_streak: u32,
    pub total_streaks: u32,
}

/// Summarize a coin-flip sequence.
pub fn summarize_coin_flips(labels: &[CoinFace]) -> CoinFlipSummary {
    let flips = labels.len() as u32;
    let heads = labels.iter().filter(|&&f| f == CoinFace::Heads).count() as u32;
    let tails = flips - heads;
    let (heads_pct, tails_pct) = if flips == 0 {
        (0.0, 0.0)
    } else {
        (
            heads as f64 / flips as f64 * 100.0,
            tails as f64 / flips as f64 * 100.0,
        )
    };
    let streaks = streak_lengths(labels);
    let longest_streak = streaks.iter().copied().max().unwrap_or(0);
    let total_streaks = streaks.len() as u32;

    CoinFlipSummary {
        flips,
        heads,
        tails,
        heads_pct,
        tails_pct,
        streaks,
        longest_streak,
        total_streaks,
    }
}

/// Lengths of maximal runs of identical consecutive labels, left to
/// right.
pub fn streak_lengths(labels: &[CoinFace]) -> Vec<u32> {
    let mut streaks = Vec::new();
    let mut iter = labels.iter();
    let Some(mut current) = iter.next() else {
        return streaks;
    };
    let mut run = 1u32;
    for label in iter {
        if label == current {
            run += 1;
        } else {
            streaks.push(run);
            current = label;
            run = 1;
        }
    }
    streaks.push(run);
    streaks
}

// ── Random walk ─────────────────────────────────────────────────────

/// Descriptive statistics for a ±1 random walk.
///
/// All distance metrics range over the full recorded position sequence
/// (length steps+1, starting position included), not over the steps.
pub struct RandomWalkSummary {
    pub steps: u32,
    /// Full position sequence, kept for path rendering.
    pub positions: Vec<i64>,
    pub final_position: i64,
    /// Equal to the final position, since every step is ±1.
    pub net_displacement: i64,
    /// Sum of |position| over all recorded positions — not the sum of
    /// step magnitudes.
    pub total_displacement: i64,
    pub farthest_distance: i64,
    pub average_distance: f64,
}

/// Summarize a walk from its full position sequence.
pub fn summarize_walk(positions: &[i64]) -> RandomWalkSummary {
    let steps = positions.len().saturating_sub(1) as u32;
    let final_position = positions.last().copied().unwrap_or(0);
    let farthest_distance = positions.iter().map(|p| p.abs()).max().unwrap_or(0);
    let total_displacement: i64 = positions.iter().map(|p| p.abs()).sum();
    let average_distance = if positions.is_empty() {
        0.0
    } else {
        total_displacement as f64 / positions.len() as f64
    };

    RandomWalkSummary {
        steps,
        positions: positions.to_vec(),
        final_position,
        net_displacement: final_position,
        total_displacement,
        farthest_distance,
        average_distance,
    }
}
