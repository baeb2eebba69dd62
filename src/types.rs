//! Request and outcome types shared by the generator, statistics, and TUI.

use std::fmt;

/// Which simulator a menu selection launches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatorKind {
    Dice,
    CoinFlip,
    RandomWalk,
}

/// Validated parameters for one simulator run.
///
/// Built from prompt input after positive-integer validation; immutable
/// once constructed, so every count is >= 1 by the time generation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationRequest {
    Dice { rolls: u32, sides: u32 },
    CoinFlip { flips: u32 },
    RandomWalk { steps: u32 },
}

impl SimulationRequest {
    pub fn kind(&self) -> SimulatorKind {
        match self {
            SimulationRequest::Dice { .. } => SimulatorKind::Dice,
            SimulationRequest::CoinFlip { .. } => SimulatorKind::CoinFlip,
            SimulationRequest::RandomWalk { .. } => SimulatorKind::RandomWalk,
        }
    }
}

/// One face of a coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "Heads"),
            CoinFace::Tails => write!(f, "Tails"),
        }
    }
}

/// The raw outcomes of one simulator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutcomeSequence {
    /// Die values in draw order, each in [1, sides].
    Dice(Vec<u32>),
    /// Flip labels in draw order.
    CoinFlip(Vec<CoinFace>),
    /// Walk positions, length steps+1, starting at 0; consecutive
    /// positions differ by exactly ±1.
    RandomWalk(Vec<i64>),
}
