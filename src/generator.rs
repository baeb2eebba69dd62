//! Random outcome generation for the three simulators.
//!
//! Draws map one-to-one onto the request kinds: uniform die values in
//! [1, sides], uniform Heads/Tails labels, and uniform ±1 steps
//! accumulated into a position sequence. All randomness flows through a
//! caller-supplied [`SmallRng`], so a fixed seed reproduces a full
//! session draw-for-draw.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::types::{CoinFace, OutcomeSequence, SimulationRequest};

/// Draw the outcome sequence for a validated request.
pub fn generate(request: &SimulationRequest, rng: &mut SmallRng) -> OutcomeSequence {
    match *request {
        SimulationRequest::Dice { rolls, sides } => {
            OutcomeSequence::Dice(roll_dice(rolls, sides, rng))
        }
        SimulationRequest::CoinFlip { flips } => OutcomeSequence::CoinFlip(flip_coins(flips, rng)),
        SimulationRequest::RandomWalk { steps } => {
            OutcomeSequence::RandomWalk(random_walk(steps, rng))
        }
    }
}

/// Roll `rolls` independent dice with faces 1..=sides.
pub fn roll_dice(rolls: u32, sides: u32, rng: &mut SmallRng) -> Vec<u32> {
    (0..rolls).map(|_| rng.random_range(1..=sides)).collect()
}

/// Flip `flips` independent fair coins.
pub fn flip_coins(flips: u32, rng: &mut SmallRng) -> Vec<CoinFace> {
    (0..flips)
        .map(|_| {
            if rng.random_bool(0.5) {
                CoinFace::Heads
            } else {
                CoinFace::Tails
            }
        })
        .collect()
}

/// Walk `steps` uniform ±1 steps from the origin.
///
/// Returns the full position sequence including the starting 0, so the
/// result has length `steps + 1`.
pub fn random_walk(steps: u32, rng: &mut SmallRng) -> Vec<i64> {
    let mut position = 0i64;
    let mut positions = Vec::with_capacity(steps as usize + 1);
    positions.push(position);
    for _ in 0..steps {
        position += if rng.random_bool(0.5) { 1 } else { -1 };
        positions.push(position);
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_roll_dice_range() {
        let mut rng = SmallRng::seed_from_u64(12345);
        for sides in [1, 2, 6, 20] {
            let values = roll_dice(10_000, sides, &mut rng);
            assert_eq!(values.len(), 10_000);
            for &v in &values {
                assert!(v >= 1 && v <= sides, "value out of range: {} (d{})", v, sides);
            }
        }
    }

    #[test]
    fn test_roll_dice_distribution() {
        let mut rng = SmallRng::seed_from_u64(42);
        let n = 120_000;
        let values = roll_dice(n, 6, &mut rng);
        let mut counts = [0u64; 6];
        for &v in &values {
            counts[(v - 1) as usize] += 1;
        }
        // Each face should land near n/6.
        let expected = n as f64 / 6.0;
        for (face, &count) in counts.iter().enumerate() {
            let ratio = count as f64 / expected;
            assert!(
                ratio > 0.95 && ratio < 1.05,
                "Face {} has count {} (expected ~{:.0}, ratio {:.3})",
                face + 1,
                count,
                expected,
                ratio
            );
        }
    }

    #[test]
    fn test_flip_coins_balance() {
        let mut rng = SmallRng::seed_from_u64(7);
        let flips = flip_coins(100_000, &mut rng);
        let heads = flips.iter().filter(|&&f| f == CoinFace::Heads).count();
        let ratio = heads as f64 / flips.len() as f64;
        assert!(ratio > 0.48 && ratio < 0.52, "heads ratio {:.3}", ratio);
    }

    #[test]
    fn test_random_walk_shape() {
        let mut rng = SmallRng::seed_from_u64(99);
        let positions = random_walk(500, &mut rng);
        assert_eq!(positions.len(), 501);
        assert_eq!(positions[0], 0);
        for pair in positions.windows(2) {
            assert_eq!((pair[1] - pair[0]).abs(), 1);
        }
    }

    #[test]
    fn test_random_walk_zero_steps() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(random_walk(0, &mut rng), vec![0]);
    }

    #[test]
    fn test_generate_deterministic_under_seed() {
        let request = SimulationRequest::Dice { rolls: 50, sides: 6 };
        let mut rng1 = SmallRng::seed_from_u64(2024);
        let mut rng2 = SmallRng::seed_from_u64(2024);
        assert_eq!(generate(&request, &mut rng1), generate(&request, &mut rng2));
    }
}
