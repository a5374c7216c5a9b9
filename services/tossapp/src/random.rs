//! Outcome draws for both games
//!
//! Every draw takes the generator explicitly so tests can pin a seed and so
//! the animators decide the outcome before any frame is produced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::CoinFace;
use std::ops::RangeInclusive;

/// Build the session generator, seeded when a fixed seed is configured
pub fn game_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "Using fixed RNG seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Uniform index in `[0, count)`, `None` when there is nothing to pick from
pub fn draw_random_index<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Option<usize> {
    (count > 0).then(|| rng.gen_range(0..count))
}

pub fn draw_coin_face<R: Rng + ?Sized>(rng: &mut R) -> CoinFace {
    CoinFace::from_heads(rng.gen_bool(0.5))
}

pub fn draw_flip_count<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u32>) -> u32 {
    rng.gen_range(range)
}

/// Angular offset in `[-max, max)` degrees
pub fn draw_jitter<R: Rng + ?Sized>(rng: &mut R, max_degrees: f32) -> f32 {
    if max_degrees <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-max_degrees..max_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draw_is_refused() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_random_index(&mut rng, 0), None);
    }

    #[test]
    fn test_index_in_range_and_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=12 {
            let mut hits = vec![0usize; count];
            let trials = 2_000 * count;
            for _ in 0..trials {
                let index = draw_random_index(&mut rng, count).unwrap();
                assert!(index < count);
                hits[index] += 1;
            }
            // every index reachable, none wildly over or under represented
            for &h in &hits {
                assert!(h > 1_500 && h < 2_500, "count={} hits={:?}", count, hits);
            }
        }
    }

    #[test]
    fn test_single_player_always_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(draw_random_index(&mut rng, 1), Some(0));
        }
    }

    #[test]
    fn test_both_faces_drawn() {
        let mut rng = StdRng::seed_from_u64(11);
        let heads = (0..1_000)
            .filter(|_| draw_coin_face(&mut rng) == CoinFace::Heads)
            .count();
        assert!(heads > 400 && heads < 600, "heads={}", heads);
    }

    #[test]
    fn test_flip_count_inclusive() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 8];
        for _ in 0..500 {
            let flips = draw_flip_count(&mut rng, 4..=7);
            assert!((4..=7).contains(&flips));
            seen[flips as usize] = true;
        }
        assert!(seen[4] && seen[7]);
    }

    #[test]
    fn test_jitter_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1_000 {
            let jitter = draw_jitter(&mut rng, 10.0);
            assert!((-10.0..10.0).contains(&jitter));
        }
        assert_eq!(draw_jitter(&mut rng, 0.0), 0.0);
    }
}
