/// Shared fixtures for the game integration tests
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{CoinFace, PlayerName, SpinResult};
use std::time::Duration;
use tossapp::games::{BottleSpin, CoinToss};

pub const STEP: Duration = Duration::from_millis(16);

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn names(list: &[&str]) -> Vec<PlayerName> {
    list.iter()
        .map(|n| PlayerName::new(n).expect("valid test name"))
        .collect()
}

/// Step a tossed coin frame by frame until it settles
#[allow(dead_code)]
pub fn settle_coin(coin: &mut CoinToss) -> Option<CoinFace> {
    let mut elapsed = Duration::ZERO;
    for _ in 0..10_000 {
        elapsed += STEP;
        if let Some(face) = coin.advance_to(elapsed) {
            return Some(face);
        }
    }
    None
}

/// Step a spinning bottle frame by frame until it stops
#[allow(dead_code)]
pub fn settle_spin(bottle: &mut BottleSpin) -> Option<SpinResult> {
    let mut elapsed = Duration::ZERO;
    for _ in 0..10_000 {
        elapsed += STEP;
        if let Some(result) = bottle.advance_to(elapsed) {
            return Some(result);
        }
    }
    None
}
