//! The two games: each pairs an outcome draw with its animation

mod bottle_spin;
mod coin_toss;

pub use bottle_spin::{BottleRotation, BottleSpin};
pub use coin_toss::{CoinFlight, CoinFrame, CoinToss};
