/// Shared constants for the coin toss and bottle spin games
///
/// This module centralizes the animation timings and geometry so the engine,
/// the terminal views and the tests agree on the same numbers.

/// Duration of the coin's upward travel in milliseconds
pub const COIN_RISE_MS: u64 = 800;

/// Duration of the coin's fall back to rest in milliseconds
pub const COIN_FALL_MS: u64 = 800;

/// Duration of the settle phase that turns the coin to its final face
///
/// Short enough to read as the coin landing, not as a second flip.
pub const COIN_SETTLE_MS: u64 = 250;

/// Peak vertical displacement of the coin (negative is up)
pub const COIN_RISE_HEIGHT: f32 = -400.0;

/// Peak X-axis tilt during the flight, in degrees
pub const COIN_TILT_DEGREES: f32 = 30.0;

/// Default inclusive range for the number of full flips per toss
pub const DEFAULT_MIN_FLIPS: u32 = 4;
pub const DEFAULT_MAX_FLIPS: u32 = 7;

/// Default bottle spin duration in milliseconds (3 seconds)
pub const DEFAULT_SPIN_DURATION_MS: u64 = 3_000;

/// Default number of whole turns added to every spin
///
/// 5 turns = 1800 degrees, enough to read as continuous spinning.
pub const DEFAULT_SPIN_EXTRA_TURNS: u32 = 5;

/// Maximum random offset (either direction) added to a spin target, in degrees
pub const SPIN_JITTER_DEGREES: f32 = 10.0;

/// Default frame tick period in milliseconds (~60 fps)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Names sit on a circle whose radius is this fraction of the container's
/// smaller dimension
pub const NAME_CIRCLE_RADIUS_DIVISOR: f32 = 3.0;

/// Guidance shown when a spin is requested with no players
pub const NO_PLAYERS_NOTICE: &str = "Please add player names first";

/// Add-names dialog copy
pub const ADD_NAMES_TITLE: &str = "Add Player Names";
pub const ADD_NAMES_PROMPT: &str = "Enter names separated by commas";
