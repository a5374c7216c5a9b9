/// Type-safe wrappers for game primitives
///
/// These types enforce validation at construction time so the roster and the
/// animators never see an empty player name or an out-of-range outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Player name is empty after trimming")]
    EmptyPlayerName,

    #[error("Spin index {index} out of range for {count} players")]
    SpinIndexOutOfRange { index: usize, count: usize },
}

/// A single player's display name
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a PlayerName, trimming the input first
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Width in terminal columns, used to center the label on the circle
    pub fn display_width(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a coin toss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinFace {
    Heads,
    Tails,
}

impl CoinFace {
    pub fn from_heads(is_heads: bool) -> Self {
        if is_heads {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }

    /// Human-readable label shown once the coin settles
    pub fn label(&self) -> &'static str {
        match self {
            CoinFace::Heads => "Heads",
            CoinFace::Tails => "Tails",
        }
    }

    /// Single glyph drawn on the coin
    pub fn glyph(&self) -> char {
        match self {
            CoinFace::Heads => 'H',
            CoinFace::Tails => 'T',
        }
    }

    /// Y rotation (degrees) at which this face points at the viewer
    pub fn canonical_rotation(&self) -> f32 {
        match self {
            CoinFace::Heads => 0.0,
            CoinFace::Tails => 180.0,
        }
    }

    /// Face visible at a given Y rotation
    ///
    /// Heads faces the viewer on [0, 90) and [270, 360); the coin shows its
    /// back (tails) in between.
    pub fn visible_at(rotation_degrees: f32) -> Self {
        let normalized = rotation_degrees.rem_euclid(360.0);
        if (90.0..270.0).contains(&normalized) {
            CoinFace::Tails
        } else {
            CoinFace::Heads
        }
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two games offered by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    CoinToss,
    BottleSpin,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::CoinToss, GameKind::BottleSpin];

    /// Card title in the picker
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::CoinToss => "Coin Toss",
            GameKind::BottleSpin => "Bottle Spin",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            GameKind::CoinToss => "Flip a coin: heads or tails",
            GameKind::BottleSpin => "Spin the bottle to pick a player",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Outcome of a bottle spin
///
/// The name is captured when the index is drawn, so the label stays correct
/// even if the roster is edited while the bottle is still turning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    pub index: usize,
    pub name: PlayerName,
}

impl SpinResult {
    /// Resolve an index against the current names
    pub fn resolve(names: &[PlayerName], index: usize) -> Result<Self, ValidationError> {
        names
            .get(index)
            .map(|name| Self {
                index,
                name: name.clone(),
            })
            .ok_or(ValidationError::SpinIndexOutOfRange {
                index,
                count: names.len(),
            })
    }

    pub fn label(&self) -> String {
        format!("Selected: {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_name_trims() {
        let name = PlayerName::new("  Alice \t").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_player_name_rejects_blank() {
        assert_eq!(PlayerName::new("   "), Err(ValidationError::EmptyPlayerName));
        assert_eq!(PlayerName::new(""), Err(ValidationError::EmptyPlayerName));
    }

    #[test]
    fn test_player_name_deserialize_validates() {
        let ok: PlayerName = serde_json::from_str("\" Bob \"").unwrap();
        assert_eq!(ok.as_str(), "Bob");
        assert!(serde_json::from_str::<PlayerName>("\"  \"").is_err());
    }

    #[test]
    fn test_coin_face_visible_boundaries() {
        assert_eq!(CoinFace::visible_at(0.0), CoinFace::Heads);
        assert_eq!(CoinFace::visible_at(89.9), CoinFace::Heads);
        assert_eq!(CoinFace::visible_at(90.0), CoinFace::Tails);
        assert_eq!(CoinFace::visible_at(269.9), CoinFace::Tails);
        assert_eq!(CoinFace::visible_at(270.0), CoinFace::Heads);
        assert_eq!(CoinFace::visible_at(-90.0), CoinFace::Heads);
        assert_eq!(CoinFace::visible_at(540.0), CoinFace::Tails);
    }

    #[test]
    fn test_canonical_rotation_shows_own_face() {
        for face in [CoinFace::Heads, CoinFace::Tails] {
            assert_eq!(CoinFace::visible_at(face.canonical_rotation()), face);
        }
    }

    #[test]
    fn test_coin_face_serialization() {
        assert_eq!(serde_json::to_string(&CoinFace::Heads).unwrap(), "\"heads\"");
        assert_eq!(serde_json::to_string(&GameKind::BottleSpin).unwrap(), "\"bottle_spin\"");
    }

    #[test]
    fn test_spin_result_resolve() {
        let names = vec![PlayerName::new("a").unwrap(), PlayerName::new("b").unwrap()];
        let result = SpinResult::resolve(&names, 1).unwrap();
        assert_eq!(result.label(), "Selected: b");
        assert!(matches!(
            SpinResult::resolve(&names, 2),
            Err(ValidationError::SpinIndexOutOfRange { index: 2, count: 2 })
        ));
    }
}
