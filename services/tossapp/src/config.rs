use anyhow::Context;
use serde::Deserialize;
use shared::{
    GameError, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_MAX_FLIPS, DEFAULT_MIN_FLIPS,
    DEFAULT_SPIN_DURATION_MS, DEFAULT_SPIN_EXTRA_TURNS,
};
use std::env;
use std::ops::RangeInclusive;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub animation: AnimationConfig,
    pub coin: CoinConfig,
    pub bottle: BottleConfig,
    pub logging: LoggingConfig,
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    pub frame_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinConfig {
    pub min_flips: u32,
    pub max_flips: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BottleConfig {
    pub spin_duration_ms: u64,
    pub extra_turns: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl AnimationConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl CoinConfig {
    pub fn flip_range(&self) -> RangeInclusive<u32> {
        self.min_flips..=self.max_flips
    }
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            min_flips: DEFAULT_MIN_FLIPS,
            max_flips: DEFAULT_MAX_FLIPS,
        }
    }
}

impl BottleConfig {
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }
}

impl Default for BottleConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            extra_turns: DEFAULT_SPIN_EXTRA_TURNS,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: String| lookup(key).unwrap_or(default);

        let format = match var("LOG_FORMAT", "text".to_string()).to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "text" => LogFormat::Text,
            other => {
                return Err(GameError::Configuration(format!(
                    "LOG_FORMAT must be 'text' or 'json', got '{}'",
                    other
                ))
                .into())
            }
        };

        let rng_seed = match lookup("TOSSAPP_RNG_SEED") {
            Some(seed) if !seed.trim().is_empty() => Some(
                seed.trim()
                    .parse()
                    .context("TOSSAPP_RNG_SEED must be an unsigned integer")?,
            ),
            _ => None,
        };

        let config = Config {
            animation: AnimationConfig {
                frame_interval_ms: var(
                    "TOSSAPP_FRAME_INTERVAL_MS",
                    DEFAULT_FRAME_INTERVAL_MS.to_string(),
                )
                .parse()
                .context("TOSSAPP_FRAME_INTERVAL_MS")?,
            },
            coin: CoinConfig {
                min_flips: var("TOSSAPP_MIN_FLIPS", DEFAULT_MIN_FLIPS.to_string())
                    .parse()
                    .context("TOSSAPP_MIN_FLIPS")?,
                max_flips: var("TOSSAPP_MAX_FLIPS", DEFAULT_MAX_FLIPS.to_string())
                    .parse()
                    .context("TOSSAPP_MAX_FLIPS")?,
            },
            bottle: BottleConfig {
                spin_duration_ms: var(
                    "TOSSAPP_SPIN_DURATION_MS",
                    DEFAULT_SPIN_DURATION_MS.to_string(),
                )
                .parse()
                .context("TOSSAPP_SPIN_DURATION_MS")?,
                extra_turns: var(
                    "TOSSAPP_SPIN_EXTRA_TURNS",
                    DEFAULT_SPIN_EXTRA_TURNS.to_string(),
                )
                .parse()
                .context("TOSSAPP_SPIN_EXTRA_TURNS")?,
            },
            logging: LoggingConfig {
                format,
                file: var("TOSSAPP_LOG_FILE", "tossapp.log".to_string()),
            },
            rng_seed,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.animation.frame_interval_ms == 0 {
            return Err(GameError::Configuration(
                "TOSSAPP_FRAME_INTERVAL_MS must be positive".to_string(),
            ));
        }
        if self.coin.min_flips == 0 || self.coin.min_flips > self.coin.max_flips {
            return Err(GameError::Configuration(format!(
                "flip range {}..={} is empty or starts at zero",
                self.coin.min_flips, self.coin.max_flips
            )));
        }
        if self.bottle.spin_duration_ms == 0 {
            return Err(GameError::Configuration(
                "TOSSAPP_SPIN_DURATION_MS must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.animation.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.coin.flip_range(), 4..=7);
        assert_eq!(config.bottle.spin_duration(), Duration::from_secs(3));
        assert_eq!(config.bottle.extra_turns, 5);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.logging.file, "tossapp.log");
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TOSSAPP_MIN_FLIPS", "5"),
            ("TOSSAPP_MAX_FLIPS", "9"),
            ("TOSSAPP_RNG_SEED", "42"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.coin.flip_range(), 5..=9);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_inverted_flip_range_rejected() {
        let result = Config::from_lookup(lookup(&[
            ("TOSSAPP_MIN_FLIPS", "8"),
            ("TOSSAPP_MAX_FLIPS", "3"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_number_rejected() {
        let result = Config::from_lookup(lookup(&[("TOSSAPP_FRAME_INTERVAL_MS", "fast")]));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("TOSSAPP_FRAME_INTERVAL_MS"));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(Config::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).is_err());
    }
}
