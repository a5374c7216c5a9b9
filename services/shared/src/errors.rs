/// Shared error types for the games
///
/// The taxonomy is small; nothing here is an I/O failure.
/// - Guidance: the user asked for something that needs more input first
/// - Busy: an animation is already running, the request is ignored
/// - Validation: a primitive could not be constructed
/// - Internal: startup problems such as bad configuration
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::NO_PLAYERS_NOTICE;
use crate::types::ValidationError;

/// Error categories that map to how the UI reacts and the log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Shown to the user as a notice, state does not change
    Guidance,

    /// Silently rejected, the trigger is already disabled
    Busy,

    /// Input could not be turned into a domain value
    Validation,

    /// Unexpected failures, configuration problems
    Internal,
}

impl ErrorCategory {
    /// Map error category to log level
    pub fn log_level(&self) -> &'static str {
        match self {
            ErrorCategory::Guidance => "info",
            ErrorCategory::Busy => "debug",
            ErrorCategory::Validation => "warn",
            ErrorCategory::Internal => "error",
        }
    }

    /// Whether the error should surface in the view's notice line
    pub fn is_user_visible(&self) -> bool {
        matches!(self, ErrorCategory::Guidance | ErrorCategory::Validation)
    }
}

/// Standard error codes used across the workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    pub const GUIDANCE_NO_PLAYERS: ErrorCode = ErrorCode("GUIDANCE_NO_PLAYERS");
    pub const BUSY_ANIMATION_IN_FLIGHT: ErrorCode = ErrorCode("BUSY_ANIMATION_IN_FLIGHT");
    pub const VALIDATION_INVALID_INPUT: ErrorCode = ErrorCode("VALIDATION_INVALID_INPUT");
    pub const INTERNAL_CONFIGURATION: ErrorCode = ErrorCode("INTERNAL_CONFIGURATION");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("{}", NO_PLAYERS_NOTICE)]
    NoPlayers,

    #[error("An animation is already running")]
    AnimationInFlight,

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GameError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::NoPlayers => ErrorCategory::Guidance,
            GameError::AnimationInFlight => ErrorCategory::Busy,
            GameError::Validation(_) => ErrorCategory::Validation,
            GameError::Configuration(_) => ErrorCategory::Internal,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::NoPlayers => ErrorCode::GUIDANCE_NO_PLAYERS,
            GameError::AnimationInFlight => ErrorCode::BUSY_ANIMATION_IN_FLIGHT,
            GameError::Validation(_) => ErrorCode::VALIDATION_INVALID_INPUT,
            GameError::Configuration(_) => ErrorCode::INTERNAL_CONFIGURATION,
        }
    }

    /// Text for the view's notice line, if the user should see this error
    pub fn notice(&self) -> Option<String> {
        self.category().is_user_visible().then(|| self.to_string())
    }
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, GameError>;
