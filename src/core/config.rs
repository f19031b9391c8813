//! Game configuration.
//!
//! The only tunable is the board side length, validated once at startup.
//! Everything downstream of `GameConfig` can assume `1 <= N <= 10`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported board side.
pub const MIN_BOARD_SIZE: usize = 1;

/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 10;

/// Validated game configuration.
///
/// Deserialization goes through [`GameConfig::new`], so a snapshot can't
/// carry an out-of-range size.
///
/// ```
/// use samurai_charge::core::GameConfig;
///
/// let config = GameConfig::new(4).unwrap();
/// assert_eq!(config.board_size(), 4);
///
/// assert!(GameConfig::new(0).is_err());
/// assert!(GameConfig::new(11).is_err());
/// assert!("abc".parse::<GameConfig>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    board_size: usize,
}

/// Unvalidated wire form of `GameConfig`.
#[derive(Deserialize)]
struct RawGameConfig {
    board_size: usize,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.board_size)
    }
}

impl GameConfig {
    /// Create a configuration for an N×N board.
    pub fn new(board_size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::BoardSizeOutOfRange {
                size: i64::try_from(board_size).unwrap_or(i64::MAX),
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }

        Ok(Self { board_size })
    }

    /// Board side length N.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    /// Parse N from a command-line argument.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size: i64 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotAnInteger(s.to_string()))?;

        // Negative sizes are range errors, not parse errors.
        let size = usize::try_from(size).map_err(|_| ConfigError::BoardSizeOutOfRange {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })?;

        Self::new(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sizes() {
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            assert_eq!(GameConfig::new(size).unwrap().board_size(), size);
        }
    }

    #[test]
    fn test_size_out_of_range() {
        assert_eq!(
            GameConfig::new(0),
            Err(ConfigError::BoardSizeOutOfRange { size: 0, min: 1, max: 10 })
        );
        assert!(matches!(
            GameConfig::new(11),
            Err(ConfigError::BoardSizeOutOfRange { size: 11, .. })
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!("5".parse::<GameConfig>().unwrap().board_size(), 5);
        assert_eq!(" 10 ".parse::<GameConfig>().unwrap().board_size(), 10);
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert!(matches!(
            "five".parse::<GameConfig>(),
            Err(ConfigError::NotAnInteger(_))
        ));
        assert!(matches!(
            "2.5".parse::<GameConfig>(),
            Err(ConfigError::NotAnInteger(_))
        ));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            "-3".parse::<GameConfig>(),
            Err(ConfigError::BoardSizeOutOfRange { size: -3, .. })
        ));
    }

    #[test]
    fn test_huge_size_is_reported_without_wrapping() {
        assert_eq!(
            GameConfig::new(usize::MAX),
            Err(ConfigError::BoardSizeOutOfRange {
                size: i64::MAX,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            })
        );
    }

    #[test]
    fn test_deserialize_valid() {
        let config: GameConfig = serde_json::from_str(r#"{"board_size":4}"#).unwrap();
        assert_eq!(config.board_size(), 4);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_sizes() {
        for json in [r#"{"board_size":0}"#, r#"{"board_size":11}"#] {
            let err = serde_json::from_str::<GameConfig>(json).unwrap_err();
            assert!(err.to_string().contains("N must be between 1 and 10"), "{}", err);
        }
    }

    #[test]
    fn test_error_messages() {
        let err = GameConfig::new(12).unwrap_err();
        assert_eq!(err.to_string(), "N must be between 1 and 10, got 12");

        let err = "x".parse::<GameConfig>().unwrap_err();
        assert_eq!(err.to_string(), "N must be an integer, got 'x'");
    }
}
