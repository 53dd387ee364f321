use std::time::Duration;

use super::controller::{PlaybackError, validate_interval};
use crate::domain::presets;

/// Size and fill of the random soup behind the Random action.
#[derive(Debug, Clone, PartialEq)]
pub struct SoupConfig {
    pub width: u32,
    pub height: u32,
    /// Probability that each cell starts alive
    pub density: f64,
}

impl Default for SoupConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            density: 0.3,
        }
    }
}

/// Startup settings for a playback session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Time between generations while playing
    pub interval: Duration,
    /// Preset loaded at startup, by display name
    pub initial_pattern: String,
    pub start_playing: bool,
    pub soup: SoupConfig,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            initial_pattern: "Gosper glider gun".to_owned(),
            start_playing: true,
            soup: SoupConfig::default(),
        }
    }
}

impl PlaybackConfig {
    /// Generations per second implied by `interval`
    pub fn steps_per_second(&self) -> f64 {
        1.0 / self.interval.as_secs_f64()
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_interval(self.interval)?;
        if presets::find(&self.initial_pattern).is_none() {
            return Err(ConfigError::UnknownPattern(self.initial_pattern.clone()));
        }
        if self.soup.width == 0 || self.soup.height == 0 {
            return Err(ConfigError::InvalidSoupSize);
        }
        if !(0.0..=1.0).contains(&self.soup.density) {
            return Err(ConfigError::InvalidSoupDensity(self.soup.density));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid playback interval: {0}")]
    Interval(#[from] PlaybackError),
    #[error("Unknown starting pattern {0:?}")]
    UnknownPattern(String),
    #[error("Soup dimensions must be non-zero")]
    InvalidSoupSize,
    #[error("Soup density must be within [0, 1], got {0}")]
    InvalidSoupDensity(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PlaybackConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!((config.steps_per_second() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = PlaybackConfig {
            interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Interval(PlaybackError::NonPositiveInterval))
        );
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        let config = PlaybackConfig {
            initial_pattern: "Unicorn".to_owned(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::UnknownPattern("Unicorn".to_owned())));
    }

    #[test]
    fn test_bad_soup_rejected() {
        let mut config = PlaybackConfig::default();
        config.soup.width = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSoupSize));

        config.soup.width = 10;
        config.soup.density = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSoupDensity(1.5)));

        config.soup.density = f64::NAN;
        assert!(config.validate().is_err());
    }
}
