use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 480;

/// Period of the inactivity and clock timers.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);
/// Period of the input / animation / redraw loop.
pub const FRAME_PERIOD: Duration = Duration::from_millis(33);

pub const SCREEN_TIMEOUT_MS: u64 = 120_000;
pub const CLOCK_STEP: Duration = Duration::from_millis(60_000);

pub const PULSE_HALF_PERIOD: Duration = Duration::from_millis(600);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read settings file '{0}': {1}")]
    Read(String, #[source] std::io::Error),
    #[error("Could not parse settings file '{0}': {1}")]
    Parse(String, #[source] serde_json::Error),
    #[error("Clock start {0:02}:{1:02} is not a valid time of day")]
    InvalidClockStart(u8, u8),
    #[error("Screen timeout must be greater than zero")]
    ZeroTimeout,
    #[error("Simulator scale must be at least 1")]
    ZeroScale,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockStart {
    pub hour: u8,
    pub minute: u8,
}

impl Default for ClockStart {
    fn default() -> Self {
        Self {
            hour: 21,
            minute: 34,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub screen_timeout_ms: u64,
    pub clock_start: ClockStart,
    /// Simulator pixel scale
    pub scale: u32,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_timeout_ms: SCREEN_TIMEOUT_MS,
            clock_start: ClockStart::default(),
            scale: 1,
            title: "Home Panel".to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let name = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read(name.clone(), e))?;
        Self::from_json(&raw).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(name, inner),
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse("<inline>".into(), e))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ClockStart { hour, minute } = self.clock_start;
        if hour > 23 || minute > 59 {
            return Err(ConfigError::InvalidClockStart(hour, minute));
        }
        if self.screen_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        Ok(())
    }

    pub fn screen_timeout(&self) -> Duration {
        Duration::from_millis(self.screen_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = Settings::from_json(r#"{ "scale": 2 }"#).unwrap();
        assert_eq!(settings.scale, 2);
        assert_eq!(settings.screen_timeout(), Duration::from_millis(120_000));
        assert_eq!(settings.clock_start, ClockStart { hour: 21, minute: 34 });
    }

    #[test]
    fn rejects_invalid_clock_start() {
        let err = Settings::from_json(r#"{ "clock_start": { "hour": 24, "minute": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClockStart(24, 0)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = Settings::from_json(r#"{ "screen_timeout_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }

    #[test]
    fn rejects_zero_scale() {
        let err = Settings::from_json(r#"{ "scale": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroScale));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Settings::from_json("{ scale: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}
