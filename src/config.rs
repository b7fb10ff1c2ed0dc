//! Converter configuration.
//!
//! Conversion behavior is configured once and never mutated afterwards.
//! [`ConverterConfig`] carries the default time offset applied when values
//! without timezone information must be given one (MySQL replicates
//! `TIMESTAMP` values in UTC, so UTC is the default), and the policy for
//! values whose shape is not recognized.

use std::collections::HashMap;

use chrono::{FixedOffset, Offset, Utc};
use thiserror::Error;

/// Property key for the default time offset.
pub const TIME_OFFSET_KEY: &str = "time.offset";

/// Property key for the unknown-data policy.
pub const UNKNOWN_DATA_MODE_KEY: &str = "unknown.data.mode";

/// Errors raised while parsing converter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The time offset string is not `UTC` or `±HH:MM`.
    #[error("invalid time offset '{0}': expected 'UTC' or '+HH:MM'")]
    InvalidOffset(String),

    /// The unknown-data mode string is not a known policy name.
    #[error("invalid unknown-data mode '{0}': expected 'warn' or 'skip'")]
    InvalidMode(String),
}

/// Policy for values whose shape matches no expected representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownDataMode {
    /// Log a warning naming the column and shape, then emit `NULL`.
    #[default]
    Warn,

    /// Emit `NULL` silently.
    Skip,
}

impl std::str::FromStr for UnknownDataMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "warn" => Ok(Self::Warn),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for UnknownDataMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnknownDataMode::Warn => write!(f, "warn"),
            UnknownDataMode::Skip => write!(f, "skip"),
        }
    }
}

/// Immutable converter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Offset applied when a value without timezone information must be
    /// converted to one that requires it.
    pub default_time_offset: FixedOffset,

    /// Policy for unrecognized value shapes.
    pub unknown_data_mode: UnknownDataMode,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_time_offset: Utc.fix(),
            unknown_data_mode: UnknownDataMode::Warn,
        }
    }
}

impl ConverterConfig {
    /// Builds a configuration from string properties.
    ///
    /// Recognized keys are [`TIME_OFFSET_KEY`] and
    /// [`UNKNOWN_DATA_MODE_KEY`]; absent keys keep their defaults and
    /// unrelated keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a recognized key has an invalid value.
    pub fn from_properties(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = props.get(TIME_OFFSET_KEY) {
            config.default_time_offset = parse_offset(raw)?;
        }
        if let Some(raw) = props.get(UNKNOWN_DATA_MODE_KEY) {
            config.unknown_data_mode = raw.parse()?;
        }

        Ok(config)
    }
}

/// Parses `"UTC"`, `"Z"`, or a `±HH:MM` offset string.
fn parse_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }

    let err = || ConfigError::InvalidOffset(raw.to_string());

    let (sign, rest) = if let Some(rest) = raw.strip_prefix('+') {
        (1_i32, rest)
    } else if let Some(rest) = raw.strip_prefix('-') {
        (-1_i32, rest)
    } else {
        return Err(err());
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(err)?;
    let hours: i32 = hours.parse().map_err(|_| err())?;
    let minutes: i32 = minutes.parse().map_err(|_| err())?;
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(err());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_default_config_is_utc_warn() {
        let config = ConverterConfig::default();
        assert_eq!(config.default_time_offset.local_minus_utc(), 0);
        assert_eq!(config.unknown_data_mode, UnknownDataMode::Warn);
    }

    #[test]
    fn test_from_properties_empty_keeps_defaults() {
        let config = ConverterConfig::from_properties(&HashMap::new()).unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_from_properties_parses_offset() {
        let config =
            ConverterConfig::from_properties(&props(&[(TIME_OFFSET_KEY, "+05:30")])).unwrap();
        assert_eq!(
            config.default_time_offset.local_minus_utc(),
            5 * 3600 + 30 * 60
        );

        let config =
            ConverterConfig::from_properties(&props(&[(TIME_OFFSET_KEY, "-08:00")])).unwrap();
        assert_eq!(config.default_time_offset.local_minus_utc(), -8 * 3600);
    }

    #[test]
    fn test_from_properties_accepts_utc_spellings() {
        for raw in ["UTC", "utc", "Z", "z"] {
            let config =
                ConverterConfig::from_properties(&props(&[(TIME_OFFSET_KEY, raw)])).unwrap();
            assert_eq!(config.default_time_offset.local_minus_utc(), 0);
        }
    }

    #[test]
    fn test_from_properties_rejects_bad_offsets() {
        for raw in ["", "5:30", "+5", "+aa:00", "+15:00", "+02:75"] {
            let result = ConverterConfig::from_properties(&props(&[(TIME_OFFSET_KEY, raw)]));
            assert!(result.is_err(), "offset '{raw}' should be rejected");
        }
    }

    #[test]
    fn test_from_properties_parses_mode() {
        let config =
            ConverterConfig::from_properties(&props(&[(UNKNOWN_DATA_MODE_KEY, "skip")])).unwrap();
        assert_eq!(config.unknown_data_mode, UnknownDataMode::Skip);

        let config =
            ConverterConfig::from_properties(&props(&[(UNKNOWN_DATA_MODE_KEY, "WARN")])).unwrap();
        assert_eq!(config.unknown_data_mode, UnknownDataMode::Warn);
    }

    #[test]
    fn test_from_properties_rejects_bad_mode() {
        let result = ConverterConfig::from_properties(&props(&[(UNKNOWN_DATA_MODE_KEY, "fail")]));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("fail"));
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let config =
            ConverterConfig::from_properties(&props(&[("some.other.key", "x")])).unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [UnknownDataMode::Warn, UnknownDataMode::Skip] {
            let parsed: UnknownDataMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }
}
