//! Actuator configuration parser
//!
//! A minimal TOML subset, enough for `actuator.toml`:
//! - `[section]` headers
//! - `key = value` pairs (string, integer, boolean)
//! - Comments (`# ...`), including trailing comments
//!
//! Keys that are not present keep their defaults. Anything else is an error,
//! so a typo in the file does not silently fall back to a default.

use traverse_protocol::Station;

use super::types::ActuatorConfig;
use crate::motion::Position;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Values are individually valid but cannot be used together
    Inconsistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Motion,
    Drive,
    Estop,
    Indicator,
}

/// Parse configuration text into an `ActuatorConfig`
pub fn parse_config(input: &str) -> Result<ActuatorConfig, ConfigError> {
    let mut config = ActuatorConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(strip_comment(line))?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    validate(&config)?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    let name = header
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .ok_or(ConfigError::InvalidSection)?;

    match name.trim() {
        "motion" => Ok(Section::Motion),
        "drive" => Ok(Section::Drive),
        "estop" => Ok(Section::Estop),
        "indicator" => Ok(Section::Indicator),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ActuatorConfig,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Motion, "a_to_b_ms") => config.motion.a_to_b_ms = parse_int(value)?,
        (Section::Motion, "b_to_a_ms") => config.motion.b_to_a_ms = parse_int(value)?,
        (Section::Motion, "buffer_ms") => config.motion.buffer_ms = parse_int(value)?,
        (Section::Motion, "progress_interval_ms") => {
            config.motion.progress_interval_ms = parse_int(value)?
        }
        (Section::Motion, "default_position") => {
            config.motion.default_position = parse_position(value)?
        }
        (Section::Motion, "home") => config.motion.home = parse_station(value)?,
        (Section::Drive, "duty_percent") => config.drive.duty_percent = parse_int(value)?,
        (Section::Estop, "active_low") => config.estop.active_low = parse_bool(value)?,
        (Section::Indicator, "flash_half_period_ms") => {
            config.indicator.flash_half_period_ms = parse_int(value)?
        }
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

fn validate(config: &ActuatorConfig) -> Result<(), ConfigError> {
    if config.motion.a_to_b_ms == 0 || config.motion.b_to_a_ms == 0 {
        return Err(ConfigError::InvalidValue);
    }
    if config.drive.duty_percent == 0 || config.drive.duty_percent > 100 {
        return Err(ConfigError::InvalidValue);
    }
    // A full leg plus buffer must fit comfortably in the u32 tick clock
    let longest = config.motion.a_to_b_ms.max(config.motion.b_to_a_ms);
    match longest.checked_add(config.motion.buffer_ms) {
        Some(ms) if ms <= u32::MAX / 2 => {}
        _ => return Err(ConfigError::Inconsistent),
    }
    Ok(())
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(pos) if text[..pos].matches('"').count() % 2 == 0 => text[..pos].trim(),
        _ => text,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = strip_comment(value.trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (quotes optional)
fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse an integer value, allowing `_` digit separators
fn parse_int<T: TryFrom<u64>>(value: &str) -> Result<T, ConfigError> {
    let mut acc: u64 = 0;
    let mut digits = 0;

    for c in value.chars() {
        match c {
            '_' if digits > 0 => {}
            '0'..='9' => {
                acc = acc
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(c as u8 - b'0')))
                    .ok_or(ConfigError::InvalidValue)?;
                digits += 1;
            }
            _ => return Err(ConfigError::InvalidValue),
        }
    }

    if digits == 0 {
        return Err(ConfigError::InvalidValue);
    }

    T::try_from(acc).map_err(|_| ConfigError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_station(value: &str) -> Result<Station, ConfigError> {
    let value = parse_string(value);
    Station::ALL
        .into_iter()
        .find(|s| value.eq_ignore_ascii_case(s.as_str()))
        .ok_or(ConfigError::InvalidValue)
}

fn parse_position(value: &str) -> Result<Position, ConfigError> {
    if parse_string(value).eq_ignore_ascii_case("unknown") {
        return Ok(Position::Unknown);
    }
    parse_station(value).map(Position::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Bench actuator
[motion]
a_to_b_ms = 12_500
b_to_a_ms = 11000   # retract is faster
buffer_ms = 1500
progress_interval_ms = 0
default_position = "unknown"
home = "b"

[drive]
duty_percent = 80

[estop]
active_low = false

[indicator]
flash_half_period_ms = 500
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.motion.a_to_b_ms, 12_500);
        assert_eq!(config.motion.b_to_a_ms, 11_000);
        assert_eq!(config.motion.buffer_ms, 1_500);
        assert_eq!(config.motion.progress_interval_ms, 0);
        assert_eq!(config.motion.default_position, Position::Unknown);
        assert_eq!(config.motion.home, Station::B);
        assert_eq!(config.drive.duty_percent, 80);
        assert!(!config.estop.active_low);
        assert_eq!(config.indicator.flash_half_period_ms, 500);
    }

    #[test]
    fn test_empty_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), ActuatorConfig::default());
        assert_eq!(
            parse_config("# nothing here\n\n[motion]\n").unwrap(),
            ActuatorConfig::default()
        );
    }

    #[test]
    fn test_partial_keeps_defaults() {
        let config = parse_config("[drive]\nduty_percent = 60\n").unwrap();
        assert_eq!(config.drive.duty_percent, 60);
        assert_eq!(config.motion, ActuatorConfig::default().motion);
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(parse_config("[stepper]\n"), Err(ConfigError::InvalidSection));
        assert_eq!(parse_config("[motion\n"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[motion]\nspeed = 3\n"),
            Err(ConfigError::UnknownKey)
        );
        // Valid key in the wrong section
        assert_eq!(
            parse_config("[drive]\nbuffer_ms = 3\n"),
            Err(ConfigError::UnknownKey)
        );
        // Keys before any section
        assert_eq!(parse_config("buffer_ms = 3\n"), Err(ConfigError::UnknownKey));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[motion]\na_to_b_ms = -1\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[motion]\nhome = \"unknown\"\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[estop]\nactive_low = yes\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[drive]\nduty_percent = 300\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(parse_config("[drive]\nduty_percent\n"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_range_checks() {
        assert_eq!(
            parse_config("[drive]\nduty_percent = 0\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[drive]\nduty_percent = 101\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[motion]\nb_to_a_ms = 0\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[motion]\na_to_b_ms = 4000000000\n"),
            Err(ConfigError::Inconsistent)
        );
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int::<u32>("12000"), Ok(12_000));
        assert_eq!(parse_int::<u32>("12_000"), Ok(12_000));
        assert_eq!(parse_int::<u8>("256"), Err(ConfigError::InvalidValue));
        assert_eq!(parse_int::<u32>("_1"), Err(ConfigError::InvalidValue));
        assert_eq!(parse_int::<u32>("1.5"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_position_values() {
        assert_eq!(parse_position("a"), Ok(Position::A));
        assert_eq!(parse_position("\"B\""), Ok(Position::B));
        assert_eq!(parse_position("Unknown"), Ok(Position::Unknown));
        assert_eq!(parse_position("moving"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("12 # twelve"), "12");
        assert_eq!(strip_comment("\"a#b\""), "\"a#b\"");
    }
}
