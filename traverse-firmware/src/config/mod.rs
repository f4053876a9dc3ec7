//! Configuration loading
//!
//! The actuator configuration is compiled in from `actuator.toml` and
//! parsed once at boot. build.rs has already validated it, so a parse
//! failure here means the two validators disagree; the controller then
//! runs on built-in defaults rather than refusing to start.

use defmt::*;

use traverse_core::config::{parse_config, ActuatorConfig};

/// Embedded configuration (compiled into firmware)
/// Edit actuator.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../actuator.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load() -> ActuatorConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using built-in defaults");
            ActuatorConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &ActuatorConfig) {
    debug!(
        "  travel A->B {} ms, B->A {} ms, buffer {} ms",
        config.motion.a_to_b_ms, config.motion.b_to_a_ms, config.motion.buffer_ms
    );
    debug!(
        "  boot position {:?}, home {:?}",
        config.motion.default_position, config.motion.home
    );
    debug!(
        "  duty {}%, e-stop active_low={}",
        config.drive.duty_percent, config.estop.active_low
    );
}
