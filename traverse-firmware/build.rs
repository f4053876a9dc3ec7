//! Build script for traverse-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates actuator.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in each section
const SCHEMA: &[(&str, &[&str])] = &[
    (
        "motion",
        &[
            "a_to_b_ms",
            "b_to_a_ms",
            "buffer_ms",
            "progress_interval_ms",
            "default_position",
            "home",
        ],
    ),
    ("drive", &["duty_percent"]),
    ("estop", &["active_low"]),
    ("indicator", &["flash_half_period_ms"]),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate actuator.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=actuator.toml");

    let config_path = Path::new("actuator.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: actuator.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds actuator.toml at build time.                ║\n\
            ║  Please create one in the traverse-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read actuator.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in actuator.toml                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_schema(&config, &mut errors);
    validate_motion(&config, &mut errors);
    validate_drive(&config, &mut errors);
    validate_estop(&config, &mut errors);
    validate_indicator(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in actuator.toml                   ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=actuator.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reject unknown sections and keys; the firmware parser does the same at
/// boot and would fall back to defaults
fn validate_schema(config: &toml::Value, errors: &mut Vec<String>) {
    let root = match config.as_table() {
        Some(t) => t,
        None => return,
    };

    for (section, body) in root {
        let keys = match SCHEMA.iter().find(|(name, _)| *name == section.as_str()) {
            Some((_, keys)) => keys,
            None => {
                errors.push(format!("unknown section [{}]", section));
                continue;
            }
        };

        let body = match body.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };

        for key in body.keys() {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", section, key));
            }
        }
    }
}

fn get_int(config: &toml::Value, section: &str, key: &str) -> Option<i64> {
    config.get(section)?.get(key)?.as_integer()
}

fn get_str<'a>(config: &'a toml::Value, section: &str, key: &str) -> Option<&'a str> {
    config.get(section)?.get(key)?.as_str()
}

fn check_type(
    config: &toml::Value,
    section: &str,
    key: &str,
    ok: fn(&toml::Value) -> bool,
    what: &str,
    errors: &mut Vec<String>,
) {
    if let Some(value) = config.get(section).and_then(|s| s.get(key)) {
        if !ok(value) {
            errors.push(format!("[{}] {} must be {}", section, key, what));
        }
    }
}

fn validate_motion(config: &toml::Value, errors: &mut Vec<String>) {
    for key in ["a_to_b_ms", "b_to_a_ms", "buffer_ms", "progress_interval_ms"] {
        check_type(config, "motion", key, toml::Value::is_integer, "an integer", errors);
    }

    for key in ["a_to_b_ms", "b_to_a_ms"] {
        if let Some(ms) = get_int(config, "motion", key) {
            if ms <= 0 || ms > 600_000 {
                errors.push(format!("[motion] {} must be 1-600000", key));
            }
        }
    }

    for key in ["buffer_ms", "progress_interval_ms"] {
        if let Some(ms) = get_int(config, "motion", key) {
            if !(0..=600_000).contains(&ms) {
                errors.push(format!("[motion] {} must be 0-600000", key));
            }
        }
    }

    if let Some(pos) = get_str(config, "motion", "default_position") {
        if !["a", "b", "unknown"].contains(&pos.to_ascii_lowercase().as_str()) {
            errors.push("[motion] default_position must be 'a', 'b' or 'unknown'".into());
        }
    }

    if let Some(home) = get_str(config, "motion", "home") {
        if !["a", "b"].contains(&home.to_ascii_lowercase().as_str()) {
            errors.push("[motion] home must be 'a' or 'b'".into());
        }
    }
}

fn validate_drive(config: &toml::Value, errors: &mut Vec<String>) {
    check_type(config, "drive", "duty_percent", toml::Value::is_integer, "an integer", errors);

    if let Some(duty) = get_int(config, "drive", "duty_percent") {
        if !(1..=100).contains(&duty) {
            errors.push("[drive] duty_percent must be 1-100".into());
        }
    }
}

fn validate_estop(config: &toml::Value, errors: &mut Vec<String>) {
    check_type(config, "estop", "active_low", toml::Value::is_bool, "true or false", errors);
}

fn validate_indicator(config: &toml::Value, errors: &mut Vec<String>) {
    check_type(
        config,
        "indicator",
        "flash_half_period_ms",
        toml::Value::is_integer,
        "an integer",
        errors,
    );

    if let Some(ms) = get_int(config, "indicator", "flash_half_period_ms") {
        if !(0..=10_000).contains(&ms) {
            errors.push("[indicator] flash_half_period_ms must be 0-10000".into());
        }
    }
}
