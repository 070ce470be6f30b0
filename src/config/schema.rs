use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::PhysicalConstants;

/// Top-level configuration.
///
/// Example YAML:
/// ```yaml
/// bodies:
///   - name: Earth
///     target: earth
///   - name: Europa
///     target: "502"
///     center: "@jupiter"
/// range:
///   start: 2025-01-01
///   stop: 2025-02-01
///   step: 1d
/// output: data/life_map_combined.csv
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Bodies to score, processed and concatenated in this order.
    pub bodies: Vec<BodyConfig>,

    /// Time range shared by all bodies.
    pub range: TimeRange,

    /// Physical constants for the transforms (defaults to the reference
    /// values when omitted).
    #[serde(default)]
    pub constants: PhysicalConstants,

    /// Where the unified dataset CSV is written and read back from.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Listen address for the `serve` subcommand.
    #[serde(default = "default_serve_addr")]
    pub serve_addr: String,
}

fn default_output() -> PathBuf {
    PathBuf::from("data/life_map_combined.csv")
}

fn default_serve_addr() -> String {
    "127.0.0.1:8080".to_string()
}

/// One celestial body to fetch and score.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    /// Display name used to tag rows ("Earth", "Europa", ...).
    pub name: String,

    /// Horizons COMMAND value: a name ("earth") or NAIF ID ("502").
    pub target: String,

    /// Horizons CENTER value ("@sun", "@jupiter", ...).
    #[serde(default = "default_center")]
    pub center: String,
}

fn default_center() -> String {
    "@sun".to_string()
}

/// Shared ephemeris time range.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TimeRange {
    pub start: NaiveDate,
    pub stop: NaiveDate,

    /// Step size in humantime syntax ("1d", "6h", "30m").
    pub step: String,
}

impl TimeRange {
    /// Start of range as a UTC timestamp (midnight).
    pub fn start_datetime(&self) -> DateTime<Utc> {
        self.start
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc()
    }

    /// Parse the configured step size.
    pub fn step_duration(&self) -> Result<std::time::Duration, String> {
        humantime::parse_duration(&self.step)
            .map_err(|e| format!("invalid step '{}': {}", self.step, e))
    }

    /// Step size in the form Horizons expects ("1 d", "6 h", "30 m").
    pub fn horizons_step(&self) -> Result<String, String> {
        let secs = self.step_duration()?.as_secs();
        if secs == 0 {
            return Err(format!("invalid step '{}': must be positive", self.step));
        }
        if secs % 86_400 == 0 {
            Ok(format!("{} d", secs / 86_400))
        } else if secs % 3_600 == 0 {
            Ok(format!("{} h", secs / 3_600))
        } else {
            Ok(format!("{} m", (secs / 60).max(1)))
        }
    }
}
