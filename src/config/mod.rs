//! Configuration system for salah-cli.
//!
//! Settings live in a single JSON file at an OS-conventional location
//! (`$XDG_CONFIG_HOME/salah-cli/config.json` on Unix-likes,
//! `%APPDATA%\salah-cli\config.json` on Windows). The file is decoded
//! strictly (unknown keys are a hard error) and validated before any
//! command acts on it. Persistence goes through a temp-file-then-rename
//! sequence so the on-disk config is never partially written.
//!
//! ## Configuration structure
//!
//! ```json
//! {
//!   "latitude": 51.5,
//!   "longitude": -0.12,
//!   "method": 6,
//!   "madhab": 0,
//!   "fajr_angle": 18.0,
//!   "isha_interval": 90,
//!   "high_latitude_rule": 0,
//!   "adjustments": { "fajr": 2, "dhuhr": 1 },
//!   "enable_countdown": true,
//!   "enable_highlighting": true,
//!   "highlight_colour": "green"
//! }
//! ```
//!
//! Only `latitude` and `longitude` are required. Every calculation field is
//! an override: when absent, the calculation method's own defaults apply
//! (see the `params` module). `isha_angle` and `isha_interval` are mutually
//! exclusive ways of specifying Isha and never appear together.

pub mod loading;
pub mod saving;
pub mod setup;
pub mod validation;

use serde::{Deserialize, Serialize};

// Re-export public API
pub use loading::{EnvLookup, ProcessEnv, config_path, config_path_in, load, load_from_path};
pub use saving::save_config;
pub use setup::interactive_setup;
pub use validation::validate_config;


/// User settings loaded from `config.json`.
///
/// Loaded once per CLI invocation and never mutated afterwards within a
/// single run; `setup` is the only writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Geographic latitude in degrees (-90 to +90).
    pub latitude: f64,
    /// Geographic longitude in degrees (-180 to +180).
    pub longitude: f64,

    /// Calculation method code (see `params::build_calculation_params`).
    /// Defaults to Moon Sighting Committee when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<u8>,
    /// Fajr twilight angle override, in degrees below the horizon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fajr_angle: Option<f64>,
    /// Isha twilight angle override. Mutually exclusive with `isha_interval`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isha_angle: Option<f64>,
    /// Fixed minutes after Maghrib for Isha. Mutually exclusive with `isha_angle`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isha_interval: Option<i32>,
    /// Juristic method for Asr: 0 Shafi/Hanbali/Maliki, 1 Hanafi.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub madhab: Option<u8>,
    /// High latitude rule code: 0 middle of the night, 1 seventh of the
    /// night, 2 twilight angle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_latitude_rule: Option<u8>,
    /// Per-prayer minute offsets applied after base calculation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustments: Option<Adjustments>,
    /// Method-specific minute offsets (kept separate from `adjustments`,
    /// mirroring the calculation library's parameter object).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_adjustments: Option<Adjustments>,

    // Display preferences
    #[serde(default)]
    pub enable_countdown: bool,
    #[serde(default)]
    pub enable_highlighting: bool,
    /// Palette colour name used when highlighting is enabled; empty means
    /// the default (green).
    #[serde(default)]
    pub highlight_colour: String,
}

/// Per-event minute offsets. Fields default to zero when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Adjustments {
    pub fajr: i64,
    pub sunrise: i64,
    pub dhuhr: i64,
    pub asr: i64,
    pub maghrib: i64,
    pub isha: i64,
}
