//! Configuration validation.
//!
//! Catches semantic errors a strict JSON decode cannot: out-of-range
//! coordinates, colours outside the highlight palette, and conflicting Isha
//! specifications. Run on every load and before every save.

use anyhow::{Result, bail};

use super::Config;
use crate::display::{colour_code, colour_names};

pub fn validate_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        bail!("latitude must be between -90 and 90 degrees (got {latitude})");
    }
    Ok(())
}

pub fn validate_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        bail!("longitude must be between -180 and 180 degrees (got {longitude})");
    }
    Ok(())
}

/// Check the configuration for semantic errors.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_latitude(config.latitude)?;
    validate_longitude(config.longitude)?;

    // The colour only matters when highlighting is on; a disabled config may
    // carry any value.
    if config.enable_highlighting
        && !config.highlight_colour.is_empty()
        && colour_code(&config.highlight_colour).is_none()
    {
        bail!(
            "invalid highlight colour '{}'. Allowed: {}",
            config.highlight_colour,
            colour_names().join(", ")
        );
    }

    if config.isha_angle.is_some() && config.isha_interval.is_some() {
        bail!("only one of isha_angle or isha_interval can be set");
    }

    Ok(())
}
