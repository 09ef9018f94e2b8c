//! Translation of user configuration into calculation parameters.
//!
//! Builds the `salah` crate's [`Parameters`] from a loaded [`Config`]:
//! start from the configured method's preset (Moon Sighting Committee when
//! none is configured), then overwrite only the fields the user explicitly
//! set. Absent fields keep the method's built-in defaults.

use anyhow::{Result, bail};
use salah::prelude::{
    Configuration, HighLatitudeRule, Madhab, Method, Parameters, TimeAdjustment,
};

use crate::config::{Adjustments, Config};

/// Build the library's calculation parameters from the loaded config.
///
/// Method codes: 0 Other, 1 Muslim World League, 2 Egyptian, 3 Karachi,
/// 4 Umm al-Qura, 5 Dubai, 6 Moon Sighting Committee, 7 North America
/// (ISNA), 8 Kuwait, 9 Qatar, 10 Singapore, 11 UOIF.
pub fn build_calculation_params(config: &Config) -> Result<Parameters> {
    let madhab = match config.madhab {
        None | Some(0) => Madhab::Shafi,
        Some(1) => Madhab::Hanafi,
        Some(other) => bail!("unsupported madhab code {other} (expected 0 or 1)"),
    };

    let mut params = match config.method {
        None => Configuration::with(Method::MoonsightingCommittee, madhab),
        Some(code) => method_params(code, madhab)?,
    };

    if let Some(angle) = config.fajr_angle {
        params.fajr_angle = angle;
    }
    if let Some(angle) = config.isha_angle {
        params.isha_angle = angle;
    }
    if let Some(interval) = config.isha_interval {
        params.isha_interval = interval;
    }
    if let Some(rule) = config.high_latitude_rule {
        params.high_latitude_rule = match rule {
            0 => HighLatitudeRule::MiddleOfTheNight,
            1 => HighLatitudeRule::SeventhOfTheNight,
            2 => HighLatitudeRule::TwilightAngle,
            other => bail!("unsupported high latitude rule code {other} (expected 0-2)"),
        };
    }
    if let Some(adjustments) = config.adjustments {
        params.adjustments = time_adjustment(adjustments);
    }
    if let Some(adjustments) = config.method_adjustments {
        params.method_adjustments = time_adjustment(adjustments);
    }

    Ok(params)
}

/// Preset parameters for a numeric method code.
fn method_params(code: u8, madhab: Madhab) -> Result<Parameters> {
    let method = match code {
        0 => Method::Other,
        1 => Method::MuslimWorldLeague,
        2 => Method::Egyptian,
        3 => Method::Karachi,
        4 => Method::UmmAlQura,
        5 => Method::Dubai,
        6 => Method::MoonsightingCommittee,
        7 => Method::NorthAmerica,
        8 => Method::Kuwait,
        9 => Method::Qatar,
        10 => Method::Singapore,
        11 => {
            // UOIF is not a named preset in the library; its published
            // convention is 12 degree twilight angles for both Fajr and Isha.
            let mut params = Parameters::new(12.0, 12.0);
            params.madhab = madhab;
            return Ok(params);
        }
        other => bail!("unsupported calculation method code {other} (expected 0-11)"),
    };

    Ok(Configuration::with(method, madhab))
}

fn time_adjustment(adjustments: Adjustments) -> TimeAdjustment {
    TimeAdjustment::new(
        adjustments.fajr,
        adjustments.sunrise,
        adjustments.dhuhr,
        adjustments.asr,
        adjustments.maghrib,
        adjustments.isha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            latitude: 51.5,
            longitude: -0.12,
            method: None,
            fajr_angle: None,
            isha_angle: None,
            isha_interval: None,
            madhab: None,
            high_latitude_rule: None,
            adjustments: None,
            method_adjustments: None,
            enable_countdown: false,
            enable_highlighting: false,
            highlight_colour: String::new(),
        }
    }

    #[test]
    fn defaults_to_moon_sighting_committee() {
        let params = build_calculation_params(&base_config()).unwrap();
        assert_eq!(params.method, Method::MoonsightingCommittee);
        assert_eq!(params.madhab, Madhab::Shafi);
    }

    #[test]
    fn configured_method_is_used() {
        let mut config = base_config();
        config.method = Some(1);
        let params = build_calculation_params(&config).unwrap();
        assert_eq!(params.method, Method::MuslimWorldLeague);
    }

    #[test]
    fn all_overrides_apply() {
        let mut config = base_config();
        config.method = Some(2);
        config.fajr_angle = Some(18.5);
        config.isha_angle = Some(17.0);
        config.isha_interval = Some(90);
        config.madhab = Some(1);
        config.high_latitude_rule = Some(0);
        let adjustments = Adjustments {
            fajr: 2,
            dhuhr: 1,
            ..Default::default()
        };
        config.adjustments = Some(adjustments);
        config.method_adjustments = Some(adjustments);

        let params = build_calculation_params(&config).unwrap();
        assert_eq!(params.method, Method::Egyptian);
        assert_eq!(params.fajr_angle, 18.5);
        assert_eq!(params.isha_angle, 17.0);
        assert_eq!(params.isha_interval, 90);
        assert_eq!(params.madhab, Madhab::Hanafi);
        assert_eq!(
            params.high_latitude_rule,
            HighLatitudeRule::MiddleOfTheNight
        );
        assert_eq!(params.adjustments.fajr, 2);
        assert_eq!(params.adjustments.dhuhr, 1);
        assert_eq!(params.adjustments.asr, 0);
        assert_eq!(params.method_adjustments.fajr, 2);
    }

    #[test]
    fn partial_overrides_leave_method_defaults_alone() {
        let mut config = base_config();
        config.fajr_angle = Some(19.0);
        config.high_latitude_rule = Some(1);

        let params = build_calculation_params(&config).unwrap();
        assert_eq!(params.method, Method::MoonsightingCommittee);
        assert_eq!(params.fajr_angle, 19.0);
        assert_eq!(
            params.high_latitude_rule,
            HighLatitudeRule::SeventhOfTheNight
        );
    }

    #[test]
    fn uoif_code_maps_to_twelve_degree_angles() {
        let mut config = base_config();
        config.method = Some(11);
        let params = build_calculation_params(&config).unwrap();
        assert_eq!(params.fajr_angle, 12.0);
        assert_eq!(params.isha_angle, 12.0);
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        let mut config = base_config();
        config.method = Some(12);
        assert!(build_calculation_params(&config).is_err());

        let mut config = base_config();
        config.madhab = Some(2);
        assert!(build_calculation_params(&config).is_err());

        let mut config = base_config();
        config.high_latitude_rule = Some(3);
        assert!(build_calculation_params(&config).is_err());
    }
}
