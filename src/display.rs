//! Presentation layer: prayer-time lines, countdowns, ANSI highlighting.
//!
//! Two independent display preferences drive the output: a countdown suffix
//! on the next-prayer announcement and colour highlighting of the active or
//! upcoming prayer. The functions are generic over the chrono timezone so
//! the commands render local wall time while tests drive plain UTC.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::fmt;

use crate::config::Config;
use crate::prayers::{DaySchedule, Prayer, current_prayer};

/// Fixed palette of highlight colour names and their ANSI escape codes.
pub const HIGHLIGHT_COLOURS: [(&str, &str); 8] = [
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
];

const ANSI_RESET: &str = "\x1b[0m";
const FALLBACK_COLOUR: &str = "\x1b[32m"; // green

/// Escape code for a palette colour name, if recognised.
pub fn colour_code(name: &str) -> Option<&'static str> {
    HIGHLIGHT_COLOURS
        .iter()
        .find(|(colour, _)| *colour == name)
        .map(|(_, code)| *code)
}

/// The palette's colour names, for validation error messages.
pub fn colour_names() -> Vec<&'static str> {
    HIGHLIGHT_COLOURS.iter().map(|(colour, _)| *colour).collect()
}

/// Wrap text in the ANSI escape pair for a colour name.
///
/// Unrecognised names fall back to green.
fn highlight(text: &str, colour: &str) -> String {
    let code = colour_code(colour).unwrap_or(FALLBACK_COLOUR);
    format!("{code}{text}{ANSI_RESET}")
}

/// Render the time remaining until `target`.
///
/// Buckets: seconds under a minute, minutes under an hour, hours and minutes
/// beyond that. Renders nothing once the target is at or before `now`.
pub fn format_countdown<Tz: TimeZone>(target: DateTime<Tz>, now: DateTime<Tz>) -> String {
    let remaining = target.signed_duration_since(now);
    if remaining <= Duration::zero() {
        return String::new();
    }

    let total_secs = remaining.num_seconds();
    if total_secs < 60 {
        format!("in {total_secs} sec")
    } else if total_secs < 3600 {
        format!("in {} min", total_secs / 60)
    } else {
        format!("in {} hr {} min", total_secs / 3600, (total_secs % 3600) / 60)
    }
}

/// Render a single next-prayer announcement, e.g. `Maghrib 19:30`.
///
/// With the countdown enabled (and the target still ahead) the remaining
/// time is appended in parentheses followed by a newline; with highlighting
/// enabled the whole rendition is wrapped in the configured colour.
pub fn format_next_prayer<Tz>(
    prayer: Prayer,
    at: DateTime<Tz>,
    now: DateTime<Tz>,
    config: &Config,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut rendered = format!("{} {}", prayer.name(), at.format("%H:%M"));

    if config.enable_countdown {
        let countdown = format_countdown(at, now);
        if !countdown.is_empty() {
            rendered = format!("{rendered} ({countdown})\n");
        }
    }

    if config.enable_highlighting {
        rendered = highlight(&rendered, &config.highlight_colour);
    }

    rendered
}

/// Render a full day's schedule as one pipe-separated line.
///
/// With highlighting enabled, only the segment for the prayer currently in
/// effect is wrapped; the rest of the line stays plain.
pub fn format_day<Tz>(schedule: &DaySchedule, now: DateTime<Tz>, config: &Config) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let tz = now.timezone();
    let active = if config.enable_highlighting {
        current_prayer(schedule, now.with_timezone(&Utc))
    } else {
        None
    };

    let segments: Vec<String> = schedule
        .iter()
        .map(|(prayer, time)| {
            let segment = format!("{} {}", prayer.name(), time.with_timezone(&tz).format("%H:%M"));
            if active == Some(prayer) {
                highlight(&segment, &config.highlight_colour)
            } else {
                segment
            }
        })
        .collect();

    segments.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn display_config(countdown: bool, highlighting: bool, colour: &str) -> Config {
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
            enable_countdown: countdown,
            enable_highlighting: highlighting,
            highlight_colour: colour.to_string(),
        }
    }

    fn sample_day() -> DaySchedule {
        DaySchedule {
            fajr: Utc.with_ymd_and_hms(2025, 8, 27, 3, 30, 0).unwrap(),
            sunrise: Utc.with_ymd_and_hms(2025, 8, 27, 5, 5, 0).unwrap(),
            dhuhr: Utc.with_ymd_and_hms(2025, 8, 27, 12, 5, 0).unwrap(),
            asr: Utc.with_ymd_and_hms(2025, 8, 27, 15, 50, 0).unwrap(),
            maghrib: Utc.with_ymd_and_hms(2025, 8, 27, 19, 5, 0).unwrap(),
            isha: Utc.with_ymd_and_hms(2025, 8, 27, 20, 35, 0).unwrap(),
        }
    }

    #[test]
    fn countdown_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 12, 0, 0).unwrap();

        assert_eq!(
            format_countdown(now + Duration::hours(2) + Duration::minutes(15), now),
            "in 2 hr 15 min"
        );
        assert_eq!(format_countdown(now + Duration::minutes(45), now), "in 45 min");
        assert_eq!(format_countdown(now + Duration::seconds(30), now), "in 30 sec");
        assert_eq!(format_countdown(now, now), "");
        assert_eq!(format_countdown(now - Duration::minutes(10), now), "");
    }

    #[test]
    fn next_prayer_plain() {
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 18, 0, 0).unwrap();
        let config = display_config(false, false, "");
        let rendered =
            format_next_prayer(Prayer::Maghrib, now + Duration::hours(2), now, &config);
        assert_eq!(rendered, "Maghrib 20:00");
    }

    #[test]
    fn next_prayer_with_countdown() {
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 18, 0, 0).unwrap();
        let config = display_config(true, false, "");

        let rendered =
            format_next_prayer(Prayer::Maghrib, now + Duration::minutes(90), now, &config);
        assert_eq!(rendered, "Maghrib 19:30 (in 1 hr 30 min)\n");

        let rendered =
            format_next_prayer(Prayer::Isha, now + Duration::minutes(30), now, &config);
        assert_eq!(rendered, "Isha 18:30 (in 30 min)\n");
    }

    #[test]
    fn next_prayer_highlighted() {
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 18, 0, 0).unwrap();

        let config = display_config(false, true, "red");
        let rendered =
            format_next_prayer(Prayer::Maghrib, now + Duration::hours(2), now, &config);
        assert_eq!(rendered, "\x1b[31mMaghrib 20:00\x1b[0m");

        let config = display_config(true, true, "blue");
        let rendered =
            format_next_prayer(Prayer::Isha, now + Duration::minutes(45), now, &config);
        assert_eq!(rendered, "\x1b[34mIsha 18:45 (in 45 min)\n\x1b[0m");
    }

    #[test]
    fn next_prayer_unknown_colour_falls_back_to_green() {
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 18, 0, 0).unwrap();
        let config = display_config(false, true, "invalidColor");
        let rendered = format_next_prayer(Prayer::Fajr, now + Duration::hours(8), now, &config);
        assert_eq!(rendered, "\x1b[32mFajr 02:00\x1b[0m");
    }

    #[test]
    fn day_view_plain() {
        let schedule = sample_day();
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 13, 0, 0).unwrap();
        let config = display_config(false, false, "");

        assert_eq!(
            format_day(&schedule, now, &config),
            "Fajr 03:30 | Sunrise 05:05 | Dhuhr 12:05 | Asr 15:50 | Maghrib 19:05 | Isha 20:35"
        );
    }

    #[test]
    fn day_view_highlights_current_prayer_only() {
        let schedule = sample_day();
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 13, 0, 0).unwrap();
        let config = display_config(false, true, "cyan");

        let rendered = format_day(&schedule, now, &config);
        assert!(rendered.contains("\x1b[36mDhuhr 12:05\x1b[0m"));
        assert!(rendered.contains("Fajr 03:30 |"));
        assert_eq!(rendered.matches(ANSI_RESET).count(), 1);
    }

    #[test]
    fn day_view_before_fajr_highlights_nothing() {
        let schedule = sample_day();
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 2, 0, 0).unwrap();
        let config = display_config(false, true, "cyan");

        let rendered = format_day(&schedule, now, &config);
        assert!(!rendered.contains(ANSI_RESET));
    }

    #[test]
    fn palette_lookup() {
        assert_eq!(colour_code("red"), Some("\x1b[31m"));
        assert_eq!(colour_code("chartreuse"), None);
        assert!(colour_names().contains(&"magenta"));
    }
}
