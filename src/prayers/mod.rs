//! Prayer time retrieval and next-prayer resolution.
//!
//! The astronomical work lives entirely in the `salah` crate; this module
//! translates between it and the rest of the application. The library is
//! queried once per calendar day (coordinates + date + parameters) and its
//! answer is captured as an immutable [`DaySchedule`] of six UTC timestamps.
//! The resolvers and the formatting layer operate on those timestamps with
//! an explicitly supplied "now", so none of them ever re-sample the clock.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use salah::prelude::{Coordinates, Parameters, PrayerSchedule};

use crate::clock::Clock;
use crate::config::Config;


/// The daily prayer and solar events, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All events of a day, in chronological order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

/// One day's prayer times as computed by the calculation library.
///
/// Immutable once obtained; timestamps are UTC and converted to wall time
/// only at the formatting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySchedule {
    pub fajr: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub dhuhr: DateTime<Utc>,
    pub asr: DateTime<Utc>,
    pub maghrib: DateTime<Utc>,
    pub isha: DateTime<Utc>,
}

impl DaySchedule {
    /// Timestamp of a single event.
    pub fn time_of(&self, prayer: Prayer) -> DateTime<Utc> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Iterate events with their timestamps in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL.into_iter().map(|prayer| (prayer, self.time_of(prayer)))
    }
}

/// Compute the prayer times for a specific calendar date.
pub fn times_for_date(
    config: &Config,
    params: &Parameters,
    date: NaiveDate,
) -> Result<DaySchedule> {
    let coordinates = Coordinates::new(config.latitude, config.longitude);
    let on = Utc
        .ymd_opt(date.year(), date.month(), date.day())
        .single()
        .ok_or_else(|| anyhow!("invalid calculation date {date}"))?;

    let times = PrayerSchedule::new()
        .on(on)
        .for_location(coordinates)
        .with_configuration(params.clone())
        .calculate()
        .map_err(|e| anyhow!("failed to calculate prayer times: {e}"))?;

    Ok(DaySchedule {
        fajr: times.time(salah::prelude::Prayer::Fajr),
        sunrise: times.time(salah::prelude::Prayer::Sunrise),
        dhuhr: times.time(salah::prelude::Prayer::Dhuhr),
        asr: times.time(salah::prelude::Prayer::Asr),
        maghrib: times.time(salah::prelude::Prayer::Maghrib),
        isha: times.time(salah::prelude::Prayer::Isha),
    })
}

/// Today's prayer times, where "today" is the clock's local calendar date.
pub fn today(config: &Config, params: &Parameters, clock: &dyn Clock) -> Result<DaySchedule> {
    times_for_date(config, params, clock.now().date_naive())
}

/// Tomorrow's prayer times.
pub fn tomorrow(config: &Config, params: &Parameters, clock: &dyn Clock) -> Result<DaySchedule> {
    let date = clock
        .now()
        .date_naive()
        .succ_opt()
        .context("calendar overflow computing tomorrow's date")?;
    times_for_date(config, params, date)
}

/// Resolve the next upcoming prayer relative to `now`.
///
/// While `now` is before today's Isha the answer is the first event of
/// today's schedule strictly after `now`. Once Isha has arrived there is
/// nothing left today and the answer is unconditionally tomorrow's Fajr.
pub fn next_prayer(
    today: &DaySchedule,
    tomorrow: &DaySchedule,
    now: DateTime<Utc>,
) -> Result<(Prayer, DateTime<Utc>)> {
    if now < today.isha {
        return today
            .iter()
            .find(|(_, time)| *time > now)
            .ok_or_else(|| anyhow!("no upcoming prayer found for today"));
    }

    // No more prayers today; fall back to tomorrow's Fajr.
    Ok((Prayer::Fajr, tomorrow.fajr))
}

/// The event currently in effect: the most recent one at or before `now`.
///
/// `None` before Fajr. Used by the full-day view to decide which segment
/// gets highlighted.
pub fn current_prayer(today: &DaySchedule, now: DateTime<Utc>) -> Option<Prayer> {
    today
        .iter()
        .take_while(|(_, time)| *time <= now)
        .last()
        .map(|(prayer, _)| prayer)
}
