//! `next` command: announce the next upcoming prayer.

use anyhow::{Context, Result};
use chrono::{Local, Utc};

use crate::clock::Clock;
use crate::display::format_next_prayer;
use crate::prayers;

pub fn run(clock: &dyn Clock) -> Result<()> {
    let (config, params) = super::load_config_and_params()?;

    let today = prayers::today(&config, &params, clock)
        .context("failed to get today's prayer times")?;
    let tomorrow = prayers::tomorrow(&config, &params, clock)
        .context("failed to get tomorrow's prayer times")?;

    // One clock reading drives both resolution and formatting.
    let now = clock.now();
    let (prayer, at) = prayers::next_prayer(&today, &tomorrow, now.with_timezone(&Utc))
        .context("error determining next prayer")?;

    println!(
        "{}",
        format_next_prayer(prayer, at.with_timezone(&Local), now, &config)
    );
    Ok(())
}
