//! `today` command: print the full schedule for the current date.

use anyhow::{Context, Result};

use crate::clock::Clock;
use crate::display::format_day;
use crate::prayers;

pub fn run(clock: &dyn Clock) -> Result<()> {
    let (config, params) = super::load_config_and_params()?;

    let schedule = prayers::today(&config, &params, clock)
        .context("failed to get today's prayer times")?;

    // Data output: one line on stdout, consumable by scripts.
    println!("{}", format_day(&schedule, clock.now(), &config));
    Ok(())
}
