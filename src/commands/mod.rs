//! Command handlers for salah-cli.
//!
//! Each command is implemented in its own submodule. Handlers return
//! `Result`; main turns any error into a diagnostic and a non-zero exit.

pub mod help;
pub mod next;
pub mod setup;
pub mod today;
pub mod validate;

use anyhow::{Context, Result};
use salah::prelude::Parameters;

use crate::config::{self, Config};
use crate::params::build_calculation_params;

/// Load the configuration and derive calculation parameters from it.
///
/// Shared preamble of every command that computes prayer times.
pub(crate) fn load_config_and_params() -> Result<(Config, Parameters)> {
    let config = config::load().context("error loading configuration")?;
    let params =
        build_calculation_params(&config).context("error building calculation parameters")?;
    Ok((config, params))
}
