//! `validate-config` command: load the config and report the verdict.

use anyhow::{Context, Result};

use crate::config;

pub fn run() -> Result<()> {
    log_version!();

    let path = config::config_path().context("failed to resolve config path")?;
    log_block_start!("Validating configuration");
    log_indented!("{}", path.display());

    // Load already runs validation; reaching this point means both passed.
    config::load().context("invalid configuration")?;

    log_decorated!("Config is valid!");
    log_end!();
    Ok(())
}
