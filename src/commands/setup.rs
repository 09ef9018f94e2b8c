//! `setup` command: interactively create and persist a configuration.

use anyhow::{Context, Result};

use crate::config;

pub fn run() -> Result<()> {
    log_version!();
    log_block_start!("Interactive setup");
    log_indented!("Arrow keys navigate menus, Enter confirms, Esc cancels");
    log_pipe!();

    let new_config = config::interactive_setup()?;

    let path = config::config_path().context("failed to resolve config path")?;
    config::save_config(&new_config, &path).context("failed to save created config")?;

    log_block_start!("Successfully written config file to {}", path.display());
    log_indented!("Run 'salah-cli today' to see your prayer times");
    log_end!();
    Ok(())
}
