//! Usage output.

/// Display general usage information.
pub fn display_usage() {
    log_version!();
    log_block_start!("Usage: salah-cli <COMMAND>");
    log_block_start!("Commands:");
    log_indented!("today              Show today's prayer times");
    log_indented!("next               Show the next upcoming prayer time");
    log_indented!("validate-config    Validate the config file");
    log_indented!("setup              Interactively create a config file");
    log_indented!("help               Show this help");
    log_pipe!();
    log_info!("Configuration lives at <config dir>/salah-cli/config.json");
    log_indented!("Run 'salah-cli setup' to create one interactively.");
    log_end!();
}
