//! Binary entry point: parse the command line, dispatch, exit.
//!
//! Every failure path funnels through the same reporting block and exits
//! with status 1; help and successful commands exit 0.

use salah_cli::args::{CliAction, ParsedArgs};
use salah_cli::clock::SystemClock;
use salah_cli::commands;
use salah_cli::{log_end, log_error, log_pipe, log_warning_standalone};

fn main() {
    let action = ParsedArgs::parse(std::env::args()).action;
    let clock = SystemClock;

    let result = match action {
        CliAction::Today => commands::today::run(&clock),
        CliAction::Next => commands::next::run(&clock),
        CliAction::ValidateConfig => commands::validate::run(),
        CliAction::Setup => commands::setup::run(),
        CliAction::ShowHelp => {
            commands::help::display_usage();
            Ok(())
        }
        CliAction::ShowHelpDueToError { unknown } => {
            log_warning_standalone!("Unknown command: {}", unknown);
            commands::help::display_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        log_pipe!();
        log_error!("{e:#}");
        log_end!();
        std::process::exit(1);
    }
}
