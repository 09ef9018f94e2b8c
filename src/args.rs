//! Command-line argument parsing.
//!
//! The interface is a single positional command. Parsing never fails hard;
//! anything unrecognised becomes an action that prints usage and exits
//! non-zero, while an empty invocation shows usage and exits cleanly.

/// Represents the parsed command line and its intended action.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print today's full prayer-time schedule.
    Today,
    /// Print the next upcoming prayer.
    Next,
    /// Load and validate the config file, reporting the result.
    ValidateConfig,
    /// Interactively create and persist a config file.
    Setup,
    /// Display usage and exit successfully.
    ShowHelp,
    /// Display usage and exit with an error (unknown command).
    ShowHelpDueToError { unknown: String },
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments, including the
    ///   program name (typically from `std::env::args()`)
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter().skip(1);

        let action = match args.next() {
            None => CliAction::ShowHelp,
            Some(command) => match command.as_ref() {
                "today" => CliAction::Today,
                "next" => CliAction::Next,
                "validate-config" => CliAction::ValidateConfig,
                "setup" => CliAction::Setup,
                "help" | "--help" | "-h" => CliAction::ShowHelp,
                unknown => CliAction::ShowHelpDueToError {
                    unknown: unknown.to_string(),
                },
            },
        };

        ParsedArgs { action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        ParsedArgs::parse(args.iter().copied()).action
    }

    #[test]
    fn no_arguments_shows_help() {
        assert_eq!(parse(&["salah-cli"]), CliAction::ShowHelp);
    }

    #[test]
    fn known_commands_parse() {
        assert_eq!(parse(&["salah-cli", "today"]), CliAction::Today);
        assert_eq!(parse(&["salah-cli", "next"]), CliAction::Next);
        assert_eq!(
            parse(&["salah-cli", "validate-config"]),
            CliAction::ValidateConfig
        );
        assert_eq!(parse(&["salah-cli", "setup"]), CliAction::Setup);
    }

    #[test]
    fn help_aliases_parse() {
        for alias in ["help", "--help", "-h"] {
            assert_eq!(parse(&["salah-cli", alias]), CliAction::ShowHelp);
        }
    }

    #[test]
    fn unknown_command_is_an_error_action() {
        assert_eq!(
            parse(&["salah-cli", "tomorrow"]),
            CliAction::ShowHelpDueToError {
                unknown: "tomorrow".to_string()
            }
        );
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(parse(&["salah-cli", "today", "--verbose"]), CliAction::Today);
    }
}
