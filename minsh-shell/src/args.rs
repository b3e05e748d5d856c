//! Command-line argument definitions.

use clap::{Parser, builder::styling};
use std::path::PathBuf;

use crate::{events, productinfo};

const SHORT_DESCRIPTION: &str = "Minimal fork/exec command interpreter";

const LONG_DESCRIPTION: &str = r"
minsh reads one command per line and splits it on whitespace. A line ending in `&` runs in the
background, a line ending in `> FILE` sends its standard output to FILE, and a line containing
`|` connects the standard output of the command on its left to the standard input of the
command on its right.
";

/// Parsed command-line arguments for minsh.
#[derive(Parser)]
#[clap(name = productinfo::PRODUCT_NAME,
       version = productinfo::PRODUCT_VERSION,
       about = SHORT_DESCRIPTION,
       long_about = LONG_DESCRIPTION,
       disable_help_flag = true,
       disable_version_flag = true,
       styles = help_styles())]
#[allow(clippy::module_name_repetitions)]
pub struct CommandLineArgs {
    /// Display usage information.
    #[clap(long = "help", action = clap::ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// Display the version.
    #[clap(long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Execute the provided command line and then exit.
    #[arg(short = 'c', value_name = "COMMAND")]
    pub command: Option<String>,

    /// Path to a configuration file to use instead of the default one.
    #[clap(long = "config", value_name = "PATH", env = "MINSH_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Do not load any configuration file.
    #[clap(long = "no-config")]
    pub no_config: bool,

    /// Prompt displayed before each line read from a terminal.
    #[clap(long = "prompt", value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Enable debug logging for classes of tracing events.
    #[clap(long = "debug", alias = "log-enable", value_name = "EVENT")]
    pub enabled_debug_events: Vec<events::TraceEvent>,
}

/// Returns clap styling to be used for command-line help.
#[doc(hidden)]
fn help_styles() -> clap::builder::Styles {
    styling::Styles::styled()
        .header(
            styling::AnsiColor::Yellow.on_default()
                | styling::Effects::BOLD
                | styling::Effects::UNDERLINE,
        )
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Magenta.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_command_and_events() -> anyhow::Result<()> {
        let args = CommandLineArgs::try_parse_from([
            "minsh", "--no-config", "--debug", "commands", "--debug", "jobs", "-c", "ls | wc",
        ])?;

        assert!(args.no_config);
        assert_eq!(args.command.as_deref(), Some("ls | wc"));
        assert_eq!(
            args.enabled_debug_events,
            vec![events::TraceEvent::Commands, events::TraceEvent::Jobs]
        );
        Ok(())
    }

    #[test]
    fn rejects_unknown_event() {
        assert!(CommandLineArgs::try_parse_from(["minsh", "--debug", "bogus"]).is_err());
    }
}
