//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `fastinit -q new x`
//! and `fastinit new x -q` mean the same thing.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)",
        long_help = "Increase log verbosity on stderr:
    (none)  - warnings and errors only
    -v      - resolved options, destination and write summary
    -vv     - plan size and every file as it is written
    -vvv    - every planned file and the template it came from"
    )]
    pub verbose: u8,

    /// Print nothing but errors and machine-readable payloads.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Plain, uncoloured text. Honours `NO_COLOR` (<https://no-color.org>):
    /// any value except an empty or falsey one (`0`, `false`, `no`, `off`).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Config file to read (and, for `config set` / `init`, to write).
    ///
    /// Without it, `.fastinit.toml` in the working directory is used when
    /// present, otherwise the per-user config directory.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "FASTINIT_CONFIG",
        value_name = "FILE",
        help = "Use this configuration file"
    )]
    pub config: Option<PathBuf>,

    /// `json` prints plans, reports and catalog listings as JSON on stdout
    /// and switches log lines on stderr to JSON as well.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format (auto, human, plain, json)"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colours, headers and a progress bar.
    Human,
    /// The same text without colours or progress bar.
    Plain,
    /// Structured output only.
    Json,
}

impl OutputFormat {
    /// Replace `Auto` with a concrete format.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_the_terminal() {
        assert_eq!(OutputFormat::Auto.resolve(true), OutputFormat::Human);
        assert_eq!(OutputFormat::Auto.resolve(false), OutputFormat::Plain);
    }

    #[test]
    fn no_color_flag_parses_without_value() {
        use clap::Parser;

        let cli = crate::cli::Cli::try_parse_from(["fastinit", "--no-color", "list"]).unwrap();
        assert!(cli.global.no_color);
    }

    #[test]
    fn explicit_formats_are_kept() {
        for format in [OutputFormat::Human, OutputFormat::Plain, OutputFormat::Json] {
            assert_eq!(format.resolve(false), format);
            assert_eq!(format.resolve(true), format);
        }
    }
}
