//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! Option slots (`--database`, `--orm`, ...) are taken as plain strings and
//! validated by the core option model, so an unknown value is reported with
//! the same message and allowed-value list wherever it comes from (flag,
//! config file or environment).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fastinit",
    bin_name = "fastinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} FastAPI project scaffolding",
    long_about = "fastinit generates a ready-to-run FastAPI project tree \
                  from a handful of choices: database, ORM, linter, test \
                  runner and Docker.",
    after_help = "EXAMPLES:\n\
        \x20 fastinit new my-api\n\
        \x20 fastinit new my-api --database postgresql --orm sqlalchemy --linter ruff --tests pytest --docker\n\
        \x20 fastinit list --feature orm\n\
        \x20 fastinit completions bash > /usr/share/bash-completion/completions/fastinit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new FastAPI project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 fastinit new shop\n\
            \x20 fastinit new shop --database sqlite --orm sqlmodel --no-docker\n\
            \x20 fastinit new shop --output ~/code --yes --non-interactive\n\
            \x20 fastinit new shop --dry-run --output-format json"
    )]
    New(NewArgs),

    /// List the files the catalog can generate.
    #[command(
        visible_alias = "ls",
        about = "List catalog templates",
        after_help = "EXAMPLES:\n\
            \x20 fastinit list\n\
            \x20 fastinit list --feature database\n\
            \x20 fastinit list --format json"
    )]
    List(ListArgs),

    /// Initialise a fastinit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 fastinit init           # platform config location\n\
            \x20 fastinit init --local   # .fastinit.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fastinit completions bash > ~/.local/share/bash-completion/completions/fastinit\n\
            \x20 fastinit completions zsh  > ~/.zfunc/_fastinit\n\
            \x20 fastinit completions fish > ~/.config/fish/completions/fastinit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the fastinit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fastinit config get defaults.database\n\
            \x20 fastinit config set defaults.database postgresql\n\
            \x20 fastinit config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `fastinit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; becomes the directory name and the package name.
    #[arg(value_name = "NAME", help = "Project name (letters, digits, '-' and '_')")]
    pub name: String,

    /// Database engine.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        help = "Database: none, sqlite, mysql, postgresql"
    )]
    pub database: Option<String>,

    /// Object-relational mapper.
    #[arg(
        short = 'm',
        long = "orm",
        value_name = "ORM",
        help = "ORM: none, sqlalchemy, sqlmodel"
    )]
    pub orm: Option<String>,

    /// Linter / formatter.
    #[arg(
        short = 'l',
        long = "linter",
        value_name = "LINTER",
        help = "Linter: none, black, ruff"
    )]
    pub linter: Option<String>,

    /// Test runner.
    #[arg(
        short = 't',
        long = "tests",
        value_name = "FRAMEWORK",
        help = "Tests: none, pytest, pytest-asyncio"
    )]
    pub tests: Option<String>,

    /// Generate Docker files.
    #[arg(long = "docker", overrides_with = "no_docker", help = "Generate Docker files")]
    pub docker: bool,

    /// Skip Docker files.
    #[arg(long = "no-docker", overrides_with = "docker", help = "Skip Docker files")]
    pub no_docker: bool,

    /// Parent directory for the project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Never prompt; missing choices come from the configuration defaults.
    #[arg(long = "non-interactive", help = "Never prompt for missing choices")]
    pub non_interactive: bool,
}

impl NewArgs {
    /// `Some("yes")`/`Some("no")` when a Docker flag was given.
    pub fn docker_flag(&self) -> Option<&'static str> {
        match (self.docker, self.no_docker) {
            (true, _) => Some("yes"),
            (_, true) => Some("no"),
            _ => None,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `fastinit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show templates tagged with this feature.
    #[arg(
        short = 'f',
        long = "feature",
        value_name = "FEATURE",
        help = "Filter by feature (core, database, orm, models, db-base, linter, tests, docker)"
    )]
    pub feature: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fastinit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.fastinit.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fastinit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fastinit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "fastinit",
            "new",
            "shop",
            "--database",
            "postgresql",
            "--orm",
            "sqlalchemy",
            "--linter",
            "ruff",
            "--tests",
            "pytest",
            "--docker",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "shop");
        assert_eq!(args.database.as_deref(), Some("postgresql"));
        assert_eq!(args.tests.as_deref(), Some("pytest"));
        assert_eq!(args.docker_flag(), Some("yes"));
    }

    #[test]
    fn last_docker_flag_wins() {
        let cli = Cli::parse_from(["fastinit", "new", "shop", "--docker", "--no-docker"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.docker_flag(), Some("no"));
    }

    #[test]
    fn docker_unset_without_flags() {
        let cli = Cli::parse_from(["fastinit", "n", "shop"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.docker_flag(), None);
        assert!(args.database.is_none());
    }

    #[test]
    fn list_defaults_to_table() {
        let cli = Cli::parse_from(["fastinit", "ls"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Table);
        assert!(args.feature.is_none());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["fastinit", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
