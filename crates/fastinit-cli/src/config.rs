//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FASTINIT_DEFAULTS__DATABASE=postgresql`
//! 3. Config file: `--config`, else `./.fastinit.toml`, else the platform
//!    config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use fastinit_core::domain::{Database, DomainError, Linter, Orm, TestFramework};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG: &str = ".fastinit.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default selections for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Prompt behavior.
    pub prompts: PromptConfig,
}

/// Selections used when neither a flag nor a prompt provides one.
///
/// Stored as strings so the file accepts the same spellings as the flags;
/// [`AppConfig::validate`] checks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub database: String,
    pub orm: String,
    pub linter: String,
    pub tests: String,
    pub docker: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            database: Database::Sqlite.as_str().into(),
            orm: Orm::SqlAlchemy.as_str().into(),
            linter: Linter::Ruff.as_str().into(),
            tests: TestFramework::PyTest.as_str().into(),
            docker: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Ask for missing selections when stdin is a terminal.
    pub interactive: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { interactive: true }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file.map(PathBuf::as_path));

        let config = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                Environment::with_prefix("FASTINIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        let app: Self = config
            .try_deserialize()
            .context("configuration has an unexpected shape")?;
        app.validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(app)
    }

    /// Check that every default selection names a known choice.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.defaults.database.parse::<Database>()?;
        self.defaults.orm.parse::<Orm>()?;
        self.defaults.linter.parse::<Linter>()?;
        self.defaults.tests.parse::<TestFramework>()?;
        Ok(())
    }

    /// The file that `load` reads and `config set` writes.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() {
            return local;
        }
        Self::config_path()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fastinit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "fastinit", "fastinit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }
}
