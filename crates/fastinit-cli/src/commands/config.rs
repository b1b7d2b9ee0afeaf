//! `fastinit config`: read and write configuration values.
//!
//! Keys are dotted paths into the TOML document (`defaults.database`,
//! `prompts.interactive`). Only keys that exist in [`AppConfig`] are
//! accepted, and a `set` is validated before anything is written.

use std::path::Path;

use toml::{Table, Value};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {}", display(&value)))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::resolve_path(global.config.as_deref());
            let mut table = read_table(&path)?;
            set_config_value(&mut table, &key, &value)?;

            let text = toml::to_string_pretty(&table)
                .with_cli_context(|| "Failed to serialise config")?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_cli_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }
            std::fs::write(&path, text)
                .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::resolve_path(global.config.as_deref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

fn as_table(config: &AppConfig) -> CliResult<Table> {
    match Value::try_from(config).with_cli_context(|| "Failed to serialise config")? {
        Value::Table(table) => Ok(table),
        _ => Err(CliError::ConfigError {
            message: "configuration did not serialise to a table".into(),
            source: None,
        }),
    }
}

fn lookup<'a>(table: &'a Table, key: &str) -> Option<&'a Value> {
    let mut parts = key.split('.');
    let mut value = table.get(parts.next()?)?;
    for part in parts {
        value = value.as_table()?.get(part)?;
    }
    Some(value)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    lookup(&as_table(config)?, key)
        .cloned()
        .ok_or_else(|| unknown_key(key))
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn read_table(path: &Path) -> CliResult<Table> {
    if !path.exists() {
        return Ok(Table::new());
    }
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read config from '{}'", path.display()))?;
    toml::from_str::<Table>(&text)
        .with_cli_context(|| format!("'{}' is not valid TOML", path.display()))
}

/// Set `key` in `table`, keeping the document a valid [`AppConfig`].
fn set_config_value(table: &mut Table, key: &str, raw: &str) -> CliResult<()> {
    // The key must exist in the full schema; its type decides the parse.
    let template = get_config_value(&AppConfig::default(), key)?;
    let value = match template {
        Value::Boolean(_) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Value::Boolean(true),
            "false" | "no" | "off" | "0" => Value::Boolean(false),
            _ => {
                return Err(CliError::ConfigError {
                    message: format!("'{key}' expects true or false, got '{raw}'"),
                    source: None,
                });
            }
        },
        _ => Value::String(raw.to_string()),
    };

    let (sections, leaf) = match key.rsplit_once('.') {
        Some((sections, leaf)) => (Some(sections), leaf),
        None => (None, key),
    };
    let mut current = &mut *table;
    for section in sections.into_iter().flat_map(|s| s.split('.')) {
        current = current
            .entry(section)
            .or_insert(Value::Table(Table::new()))
            .as_table_mut()
            .ok_or_else(|| unknown_key(key))?;
    }
    current.insert(leaf.to_string(), value);

    let candidate: AppConfig = Value::Table(table.clone())
        .try_into()
        .with_cli_context(|| format!("'{key}' cannot hold '{raw}'"))?;
    candidate.validate().map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "defaults.database").unwrap(),
            Value::String("sqlite".into())
        );
        assert_eq!(
            get_config_value(&cfg, "prompts.interactive").unwrap(),
            Value::Boolean(true)
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_creates_sections() {
        let mut table = Table::new();
        set_config_value(&mut table, "defaults.database", "postgresql").unwrap();
        set_config_value(&mut table, "defaults.docker", "no").unwrap();

        assert_eq!(
            lookup(&table, "defaults.database"),
            Some(&Value::String("postgresql".into()))
        );
        assert_eq!(lookup(&table, "defaults.docker"), Some(&Value::Boolean(false)));
    }

    #[test]
    fn set_rejects_unknown_selection() {
        let mut table = Table::new();
        let err = set_config_value(&mut table, "defaults.orm", "peewee").unwrap_err();
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn set_rejects_bad_boolean() {
        let mut table = Table::new();
        assert!(set_config_value(&mut table, "output.no_color", "maybe").is_err());
    }

    #[test]
    fn display_strips_string_quotes() {
        assert_eq!(display(&Value::String("ruff".into())), "ruff");
        assert_eq!(display(&Value::Boolean(true)), "true");
    }
}
