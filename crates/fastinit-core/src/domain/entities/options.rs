//! The `ProjectOptions` aggregate and its typestate builder.
//!
//! A `ProjectOptions` value is the fully-typed configuration for one run.
//! It is built once, either from typed values through the builder or from
//! raw strings through [`ProjectOptions::from_raw`], and never mutated.
//!
//! # Typestate builder
//!
//! The builder carries `NoName` until a valid [`ProjectName`] is supplied;
//! `build()` only exists once it does. Option slots default to their `None`
//! sentinel and docker to `false`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{
    entities::project_name::ProjectName,
    error::DomainError,
    value_objects::{Database, Feature, Linter, Orm, Selection, TestFramework},
};

// ── Aggregate ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectOptions {
    name: ProjectName,
    database: Database,
    orm: Orm,
    linter: Linter,
    test_framework: TestFramework,
    docker: bool,
}

impl ProjectOptions {
    /// Start building options; a name is required before `build()`.
    pub fn builder() -> OptionsBuilder<NoName> {
        OptionsBuilder::new()
    }

    /// Validate raw selections as they come from flags, prompts or config.
    ///
    /// Fails on the first offending field, naming it and its allowed values.
    pub fn from_raw(raw: &RawOptions) -> Result<Self, DomainError> {
        Ok(Self::builder()
            .name(&raw.name)?
            .database(raw.database.parse()?)
            .orm(raw.orm.parse()?)
            .linter(raw.linter.parse()?)
            .test_framework(raw.test_framework.parse()?)
            .docker(parse_flag("docker", &raw.docker)?)
            .build())
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }
    pub const fn database(&self) -> Database {
        self.database
    }
    pub const fn orm(&self) -> Orm {
        self.orm
    }
    pub const fn linter(&self) -> Linter {
        self.linter
    }
    pub const fn test_framework(&self) -> TestFramework {
        self.test_framework
    }
    pub const fn docker(&self) -> bool {
        self.docker
    }

    /// The selection for a variant-bearing feature slot, sentinel included.
    pub const fn selection(&self, feature: Feature) -> Option<Selection> {
        match feature {
            Feature::Database => Some(Selection::Database(self.database)),
            Feature::Orm => Some(Selection::Orm(self.orm)),
            Feature::Linter => Some(Selection::Linter(self.linter)),
            Feature::TestFramework => Some(Selection::TestFramework(self.test_framework)),
            Feature::Core | Feature::Models | Feature::DbBase | Feature::Docker => None,
        }
    }

    /// Whether any persistence layer (engine or ORM) was chosen.
    pub const fn uses_persistence(&self) -> bool {
        !self.database.is_none() || !self.orm.is_none()
    }
}

impl fmt::Display for ProjectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (database={}, orm={}, linter={}, tests={}, docker={})",
            self.name,
            self.database,
            self.orm,
            self.linter,
            self.test_framework,
            if self.docker { "yes" } else { "no" }
        )
    }
}

/// Unvalidated selections, one string per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOptions {
    pub name: String,
    pub database: String,
    pub orm: String,
    pub linter: String,
    pub test_framework: String,
    pub docker: String,
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, DomainError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "on" => Ok(true),
        "no" | "n" | "false" | "0" | "off" => Ok(false),
        _ => Err(DomainError::InvalidOption {
            field,
            value: value.to_string(),
            allowed: vec!["yes", "no"],
        }),
    }
}

// ── Typestate marker ──────────────────────────────────────────────────────────

/// Marker: no project name has been set yet.
pub struct NoName;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`ProjectOptions`].
///
/// `N` is [`NoName`] until `name()` succeeds, then [`ProjectName`].
pub struct OptionsBuilder<N> {
    name: N,
    database: Database,
    orm: Orm,
    linter: Linter,
    test_framework: TestFramework,
    docker: bool,
}

impl OptionsBuilder<NoName> {
    pub fn new() -> Self {
        Self {
            name: NoName,
            database: Database::None,
            orm: Orm::None,
            linter: Linter::None,
            test_framework: TestFramework::None,
            docker: false,
        }
    }

    /// Validate and set the project name.
    pub fn name(self, name: &str) -> Result<OptionsBuilder<ProjectName>, DomainError> {
        let name = ProjectName::parse(name)?;
        Ok(OptionsBuilder {
            name,
            database: self.database,
            orm: self.orm,
            linter: self.linter,
            test_framework: self.test_framework,
            docker: self.docker,
        })
    }
}

impl Default for OptionsBuilder<NoName> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> OptionsBuilder<N> {
    pub fn database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn orm(mut self, orm: Orm) -> Self {
        self.orm = orm;
        self
    }

    pub fn linter(mut self, linter: Linter) -> Self {
        self.linter = linter;
        self
    }

    pub fn test_framework(mut self, test_framework: TestFramework) -> Self {
        self.test_framework = test_framework;
        self
    }

    pub fn docker(mut self, docker: bool) -> Self {
        self.docker = docker;
        self
    }
}

impl OptionsBuilder<ProjectName> {
    /// Every slot is a closed enum, so there is nothing left to reject.
    pub fn build(self) -> ProjectOptions {
        ProjectOptions {
            name: self.name,
            database: self.database,
            orm: self.orm,
            linter: self.linter,
            test_framework: self.test_framework,
            docker: self.docker,
        }
    }
}
