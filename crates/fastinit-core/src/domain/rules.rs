//! Feature activation and the cross-feature dependency table.
//!
//! # Design Rationale
//!
//! A descriptor never decides on its own whether it applies. Activation is
//! computed here once per run: option slots switch on their own feature,
//! and [`DEPENDENCY_RULES`] switches on the derived ones. Every "choosing X
//! also brings Y" relationship lives in that one table.
//!
//! # Adding a Dependency
//!
//! 1. Write a predicate over [`ProjectOptions`]
//! 2. Add one [`DependencyRule`] entry to [`DEPENDENCY_RULES`]
//! 3. That's it: the resolver consults the table for every derived feature

use crate::domain::{
    entities::options::ProjectOptions,
    value_objects::{Feature, Selection},
};

// ── Dependency table ─────────────────────────────────────────────────────────

/// "When `when` holds, `includes` is active."
#[derive(Debug, Clone, Copy)]
pub struct DependencyRule {
    /// Shown in listings and debug logs.
    pub name: &'static str,
    pub when: fn(&ProjectOptions) -> bool,
    pub includes: Feature,
}

fn orm_selected(options: &ProjectOptions) -> bool {
    !options.orm().is_none()
}

fn database_selected(options: &ProjectOptions) -> bool {
    !options.database().is_none()
}

/// Single source of truth for derived features.
///
/// The `tests/` smoke test needs no rule: it belongs to the test-framework
/// feature itself and branches on ORM and database inside its generator.
pub static DEPENDENCY_RULES: &[DependencyRule] = &[
    DependencyRule {
        name: "an ORM needs the models package",
        when: orm_selected,
        includes: Feature::Models,
    },
    DependencyRule {
        name: "an ORM needs the declarative base",
        when: orm_selected,
        includes: Feature::DbBase,
    },
    DependencyRule {
        name: "a database needs the declarative base",
        when: database_selected,
        includes: Feature::DbBase,
    },
];

/// Rules that fire for these options.
pub fn fired_rules(options: &ProjectOptions) -> impl Iterator<Item = &'static DependencyRule> + '_ {
    DEPENDENCY_RULES.iter().filter(move |rule| (rule.when)(options))
}

// ── Activation ───────────────────────────────────────────────────────────────

/// Whether a feature takes part in a run, and with which choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Off,
    /// Active; `Some` carries the concrete choice for variant-bearing slots.
    On(Option<Selection>),
}

impl Activation {
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On(_))
    }
}

pub fn activation(feature: Feature, options: &ProjectOptions) -> Activation {
    match feature {
        Feature::Core => Activation::On(None),
        Feature::Docker => {
            if options.docker() {
                Activation::On(None)
            } else {
                Activation::Off
            }
        }
        Feature::Models | Feature::DbBase => {
            if fired_rules(options).any(|rule| rule.includes == feature) {
                Activation::On(None)
            } else {
                Activation::Off
            }
        }
        Feature::Database | Feature::Orm | Feature::Linter | Feature::TestFramework => {
            match options.selection(feature) {
                Some(sel) if !sel.is_none() => Activation::On(Some(sel)),
                _ => Activation::Off,
            }
        }
    }
}

/// Active features in canonical order, with their selections.
pub fn active_features(options: &ProjectOptions) -> Vec<(Feature, Option<Selection>)> {
    Feature::ALL
        .into_iter()
        .filter_map(|feature| match activation(feature, options) {
            Activation::On(sel) => Some((feature, sel)),
            Activation::Off => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Database, Linter, Orm, TestFramework};

    fn opts(database: Database, orm: Orm) -> ProjectOptions {
        ProjectOptions::builder()
            .name("demo")
            .unwrap()
            .database(database)
            .orm(orm)
            .build()
    }

    #[test]
    fn all_none_activates_only_core() {
        let active = active_features(&opts(Database::None, Orm::None));
        assert_eq!(active, vec![(Feature::Core, None)]);
    }

    #[test]
    fn orm_alone_brings_models_and_db_base() {
        let o = opts(Database::None, Orm::SqlModel);
        assert!(activation(Feature::Models, &o).is_on());
        assert!(activation(Feature::DbBase, &o).is_on());
        assert!(!activation(Feature::Database, &o).is_on());
    }

    #[test]
    fn database_alone_brings_db_base_but_not_models() {
        let o = opts(Database::Sqlite, Orm::None);
        assert!(activation(Feature::DbBase, &o).is_on());
        assert!(!activation(Feature::Models, &o).is_on());
        assert_eq!(
            activation(Feature::Database, &o),
            Activation::On(Some(Selection::Database(Database::Sqlite)))
        );
    }

    #[test]
    fn sentinels_and_false_docker_are_off() {
        let o = ProjectOptions::builder()
            .name("demo")
            .unwrap()
            .linter(Linter::None)
            .test_framework(TestFramework::None)
            .docker(false)
            .build();
        for feature in [Feature::Linter, Feature::TestFramework, Feature::Docker] {
            assert_eq!(activation(feature, &o), Activation::Off);
        }
    }

    #[test]
    fn every_derived_feature_has_a_rule() {
        for feature in Feature::ALL.into_iter().filter(Feature::is_derived) {
            assert!(
                DEPENDENCY_RULES.iter().any(|r| r.includes == feature),
                "{feature} is derived but no rule includes it"
            );
        }
    }
}
