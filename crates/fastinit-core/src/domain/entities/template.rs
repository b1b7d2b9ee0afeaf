//! Template descriptors: what the catalog is made of.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateDescriptor                                         │
//! │  ├── path: RelativePath        "app/db/session.py"          │
//! │  ├── feature: Feature          Database                     │
//! │  ├── variant: VariantMatcher   Any | Only(Selection)        │
//! │  └── generator: fn(&ProjectOptions) -> String               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A descriptor is inert data. It becomes a `GenerationTask` only when the
//! resolver decides it applies and binds its generator to the options.

use std::fmt;

use crate::domain::{
    entities::{common::RelativePath, options::ProjectOptions},
    error::DomainError,
    value_objects::{Feature, Selection},
};

/// Pure, deterministic content generator.
pub type ContentGenerator = fn(&ProjectOptions) -> String;

/// Which choices of its feature a descriptor applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantMatcher {
    /// Included whenever the feature is active.
    Any,
    /// Included only for this one choice.
    Only(Selection),
}

impl VariantMatcher {
    /// Does this matcher accept the active selection?
    ///
    /// `active` is `None` for features without variants (docker, derived
    /// features, core); only `Any` matches those.
    pub fn matches(&self, active: Option<Selection>) -> bool {
        match (self, active) {
            (Self::Any, _) => true,
            (Self::Only(wanted), Some(active)) => *wanted == active,
            (Self::Only(_), None) => false,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "*",
            Self::Only(sel) => sel.as_str(),
        }
    }
}

impl fmt::Display for VariantMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file the catalog knows how to produce.
#[derive(Clone)]
pub struct TemplateDescriptor {
    path: RelativePath,
    feature: Feature,
    variant: VariantMatcher,
    generator: ContentGenerator,
}

impl TemplateDescriptor {
    /// Descriptor included whenever `feature` is active.
    ///
    /// # Panics
    /// Panics if `path` is not a plain relative path.
    pub fn new(path: &str, feature: Feature, generator: ContentGenerator) -> Self {
        Self {
            path: RelativePath::new(path),
            feature,
            variant: VariantMatcher::Any,
            generator,
        }
    }

    /// Fallible constructor with an explicit matcher.
    pub fn try_new(
        path: &str,
        feature: Feature,
        variant: VariantMatcher,
        generator: ContentGenerator,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            feature,
            variant,
            generator,
        })
    }

    /// Restrict to one choice; the feature is taken from the selection.
    ///
    /// # Panics
    /// Panics if `path` is not a plain relative path.
    pub fn variant(path: &str, selection: impl Into<Selection>, generator: ContentGenerator) -> Self {
        let selection = selection.into();
        Self {
            path: RelativePath::new(path),
            feature: selection.feature(),
            variant: VariantMatcher::Only(selection),
            generator,
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub const fn feature(&self) -> Feature {
        self.feature
    }

    pub const fn matcher(&self) -> VariantMatcher {
        self.variant
    }

    /// Run the generator.
    pub fn render(&self, options: &ProjectOptions) -> String {
        (self.generator)(options)
    }

    /// Short identity used in conflict reports and listings: `orm[sqlmodel]`.
    pub fn label(&self) -> String {
        format!("{}[{}]", self.feature, self.variant)
    }

    /// Catalog-authoring checks for a single descriptor.
    pub fn validate(&self) -> Result<(), DomainError> {
        let reject = |reason: String| DomainError::InvalidDescriptor {
            descriptor: format!("{} {}", self.label(), self.path),
            reason,
        };

        if let VariantMatcher::Only(sel) = self.variant {
            if !self.feature.has_variants() {
                return Err(reject(format!(
                    "feature '{}' does not take variants",
                    self.feature
                )));
            }
            if sel.feature() != self.feature {
                return Err(reject(format!(
                    "variant '{sel}' belongs to feature '{}'",
                    sel.feature()
                )));
            }
            if sel.is_none() {
                return Err(reject("a 'none' choice never activates templates".into()));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateDescriptor")
            .field("path", &self.path)
            .field("feature", &self.feature)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Database, Linter, Orm};

    fn empty(_: &ProjectOptions) -> String {
        String::new()
    }

    #[test]
    fn any_matches_everything() {
        assert!(VariantMatcher::Any.matches(None));
        assert!(VariantMatcher::Any.matches(Some(Orm::SqlModel.into())));
    }

    #[test]
    fn only_matches_exact_selection() {
        let m = VariantMatcher::Only(Orm::SqlAlchemy.into());
        assert!(m.matches(Some(Orm::SqlAlchemy.into())));
        assert!(!m.matches(Some(Orm::SqlModel.into())));
        assert!(!m.matches(None));
    }

    #[test]
    fn variant_constructor_takes_feature_from_selection() {
        let d = TemplateDescriptor::variant("app/models/user.py", Orm::SqlModel, empty);
        assert_eq!(d.feature(), Feature::Orm);
        assert_eq!(d.label(), "orm[sqlmodel]");
        assert!(d.validate().is_ok());
    }

    #[test]
    fn validate_rejects_mismatched_variant() {
        let d = TemplateDescriptor::try_new(
            "app/db/session.py",
            Feature::Database,
            VariantMatcher::Only(Linter::Ruff.into()),
            empty,
        )
        .unwrap();
        assert!(matches!(
            d.validate(),
            Err(DomainError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn validate_rejects_none_variant_and_variant_on_docker() {
        let none = TemplateDescriptor::variant("x.py", Database::None, empty);
        assert!(none.validate().is_err());

        let docker = TemplateDescriptor::try_new(
            "Dockerfile",
            Feature::Docker,
            VariantMatcher::Only(Database::Sqlite.into()),
            empty,
        )
        .unwrap();
        assert!(docker.validate().is_err());
    }

    #[test]
    fn try_new_rejects_traversal() {
        let err = TemplateDescriptor::try_new("../evil.py", Feature::Core, VariantMatcher::Any, empty)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidPath { .. }));
    }
}
