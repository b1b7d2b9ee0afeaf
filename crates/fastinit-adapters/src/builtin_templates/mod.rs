//! The built-in FastAPI catalog.
//!
//! [`catalog`] is the single entry-point: it collects every descriptor that
//! ships with fastinit and validates them into a [`TemplateCatalog`]. The CLI
//! calls it once at startup and shares the result behind an `Arc`.
//!
//! Descriptors are grouped by the part of the generated project they
//! produce:
//!
//! | Module | Produces |
//! |--------|----------|
//! | `app` | the always-on `app/` package (entry point, routers, settings) |
//! | `data` | `app/models/` and `app/db/` (ORM, declarative base, session) |
//! | `tooling` | `pyproject.toml`, env/ignore files, linter, tests, Docker |
//! | `docs` | the root `README.md` and one `README.md` per package |
//!
//! Every generator is a plain `fn(&ProjectOptions) -> String`. Bodies that
//! only need per-project values are constants rendered through
//! [`RenderContext`]; bodies that vary by choice match on the option enums.

mod app;
mod data;
mod docs;
mod tooling;

use tracing::{debug, instrument};

use fastinit_core::domain::{
    DomainError, ProjectOptions, RenderContext, TemplateCatalog, TemplateDescriptor,
};

// ── Public API ────────────────────────────────────────────────────────────────

/// Every built-in descriptor, unvalidated.
pub fn descriptors() -> Vec<TemplateDescriptor> {
    let mut all = app::descriptors();
    all.extend(data::descriptors());
    all.extend(tooling::descriptors());
    all.extend(docs::descriptors());
    all
}

/// Build the validated built-in catalog.
#[instrument]
pub fn catalog() -> Result<TemplateCatalog, DomainError> {
    let catalog = TemplateCatalog::new(descriptors())?;
    debug!(descriptors = catalog.len(), "built-in catalog loaded");
    Ok(catalog)
}

// ── Shared generator helpers ──────────────────────────────────────────────────

/// Render a constant body with the option variables.
fn fill(options: &ProjectOptions, template: &str) -> String {
    RenderContext::for_options(options).render(template)
}

/// Package marker with no content.
fn empty(_: &ProjectOptions) -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastinit_core::domain::Feature;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = catalog().expect("built-in catalog must validate");
        assert!(catalog.always_on().count() >= 20);
        for feature in Feature::ALL {
            assert!(
                catalog.templates_for(feature).count() > 0,
                "no descriptors for {feature}"
            );
        }
    }
}
