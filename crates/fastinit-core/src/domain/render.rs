//! `{{VARIABLE}}` substitution for template bodies.
//!
//! Template bodies are mostly static text with a handful of per-project
//! values. Generators that only need those values render a constant through
//! a [`RenderContext`]; generators that branch on the options build their
//! text directly and may still use the context for the shared values.

use std::collections::BTreeMap;

use crate::domain::entities::options::ProjectOptions;

/// Context for template rendering.
///
/// A **Value Object** holding every variable a template may reference.
/// Immutable after creation; `with_variable` returns a new context.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "my-api" | User input |
/// | `PROJECT_MODULE` | "my_api" | Computed |
/// | `PROJECT_TITLE` | "My Api" | Computed |
/// | `PROJECT_NAME_PASCAL` | "MyApi" | Computed |
/// | `DATABASE` / `ORM` / `LINTER` / `TEST_FRAMEWORK` | "PostgreSQL" | Option labels |
/// | `DATABASE_URL` | "sqlite:///./app.db" | Empty when no database |
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Sorted so rendering order never depends on hashing.
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Context with only the project-name derived variables.
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = BTreeMap::new();

        vars.insert("PROJECT_MODULE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_TITLE".to_string(), to_title_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));
        vars.insert("PROJECT_NAME".to_string(), name);

        Self { variables: vars }
    }

    /// Context for a full option set.
    pub fn for_options(options: &ProjectOptions) -> Self {
        Self::new(options.name().as_str())
            .with_variable("PROJECT_MODULE", options.name().module_name())
            .with_variable("DATABASE", options.database().label())
            .with_variable(
                "DATABASE_URL",
                options.database().connection_url().unwrap_or_default(),
            )
            .with_variable("ORM", options.orm().label())
            .with_variable("LINTER", options.linter().label())
            .with_variable("TEST_FRAMEWORK", options.test_framework().label())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - `{{PROJECT_NAME}}{{PROJECT_NAME}}` → both replaced
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// "my-api" → "MyApi"
fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// "my-api" → "My Api"
fn to_title_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on `_`, `-`, whitespace, camelCase transitions and acronym
/// boundaries (`HTTPServer` → `http`, `server`). Words are lowercased.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(char::is_lowercase)
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Database, Orm};

    #[test]
    fn derives_name_variants() {
        let ctx = RenderContext::new("my-cool-api");
        assert_eq!(ctx.get("PROJECT_NAME"), Some("my-cool-api"));
        assert_eq!(ctx.get("PROJECT_MODULE"), Some("my_cool_api"));
        assert_eq!(ctx.get("PROJECT_TITLE"), Some("My Cool Api"));
        assert_eq!(ctx.get("PROJECT_NAME_PASCAL"), Some("MyCoolApi"));
    }

    #[test]
    fn splits_acronyms_and_camel_case() {
        assert_eq!(split_words("HTTPServer"), vec!["http", "server"]);
        assert_eq!(split_words("myApp"), vec!["my", "app"]);
    }

    #[test]
    fn renders_option_variables() {
        let opts = ProjectOptions::builder()
            .name("demo")
            .unwrap()
            .database(Database::Sqlite)
            .orm(Orm::SqlModel)
            .build();
        let ctx = RenderContext::for_options(&opts);
        let out = ctx.render("{{PROJECT_NAME}} uses {{ORM}} at {{DATABASE_URL}} {{UNKNOWN}}");
        assert_eq!(out, "demo uses SQLModel at sqlite:///./app.db {{UNKNOWN}}");
    }

    #[test]
    fn missing_database_renders_empty_url() {
        let opts = ProjectOptions::builder().name("demo").unwrap().build();
        let ctx = RenderContext::for_options(&opts);
        assert_eq!(ctx.get("DATABASE_URL"), Some(""));
    }
}
