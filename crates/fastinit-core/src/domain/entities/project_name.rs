//! Validated project name.
//!
//! The name doubles as the output directory and, with `-` mapped to `_`, as
//! the Python package name written into `pyproject.toml`.

use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let reject = |reason: String| DomainError::InvalidProjectName {
            name: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(reject("name cannot be empty".into()));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(reject("name must not contain whitespace".into()));
        }
        if raw.contains(['/', '\\']) {
            return Err(reject("name must not contain path separators".into()));
        }
        if raw.starts_with('.') {
            return Err(reject("name must not start with '.'".into()));
        }
        if !raw.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(reject("name must start with a letter".into()));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(reject(format!(
                "'{bad}' is not allowed; use letters, digits, '-' and '_'"
            )));
        }

        let module = raw.replace('-', "_");
        if PYTHON_KEYWORDS.contains(&module.as_str()) {
            return Err(reject(format!("'{module}' is a reserved Python keyword")));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Python package identifier: hyphens replaced by underscores.
    pub fn module_name(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        for ok in ["demo", "my-api", "service_2", "Backend"] {
            assert!(ProjectName::parse(ok).is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn module_name_replaces_hyphens() {
        let name = ProjectName::parse("my-cool-api").unwrap();
        assert_eq!(name.module_name(), "my_cool_api");
        assert_eq!(name.as_str(), "my-cool-api");
    }

    #[test]
    fn rejects_invalid_names() {
        let cases = [
            ("", "empty"),
            ("1api", "start with a letter"),
            ("-api", "start with a letter"),
            ("_private", "start with a letter"),
            ("a/b", "path separators"),
            ("..", "start with '.'"),
            (".hidden", "start with '.'"),
            ("my api", "whitespace"),
            ("api!", "'!' is not allowed"),
            ("class", "reserved Python keyword"),
        ];
        for (name, fragment) in cases {
            let err = ProjectName::parse(name).unwrap_err();
            assert!(
                err.to_string().contains(fragment),
                "{name:?}: expected '{fragment}' in '{err}'"
            );
        }
    }
}
