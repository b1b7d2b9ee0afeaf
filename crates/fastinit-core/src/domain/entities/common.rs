use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay below whatever root it is joined to.
///
/// Invariant: non-empty, never absolute, only normal components (no `.`,
/// `..`, roots or drive prefixes). Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path is not a plain relative path (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        match Self::try_new(path) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let reject = |reason: &str| DomainError::InvalidPath {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        if path.as_os_str().is_empty() {
            return Err(reject("path is empty"));
        }
        if path.is_absolute() || path.has_root() {
            return Err(reject("absolute paths are not allowed"));
        }
        // `components()` normalises away interior `.` and empty segments.
        for segment in path.to_string_lossy().split(['/', '\\']) {
            match segment {
                "" => return Err(reject("empty path segments are not allowed")),
                "." => return Err(reject("'.' segments are not allowed")),
                _ => {}
            }
        }
        for component in path.components() {
            match component {
                Component::Normal(_) => {}
                Component::ParentDir => return Err(reject("path traversal ('..') is not allowed")),
                Component::CurDir => return Err(reject("'.' segments are not allowed")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(reject("absolute paths are not allowed"));
                }
            }
        }

        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }

    /// Parent directory, or `None` for a top-level entry.
    pub fn parent(&self) -> Option<RelativePath> {
        self.0
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Self(p.to_path_buf()))
    }

    /// Every ancestor directory, outermost first.
    pub fn ancestors(&self) -> Vec<RelativePath> {
        let mut out = Vec::new();
        let mut current = self.parent();
        while let Some(dir) = current {
            current = dir.parent();
            out.push(dir);
        }
        out.reverse();
        out
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_paths() {
        let p = RelativePath::try_new("app/api/v1/users.py").unwrap();
        assert_eq!(p.as_str(), "app/api/v1/users.py");
    }

    #[test]
    fn rejects_traversal_and_absolute() {
        for bad in ["../escape.py", "app/../../x", "/etc/passwd", "./app/main.py", ""] {
            let err = RelativePath::try_new(bad).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidPath { .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_interior_dot_and_empty_segments() {
        for bad in ["app/./x.py", "app/.", "app//x.py", "app/"] {
            let err = RelativePath::try_new(bad).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidPath { .. }),
                "{bad} should be rejected"
            );
        }
        assert!(RelativePath::try_new(".env").is_ok());
        assert!(RelativePath::try_new("app/.hidden/x.py").is_ok());
    }

    #[test]
    #[should_panic(expected = "path traversal")]
    fn new_panics_on_traversal() {
        let _ = RelativePath::new("../outside");
    }

    #[test]
    fn ancestors_are_outermost_first() {
        let p = RelativePath::new("app/api/v1/users.py");
        let dirs: Vec<_> = p.ancestors().iter().map(|d| d.to_string()).collect();
        assert_eq!(dirs, vec!["app", "app/api", "app/api/v1"]);
        assert!(RelativePath::new(".env").ancestors().is_empty());
    }
}
