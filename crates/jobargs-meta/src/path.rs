//! Scene paths and scene object handles

use std::fmt;

use serde::Serialize;

/// A prim path in the output scene, e.g. `/World/Looks`.
///
/// Paths are slash-separated identifiers. The empty path means "no path".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct ScenePath(String);

/// A string that is not a well-formed scene path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid scene path '{path}'")]
pub struct InvalidScenePath {
    pub path: String,
}

impl ScenePath {
    /// The empty path.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// The absolute root path `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Parse a path, absolute or relative. The empty string parses to the
    /// empty path.
    ///
    /// ```
    /// use jobargs_meta::ScenePath;
    ///
    /// assert!(ScenePath::parse("/World/Looks").unwrap().is_absolute());
    /// assert!(ScenePath::parse("Looks").is_ok());
    /// assert!(ScenePath::parse("/World//Looks").is_err());
    /// assert!(ScenePath::parse("/1abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidScenePath> {
        if s.is_empty() || s == "/" {
            return Ok(Self(s.to_string()));
        }

        let body = s.strip_prefix('/').unwrap_or(s);
        if body.split('/').all(is_identifier) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidScenePath {
                path: s.to_string(),
            })
        }
    }

    /// Anchor a relative path at the root. Empty and absolute paths are
    /// returned unchanged.
    pub fn make_absolute(self) -> Self {
        if self.0.is_empty() || self.is_absolute() {
            self
        } else {
            Self(format!("/{}", self.0))
        }
    }

    /// Append a child identifier.
    pub fn append_child(&self, name: &str) -> Result<Self, InvalidScenePath> {
        let joined = match self.0.as_str() {
            "" => name.to_string(),
            "/" => format!("/{}", name),
            base => format!("{}/{}", base, name),
        };
        Self::parse(&joined)
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last path element, or the empty string for the root and empty paths.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl fmt::Display for ScenePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a scene object selected for export.
///
/// Handles are stored verbatim; nothing checks that the object exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DagPath(String);

impl DagPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DagPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for DagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
