use std::borrow::Cow;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Canonical identifier for a module in the skein graph.
///
/// The identifier prefers canonical filesystem paths so we can safely compare
/// modules originating from different user inputs (relative vs absolute, `.`
/// vs `..`, etc.). Any two specifiers that resolve to the same underlying
/// file produce equal identifiers, which is what lets the traversal
/// deduplicate modules reachable through more than one path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(PathBuf);

impl ModuleId {
    /// Create a new module identifier from a filesystem path.
    ///
    /// Relative paths are joined against the current directory, the result is
    /// lexically cleaned, and then canonicalized when the file exists. A path
    /// that does not exist yet is kept in its cleaned form so identifiers can
    /// be constructed for error reporting.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ModuleIdError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(ModuleIdError::EmptyPath);
        }

        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|source| ModuleIdError::CurrentDir { source })?
                .join(path)
        };

        let cleaned = joined.clean();

        match std::fs::canonicalize(&cleaned) {
            Ok(canonical) => Ok(Self(canonical)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self(cleaned)),
            Err(err) => Err(ModuleIdError::Canonicalization {
                path: cleaned,
                source: err,
            }),
        }
    }

    /// Returns the underlying path representation.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume the identifier and return the owned path.
    pub fn into_path(self) -> PathBuf {
        self.0
    }

    /// The file name component, used for compact display in diagnostics.
    pub fn file_name(&self) -> Cow<'_, str> {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.path_string())
    }

    /// Borrow the identifier as a string for logging/serialization.
    pub fn path_string(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    fn from_serialized_path(path: PathBuf) -> Self {
        Self(path)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_string())
    }
}

impl Serialize for ModuleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.path_string())
    }
}

impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(ModuleId::from_serialized_path(PathBuf::from(value)))
    }
}

/// Errors produced while constructing a [`ModuleId`].
#[derive(Debug, Error)]
pub enum ModuleIdError {
    #[error("module paths must not be empty")]
    EmptyPath,

    #[error("failed to determine the current directory: {source}")]
    CurrentDir {
        #[source]
        source: io::Error,
    },

    #[error("failed to canonicalize '{}': {source}", .path.display())]
    Canonicalization {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
