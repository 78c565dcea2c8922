use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::{ModuleId, ModuleIdError};

/// Error produced by a [`DependencySource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The identity does not correspond to a known, readable source file.
    #[error("module not found: {0}")]
    NotFound(ModuleId),

    /// No file satisfies `specifier` relative to the requiring module.
    #[error("cannot resolve '{specifier}' from '{from}'")]
    Unresolved { specifier: String, from: ModuleId },

    /// A read failed for a reason other than absence.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A resolved path could not be turned into a canonical identity.
    #[error(transparent)]
    Identity(#[from] ModuleIdError),
}

/// The two capabilities the bundler core consumes from the outside world:
/// listing a file's immediate dependency specifiers and resolving a
/// specifier, relative to its requiring file, to a concrete identity.
///
/// The production implementation (`skein-resolve`) wraps a crawl snapshot of
/// the project plus filesystem reads; tests substitute in-memory fixtures.
/// Implementations must be pure with respect to the graph build: resolution
/// depends only on its inputs and the underlying snapshot, and repeated
/// calls with the same inputs return the same answers.
pub trait DependencySource {
    /// Whether `id` is a known source file. Used to validate the entry
    /// before any traversal work happens.
    fn contains(&self, id: &ModuleId) -> bool;

    /// The raw text of the module.
    fn source_text(&self, id: &ModuleId) -> Result<String, SourceError>;

    /// The module's `require` specifiers in first-occurrence order, repeated
    /// specifiers deduplicated. Stable across calls.
    fn dependencies_of(&self, id: &ModuleId) -> Result<Vec<String>, SourceError> {
        Ok(crate::requires::scan_requires(&self.source_text(id)?))
    }

    /// Resolve `specifier` as written in `from` to a concrete identity.
    fn resolve(&self, from: &ModuleId, specifier: &str) -> Result<ModuleId, SourceError>;
}
