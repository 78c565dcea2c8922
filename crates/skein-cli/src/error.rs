//! Error handling for the skein CLI.
//!
//! Domain errors from the bundler crates are aggregated into one
//! [`CliError`] and converted to `miette` reports at the binary boundary,
//! so users see rendered diagnostics while the library crates stay free of
//! presentation concerns.

use std::io;
use std::path::PathBuf;

use miette::Report;
use thiserror::Error;

use skein_bundler::{BuildError, EmitError};
use skein_graph::ModuleIdError;
use skein_resolve::IndexError;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or parsing failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Graph construction failed
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Bundle serialization failed
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// Project crawl failed
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A path could not be turned into a module identity
    #[error(transparent)]
    Identity(#[from] ModuleIdError),

    /// The entry path does not exist on disk
    #[error("entry file not found: {}", .0.display())]
    EntryMissing(PathBuf),

    /// I/O errors from writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors from the graph command
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a [`CliError`] to a miette report, attaching hints where the
/// failure has an obvious next step.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::EntryMissing(path) => miette::miette!(
            "entry file not found: {}\n\nHint: check the path, or pass a path relative to the current directory",
            path.display()
        ),
        CliError::Build(BuildError::EntryNotFound(entry)) => miette::miette!(
            "entry module is not part of the project index: {entry}\n\nHint: the entry must live under the index root; pass --root to widen it"
        ),
        CliError::Build(BuildError::UnresolvedSpecifier { specifier, from }) => miette::miette!(
            "failed to resolve '{specifier}' required from '{from}'\n\nHint: only relative specifiers with .js or /index.js targets resolve; package imports are not supported"
        ),
        other => miette::miette!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_specifier_report_names_both_sides() {
        let entry = skein_graph::ModuleId::new(std::env::temp_dir().join("main.js")).unwrap();
        let err = CliError::Build(BuildError::UnresolvedSpecifier {
            specifier: "./ghost".to_string(),
            from: entry,
        });

        let rendered = format!("{}", cli_error_to_miette(err));
        assert!(rendered.contains("./ghost"));
        assert!(rendered.contains("main.js"));
    }
}
