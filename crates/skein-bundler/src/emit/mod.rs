//! Bundle serialization strategies.
//!
//! Both strategies consume the same frozen [`ModuleGraph`] and produce one
//! UTF-8 text artifact. The registry strategy defers `require` to a tiny
//! bootstrap runtime at load time and is therefore immune to cycles; the
//! inlining strategy eliminates the runtime entirely by splicing dependency
//! bodies into their requirers, and rejects cyclic graphs up front.

mod inline;
mod registry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ModuleGraph;

pub use inline::emit_inline;
pub use registry::emit_registry;

/// How the module graph is serialized into an artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Loader functions keyed by ordinal plus a bootstrap runtime.
    #[default]
    Registry,
    /// Dependency bodies textually substituted into their requirers.
    Inline,
}

impl Strategy {
    fn as_str(&self) -> &'static str {
        match self {
            Strategy::Registry => "registry",
            Strategy::Inline => "inline",
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "registry" => Ok(Strategy::Registry),
            "inline" => Ok(Strategy::Inline),
            other => Err(format!("unknown serialization strategy: {other}")),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error that can occur during serialization.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The inlining strategy met a dependency cycle. Unbounded textual
    /// substitution cannot terminate on a cycle, so the strategy refuses the
    /// graph; the registry strategy handles the same graph fine.
    #[error("cannot inline a cyclic module graph: {cycle}\n\nHint: bundle with the registry strategy, which resolves require() at load time")]
    CyclicInline { cycle: String },
}

/// Serialize `graph` with the chosen strategy.
pub fn emit(graph: &ModuleGraph, strategy: Strategy) -> Result<String, EmitError> {
    match strategy {
        Strategy::Registry => Ok(emit_registry(graph)),
        Strategy::Inline => emit_inline(graph),
    }
}
