//! # skein-bundler
//!
//! The bundler core: one breadth-first traversal that turns an entry module
//! into a complete [`ModuleGraph`], and two serialization strategies that
//! turn the graph into a runnable artifact.
//!
//! - [`GraphBuilder`] discovers the transitive closure of statically
//!   `require`d modules through a [`DependencySource`](skein_graph::DependencySource),
//!   deduplicating modules reachable via multiple paths (or cycles) and
//!   assigning each a discovery ordinal, entry first at 0.
//! - [`emit_registry`] wraps every module in a loader function keyed by its
//!   ordinal and prepends a small bootstrap runtime; `require` is resolved
//!   at load time, so cycles are tolerated.
//! - [`emit_inline`] substitutes each dependency's body text directly into
//!   its requirers, producing a single expression with no runtime; cyclic
//!   graphs are rejected up front.
//!
//! The crate emits `tracing` events but never installs a subscriber - that
//! is the embedding application's decision.

mod builder;
pub mod emit;
mod output;

pub use builder::{BuildError, GraphBuilder, ModuleGraph};
pub use emit::{emit, emit_inline, emit_registry, EmitError, Strategy};
pub use output::write_bundle;
