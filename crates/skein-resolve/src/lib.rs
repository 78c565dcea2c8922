//! # skein-resolve
//!
//! The collaborators the bundler core treats as external: a build-once
//! [`FileIndex`] of candidate source files (the module indexer) and a
//! [`Resolver`] that turns `require` specifiers into concrete identities
//! against that snapshot.
//!
//! [`DiskSource`] composes the two behind the
//! [`DependencySource`](skein_graph::DependencySource) seam the core
//! consumes. The index is an explicit value handed into each build - never
//! process-global state - so traversal stays pure and testable.

mod index;
mod resolver;
mod source;

pub use index::{FileIndex, IndexError, DEFAULT_EXTENSIONS};
pub use resolver::Resolver;
pub use source::DiskSource;
