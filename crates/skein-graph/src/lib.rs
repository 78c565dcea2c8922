//! # skein-graph
//!
//! Pure data structures for the skein module dependency graph.
//!
//! This crate holds everything the bundler core needs that does not touch the
//! filesystem:
//!
//! - [`ModuleId`] - canonical identity of a source file
//! - [`ModuleRecord`] / [`ModuleTable`] - the discovered modules, in
//!   discovery order, with their resolved dependency edges
//! - [`DependencySource`] - the seam behind which indexing and specifier
//!   resolution live (implemented by `skein-resolve` for real projects and by
//!   in-memory fixtures in tests)
//! - [`requires`] - the one narrowly-scoped utility that knows what a
//!   `require('...')` occurrence looks like as text
//!
//! The traversal that populates a [`ModuleTable`] and the serializers that
//! consume it live in `skein-bundler`; this crate deliberately has no I/O so
//! the graph model stays trivially testable.
//!
//! ## Quick start
//!
//! ```rust
//! use skein_graph::{ModuleId, ModuleTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entry = ModuleId::new("src/index.js")?;
//!
//! let mut table = ModuleTable::new();
//! let ordinal = table.insert(entry.clone(), "module.exports = 1;".to_string(), Vec::new());
//! assert_eq!(ordinal, 0);
//! assert!(table.contains(&entry));
//! # Ok(())
//! # }
//! ```

mod module;
mod module_id;
pub mod requires;
mod source;
mod table;

pub use module::{Dependency, ModuleRecord};
pub use module_id::{ModuleId, ModuleIdError};
pub use source::{DependencySource, SourceError};
pub use table::ModuleTable;
