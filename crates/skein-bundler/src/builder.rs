use std::collections::VecDeque;

use thiserror::Error;
use tracing::{debug, info};

use skein_graph::{Dependency, DependencySource, ModuleId, ModuleTable, SourceError};

/// The completed result of one traversal: the frozen module table plus the
/// entry's identity.
///
/// Both serializers borrow the graph immutably, so they can run against the
/// same build without coordination.
#[derive(Debug)]
pub struct ModuleGraph {
    table: ModuleTable,
    entry: ModuleId,
}

impl ModuleGraph {
    pub fn table(&self) -> &ModuleTable {
        &self.table
    }

    pub fn entry(&self) -> &ModuleId {
        &self.entry
    }

    pub fn entry_record(&self) -> &skein_graph::ModuleRecord {
        // The builder inserts the entry before anything else.
        self.table
            .get(&self.entry)
            .expect("entry is always the first record in the table")
    }
}

/// Error that can occur while building the dependency graph.
///
/// Every variant is fatal for the current build: no partial table escapes,
/// and there is nothing to retry - traversal is a deterministic computation
/// over a static snapshot, so retrying with the same inputs cannot succeed.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("entry module not found: {0}")]
    EntryNotFound(ModuleId),

    #[error("module disappeared during traversal: {0}")]
    ModuleNotFound(ModuleId),

    #[error("failed to resolve '{specifier}' required from '{from}'")]
    UnresolvedSpecifier { specifier: String, from: ModuleId },

    #[error(transparent)]
    Source(SourceError),
}

/// Builds a [`ModuleGraph`] by breadth-first traversal from an entry module.
///
/// The traversal uses a FIFO work queue and treats the table itself as the
/// "seen" set: a dequeued identity already present in the table is skipped.
/// That check happens on dequeue, not on enqueue, so a module reachable via
/// several paths (or via a cycle) may sit in the queue more than once but is
/// processed exactly once. Termination follows: the seen set only grows, and
/// every non-duplicate dequeue shrinks the finite file set left to visit.
pub struct GraphBuilder<'s> {
    source: &'s dyn DependencySource,
}

impl<'s> GraphBuilder<'s> {
    pub fn new(source: &'s dyn DependencySource) -> Self {
        Self { source }
    }

    /// Traverse from `entry` and return the completed graph.
    ///
    /// The entry receives ordinal 0; every later module gets the next
    /// ordinal at first discovery. A module's dependency list is resolved in
    /// specifier order and is complete before its record enters the table.
    pub fn build(&self, entry: &ModuleId) -> Result<ModuleGraph, BuildError> {
        if !self.source.contains(entry) {
            return Err(BuildError::EntryNotFound(entry.clone()));
        }

        let mut table = ModuleTable::new();
        let mut queue = VecDeque::new();
        queue.push_back(entry.clone());

        while let Some(current) = queue.pop_front() {
            if table.contains(&current) {
                continue;
            }

            let source_text = self
                .source
                .source_text(&current)
                .map_err(|err| missing_module(err, &current))?;
            let specifiers = self
                .source
                .dependencies_of(&current)
                .map_err(|err| missing_module(err, &current))?;

            let mut dependencies = Vec::with_capacity(specifiers.len());
            for specifier in specifiers {
                let target = self.source.resolve(&current, &specifier).map_err(|err| {
                    match err {
                        SourceError::Unresolved { specifier, from } => {
                            BuildError::UnresolvedSpecifier { specifier, from }
                        }
                        other => BuildError::Source(other),
                    }
                })?;
                queue.push_back(target.clone());
                dependencies.push(Dependency { specifier, target });
            }

            let ordinal = table.insert(current.clone(), source_text, dependencies);
            debug!(module = %current, ordinal, "discovered module");
        }

        info!(modules = table.len(), entry = %entry, "dependency graph complete");

        Ok(ModuleGraph {
            table,
            entry: entry.clone(),
        })
    }
}

fn missing_module(err: SourceError, current: &ModuleId) -> BuildError {
    match err {
        SourceError::NotFound(_) => BuildError::ModuleNotFound(current.clone()),
        other => BuildError::Source(other),
    }
}
