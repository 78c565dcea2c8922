use serde::Serialize;

use crate::ModuleId;

/// One resolved `require` edge: the specifier exactly as written in source,
/// and the module it resolves to from the owning module's location.
#[derive(Debug, Clone, Serialize)]
pub struct Dependency {
    pub specifier: String,
    pub target: ModuleId,
}

/// A discovered module: identity, raw source text, discovery ordinal, and
/// the ordered specifier-to-target pairs collected during traversal.
///
/// Records are fully populated by the graph builder before they enter the
/// [`ModuleTable`](crate::ModuleTable) and are never mutated afterwards. The
/// `dependencies` list preserves first-occurrence order of the specifiers in
/// source, with repeated identical specifiers collapsed to one entry.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleRecord {
    id: ModuleId,
    #[serde(skip_serializing)]
    source: String,
    ordinal: u32,
    dependencies: Vec<Dependency>,
}

impl ModuleRecord {
    pub(crate) fn new(
        id: ModuleId,
        source: String,
        ordinal: u32,
        dependencies: Vec<Dependency>,
    ) -> Self {
        Self {
            id,
            source,
            ordinal,
            dependencies,
        }
    }

    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Numeric id assigned at first discovery, starting at 0 for the entry.
    ///
    /// Stable for the lifetime of one build only.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Dependency edges in specifier-discovery order.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Look up the target a specifier resolves to from this module.
    ///
    /// Specifiers are only meaningful relative to their owning module, which
    /// is why this lookup lives on the record rather than on the table.
    pub fn resolve_specifier(&self, specifier: &str) -> Option<&ModuleId> {
        self.dependencies
            .iter()
            .find(|dep| dep.specifier == specifier)
            .map(|dep| &dep.target)
    }
}
