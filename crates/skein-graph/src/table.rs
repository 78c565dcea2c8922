use rustc_hash::FxHashMap;

use crate::{Dependency, ModuleId, ModuleRecord};

/// The record of all modules discovered during one build.
///
/// Arena-style: records live in a `Vec` in discovery order (first seen
/// first), with a side index from identity to ordinal. Entries are only ever
/// added, never removed or replaced, and the table is populated by exactly
/// one traversal before being handed to serializers by shared reference.
#[derive(Debug, Default)]
pub struct ModuleTable {
    records: Vec<ModuleRecord>,
    ordinals: FxHashMap<ModuleId, u32>,
}

impl ModuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-populated module, assigning the next ordinal.
    ///
    /// Ordinals increase monotonically from 0 in insertion order; the first
    /// module inserted (the entry) always receives ordinal 0. Inserting an
    /// identity that is already present returns its existing ordinal and
    /// leaves the table unchanged.
    pub fn insert(&mut self, id: ModuleId, source: String, dependencies: Vec<Dependency>) -> u32 {
        if let Some(&existing) = self.ordinals.get(&id) {
            return existing;
        }

        let ordinal = self.records.len() as u32;
        self.ordinals.insert(id.clone(), ordinal);
        self.records
            .push(ModuleRecord::new(id, source, ordinal, dependencies));
        ordinal
    }

    pub fn contains(&self, id: &ModuleId) -> bool {
        self.ordinals.contains_key(id)
    }

    pub fn get(&self, id: &ModuleId) -> Option<&ModuleRecord> {
        self.ordinals
            .get(id)
            .map(|&ordinal| &self.records[ordinal as usize])
    }

    pub fn ordinal_of(&self, id: &ModuleId) -> Option<u32> {
        self.ordinals.get(id).copied()
    }

    pub fn by_ordinal(&self, ordinal: u32) -> Option<&ModuleRecord> {
        self.records.get(ordinal as usize)
    }

    /// Records in discovery order.
    pub fn records(&self) -> &[ModuleRecord] {
        &self.records
    }

    /// Iterate records in discovery order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ModuleRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ModuleId {
        ModuleId::new(std::env::temp_dir().join(name)).unwrap()
    }

    #[test]
    fn ordinals_follow_insertion_order() {
        let mut table = ModuleTable::new();
        assert_eq!(table.insert(id("entry.js"), String::new(), Vec::new()), 0);
        assert_eq!(table.insert(id("a.js"), String::new(), Vec::new()), 1);
        assert_eq!(table.insert(id("b.js"), String::new(), Vec::new()), 2);

        let ordinals: Vec<u32> = table.iter().map(|r| r.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut table = ModuleTable::new();
        table.insert(id("entry.js"), "first".to_string(), Vec::new());
        let again = table.insert(id("entry.js"), "second".to_string(), Vec::new());

        assert_eq!(again, 0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&id("entry.js")).unwrap().source(), "first");
    }

    #[test]
    fn lookup_by_identity_and_ordinal_agree() {
        let mut table = ModuleTable::new();
        table.insert(id("entry.js"), String::new(), Vec::new());
        table.insert(id("dep.js"), String::new(), Vec::new());

        let dep = id("dep.js");
        let ordinal = table.ordinal_of(&dep).unwrap();
        assert_eq!(table.by_ordinal(ordinal).unwrap().id(), &dep);
    }
}
