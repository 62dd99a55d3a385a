use fxhash::FxHashMap;

use crate::name::Name;

/// Names re-exported by `export`, each standing for one global declaration.
///
/// Entries are only ever added; exporting an existing alias again points it
/// at the newer target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: FxHashMap<Name, Name>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `alias → target`, returning the target it replaced.
    pub fn insert(&mut self, alias: Name, target: Name) -> Option<Name> {
        log::debug!("alias `{}` → `{}`", alias, target);
        self.entries.insert(alias, target)
    }

    pub fn get(&self, alias: &Name) -> Option<&Name> {
        self.entries.get(alias)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by alias.
    pub fn entries(&self) -> Vec<(&Name, &Name)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort();
        entries
    }
}
