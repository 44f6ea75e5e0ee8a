//! Project-wide definition index.
//!
//! A derived, request-scoped read-only structure: a pure function of the
//! extracted file set, rebuilt per pass (and per compose call) rather than
//! held as long-lived mutable state.

use rustc_hash::FxHashMap;

use crate::model::{FileInfo, SymbolDef};

/// Fully-qualified name → detailed definition, over every file's local
/// declaration lists. On a name collision the first definition seen wins;
/// iteration order over the file set is deterministic, so so is the index.
#[derive(Debug, Default)]
pub struct DefinitionIndex {
    defs: FxHashMap<String, SymbolDef>,
}

impl DefinitionIndex {
    /// Builds the index by scanning each file's structs, interfaces,
    /// functions, and globals once.
    pub fn from_files<'a>(files: impl Iterator<Item = &'a FileInfo>) -> Self {
        let mut index = Self::default();
        for info in files {
            for s in &info.structs {
                index.insert(SymbolDef::Struct(s.clone()));
            }
            for i in &info.interfaces {
                index.insert(SymbolDef::Interface(i.clone()));
            }
            for f in &info.functions {
                index.insert(SymbolDef::Function(f.clone()));
            }
            for g in &info.global_vars {
                index.insert(SymbolDef::Global(g.clone()));
            }
        }
        index
    }

    fn insert(&mut self, def: SymbolDef) {
        self.defs.entry(def.name().to_string()).or_insert(def);
    }

    /// Looks up a definition by fully-qualified name.
    pub fn get(&self, name: &str) -> Option<&SymbolDef> {
        self.defs.get(name)
    }

    /// Number of indexed definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// True when no definitions are indexed.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
