//! Cross-package reference resolution.
//!
//! Scans a file for symbols declared in other packages and fills the
//! used-imported lists of its [`FileInfo`]: a reference whose definition is
//! found in the project-wide [`DefinitionIndex`] is enriched to the full
//! record; anything else degrades to a bare name stub. A resolution miss is
//! never an error.

mod imports;
mod index;
mod usage;


pub use imports::ImportMap;
pub use index::DefinitionIndex;

use rustc_hash::FxHashSet;
use syn::visit::Visit;

use crate::model::{FileInfo, FunctionInfo, GlobalVarInfo, StructInfo, SymbolDef};

use usage::{Surface, UsageCollector};

/// Fills the used-imported lists of `info` from the file's syntax tree.
///
/// Each distinct fully-qualified name lands in exactly one list. Index hits
/// decide the kind and provide the full record (a trait reference stays a
/// name-only entry in the structs list; the composer renders it from the
/// index). Misses are placed by detection surface, and a value path is only
/// kept when its item looks like a constant (SCREAMING_CASE).
pub fn resolve_usages(
    ast: &syn::File,
    package: &str,
    known_packages: &FxHashSet<String>,
    index: &DefinitionIndex,
    info: &mut FileInfo,
) {
    let imports = ImportMap::from_file(ast);
    let mut collector = UsageCollector::new(package, &imports, known_packages);
    collector.visit_file(ast);

    for (fq, r) in collector.into_refs() {
        match index.get(&fq) {
            Some(SymbolDef::Struct(s)) => info.used_imported_structs.push(s.clone()),
            Some(SymbolDef::Interface(_)) => {
                info.used_imported_structs.push(StructInfo::stub(fq))
            }
            Some(SymbolDef::Function(f)) => info.used_imported_functions.push(f.clone()),
            Some(SymbolDef::Global(g)) => info.used_imported_global_vars.push(g.clone()),
            None => {
                if r.type_like || r.surface == Surface::Type {
                    info.used_imported_structs.push(StructInfo::stub(fq));
                } else if r.surface == Surface::Call {
                    info.used_imported_functions.push(FunctionInfo::stub(fq));
                } else if is_screaming(&r.item) {
                    info.used_imported_global_vars.push(GlobalVarInfo::stub(fq));
                }
            }
        }
    }
}

/// Constant-style name: has letters, none of them lowercase.
fn is_screaming(name: &str) -> bool {
    name.chars().any(|c| c.is_alphabetic()) && !name.chars().any(|c| c.is_lowercase())
}
