//! Deterministic report composition.
//!
//! Renders one file's [`FileInfo`] — plus everything it uses from the rest
//! of the project — into the textual briefing consumed by prompt builders.
//! Sections appear in fixed order, only when non-empty, separated by blank
//! lines; iteration sources are all ordered, so the same project composes
//! to byte-identical output every time.

mod format;

#[cfg(test)]
mod tests;

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::model::{FileInfo, ProjectInfo, SymbolDef};
use crate::resolve::DefinitionIndex;

use format::{format_function, format_global_var, format_interface, format_struct};

/// Composes the briefing for one file of the project.
///
/// Returns [`AnalyzeError::FileInfoNotFound`] when the path is absent from
/// the project, never a silent empty report.
pub fn compose(project: &ProjectInfo, file_path: &Path) -> AnalyzeResult<String> {
    let info = project
        .get(file_path)
        .ok_or_else(|| AnalyzeError::FileInfoNotFound {
            path: file_path.to_path_buf(),
        })?;

    // Request-scoped enrichment index over every file's local declarations.
    let index = DefinitionIndex::from_files(project.values());

    let mut out = format!(
        "--- File: {} ---\nPackage: {}\n",
        file_path.display(),
        info.package_name
    );

    let mut sections: Vec<String> = Vec::new();

    if !info.imports.is_empty() {
        let mut s = String::from("Imports:\n");
        for import in &info.imports {
            s.push_str(&format!("- {import}\n"));
        }
        sections.push(s);
    }

    if !info.functions.is_empty() {
        let mut s = String::from("Functions:\n");
        for f in &info.functions {
            format_function(&mut s, f, "  ");
        }
        sections.push(s);
    }

    if !info.global_vars.is_empty() {
        let mut s = String::from("Global Variables/Constants:\n");
        for g in &info.global_vars {
            format_global_var(&mut s, g, "  ");
        }
        sections.push(s);
    }

    if !info.structs.is_empty() {
        let mut s = String::from("Local Structs:\n");
        for st in &info.structs {
            format_struct(&mut s, st, "  ");
        }
        sections.push(s);
    }

    if !info.interfaces.is_empty() {
        let mut s = String::from("Local Interfaces:\n");
        for iface in &info.interfaces {
            format_interface(&mut s, iface, "  ");
        }
        sections.push(s);
    }

    let used = compose_used_items(info, &index);
    if !used.is_empty() {
        sections.push(format!("Used Items From Other Packages:\n{used}"));
    }

    for section in sections {
        out.push('\n');
        out.push_str(&section);
    }
    Ok(out)
}

/// Merges the three used-imported lists into one section, deduplicated by
/// fully-qualified name with a single processed-set. On a cross-kind name
/// collision the first write wins and the second entry is dropped.
fn compose_used_items(info: &FileInfo, index: &DefinitionIndex) -> String {
    let mut out = String::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for s in &info.used_imported_structs {
        if !seen.insert(&s.name) {
            continue;
        }
        render_used(&mut out, &s.name, index);
    }
    for f in &info.used_imported_functions {
        if !seen.insert(&f.name) {
            continue;
        }
        render_used(&mut out, &f.name, index);
    }
    for g in &info.used_imported_global_vars {
        if !seen.insert(&g.name) {
            continue;
        }
        match index.get(&g.name) {
            Some(SymbolDef::Global(def)) => format_global_var(&mut out, def, "  "),
            _ if !g.ty.is_empty() => format_global_var(&mut out, g, "  "),
            _ => out.push_str(&format!("  - {}\n", g.name)),
        }
    }
    out
}

fn render_used(out: &mut String, name: &str, index: &DefinitionIndex) {
    match index.get(name) {
        Some(SymbolDef::Struct(s)) => format_struct(out, s, "  "),
        Some(SymbolDef::Interface(i)) => format_interface(out, i, "  "),
        Some(SymbolDef::Function(f)) => format_function(out, f, "  "),
        Some(SymbolDef::Global(_)) | None => out.push_str(&format!("  - {name}\n")),
    }
}
