//! Whole-project analysis pass.
//!
//! Ties the other layers together: load and parse every package, extract each
//! file's declarations, index them project-wide, then resolve cross-package
//! references against that index. The result maps each source path to its
//! fully-populated [`FileInfo`], ready for the composer.

#[cfg(test)]
mod tests;

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::extract::extract_file;
use crate::frontend;
use crate::model::ProjectInfo;
use crate::resolve::{DefinitionIndex, resolve_usages};

/// Analyzes every package under `root` and returns per-file extraction
/// results, keyed by source path.
///
/// Runs in three phases: extraction of every file's own declarations, a
/// project-wide definition index over those declarations, then reference
/// resolution per file against the index. A file that fails to parse is
/// excluded by the loader; the pass errors only when no file loads at all.
pub fn parse_project(root: &Path) -> AnalyzeResult<ProjectInfo> {
    let packages = frontend::load_project(root)?;

    let known: FxHashSet<String> = packages.iter().map(|p| p.name.clone()).collect();

    let mut project = ProjectInfo::new();
    for pkg in &packages {
        for file in &pkg.files {
            let info = extract_file(&file.ast, &pkg.name);
            project.insert(file.path.clone(), info);
        }
    }

    if project.is_empty() {
        return Err(AnalyzeError::NoPackages {
            root: root.to_path_buf(),
        });
    }

    let index = DefinitionIndex::from_files(project.values());
    tracing::debug!(
        "indexed {} definitions across {} files",
        index.len(),
        project.len()
    );

    for pkg in &packages {
        for file in &pkg.files {
            if let Some(info) = project.get_mut(&file.path) {
                resolve_usages(&file.ast, &pkg.name, &known, &index, info);
            }
        }
    }
    Ok(project)
}
