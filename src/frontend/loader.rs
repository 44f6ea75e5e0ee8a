//! Package discovery and parallel file parsing.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{AnalyzeError, AnalyzeResult};

use super::read_package_name;

/// One parsed source file.
pub struct SourceFile {
    pub path: PathBuf,
    pub ast: syn::File,
}

/// A loaded package: its manifest-declared name, its directory, its parsed
/// files, and any non-fatal per-file diagnostics.
pub struct Package {
    /// Package name with `-` normalized to `_`, matching how source code
    /// refers to the crate.
    pub name: String,
    /// Directory containing the package manifest.
    pub root: PathBuf,
    /// Parsed source files, sorted by path.
    pub files: Vec<SourceFile>,
    /// Messages for files that failed to parse and were excluded.
    pub diagnostics: Vec<String>,
}

/// Parses a single source file, preserving doc comments.
pub fn parse_source(path: &Path, src: &str) -> AnalyzeResult<syn::File> {
    syn::parse_file(src).map_err(|e| AnalyzeError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Discovers and loads every package under `root`.
///
/// A package is a directory holding a `Cargo.toml` with a `[package]` name;
/// it owns the `.rs` files beneath it that are not owned by a more deeply
/// nested package. Files are parsed in parallel; a file that fails to parse
/// is recorded as a package diagnostic and excluded, so the pass favors
/// partial results over total failure.
pub fn load_project(root: &Path) -> AnalyzeResult<Vec<Package>> {
    std::fs::metadata(root)?;

    let mut packages: Vec<Package> = Vec::new();
    let mut source_paths: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(keep_entry) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if entry.file_name() == "Cargo.toml" {
            if let Some(name) = read_package_name(path) {
                if let Some(dir) = path.parent() {
                    packages.push(Package {
                        name: name.replace('-', "_"),
                        root: dir.to_path_buf(),
                        files: Vec::new(),
                        diagnostics: Vec::new(),
                    });
                }
            }
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            source_paths.push(path.to_path_buf());
        }
    }

    if packages.is_empty() {
        return Err(AnalyzeError::NoPackages {
            root: root.to_path_buf(),
        });
    }

    // Deepest package directory wins ownership of a file.
    let mut owned: Vec<(usize, PathBuf)> = Vec::new();
    for path in source_paths {
        let owner = packages
            .iter()
            .enumerate()
            .filter(|(_, pkg)| path.starts_with(&pkg.root))
            .max_by_key(|(_, pkg)| pkg.root.components().count())
            .map(|(idx, _)| idx);
        if let Some(idx) = owner {
            owned.push((idx, path));
        }
    }

    let parsed: Vec<(usize, Result<SourceFile, String>)> = owned
        .into_iter()
        .map(|(idx, path)| {
            let result = std::fs::read_to_string(&path)
                .map_err(|e| format!("{}: {e}", path.display()))
                .and_then(|src| {
                    syn::parse_file(&src)
                        .map(|ast| SourceFile {
                            path: path.clone(),
                            ast,
                        })
                        .map_err(|e| format!("{}: {e}", path.display()))
                });
            (idx, result)
        })
        .collect();

    for (idx, result) in parsed {
        match result {
            Ok(file) => packages[idx].files.push(file),
            Err(message) => {
                tracing::warn!("excluding file from pass: {message}");
                packages[idx].diagnostics.push(message);
            }
        }
    }

    packages.sort_by(|a, b| a.name.cmp(&b.name));
    for pkg in &mut packages {
        pkg.files.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!(
            "loaded package {} ({} files, {} skipped)",
            pkg.name,
            pkg.files.len(),
            pkg.diagnostics.len()
        );
    }
    Ok(packages)
}

fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && name != "target"
}
