//! Per-file symbol extraction.
//!
//! Turns one parsed file into a [`FileInfo`]: package name, imports in file
//! order, struct/enum records with their same-file inherent methods, trait
//! records, free functions, and top-level consts/statics. Cross-package
//! usage lists are filled separately by [`crate::resolve`].

mod helpers;
mod items;


pub(crate) use helpers::{flatten_use_tree, is_exported};

use crate::model::FileInfo;

/// Extracts local declarations from one parsed file.
///
/// All names are fully qualified as `<package>::<Item>`. Methods declared in
/// inherent `impl` blocks are attached to their owning type regardless of
/// declaration order within the file; they are never listed as functions.
pub fn extract_file(ast: &syn::File, package: &str) -> FileInfo {
    let mut info = FileInfo::new(package);
    items::extract_items(&mut info, package, &ast.items);
    items::attach_methods(&mut info, package, &ast.items);
    info
}
