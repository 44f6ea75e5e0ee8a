//! Package-level dependency graph.
//!
//! Answers "what depends on what" at package granularity, independent of the
//! composer: one node per loaded package, edges to every package its files
//! import. Edges may point outside the project (std, third-party); such
//! dangling edges simply have no node.


use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::extract::{flatten_use_tree, is_exported};
use crate::frontend::{self, Package};
use crate::model::{DependencyGraph, Node};

/// Builds the dependency graph for the project under `root`.
///
/// Packages whose every file failed to parse are skipped with a warning and
/// produce no node; the build fails only when nothing loads at all.
pub fn build_graph(root: &Path) -> AnalyzeResult<DependencyGraph> {
    tracing::debug!("building graph for {}", root.display());
    let packages = frontend::load_project(root)?;

    let mut graph = DependencyGraph::new();
    for pkg in &packages {
        if pkg.files.is_empty() {
            tracing::warn!(
                "skipping package {}: no loadable files ({} errors)",
                pkg.name,
                pkg.diagnostics.len()
            );
            continue;
        }
        graph.nodes.insert(pkg.name.clone(), build_node(pkg));
    }

    if graph.nodes.is_empty() {
        return Err(AnalyzeError::NoPackages {
            root: root.to_path_buf(),
        });
    }
    Ok(graph)
}

fn build_node(pkg: &Package) -> Node {
    let mut depends_on = BTreeSet::new();
    let mut functions = Vec::new();
    for file in &pkg.files {
        collect_items(&file.ast.items, &pkg.name, &mut depends_on, &mut functions);
    }
    Node {
        pkg_path: pkg.name.clone(),
        functions,
        depends_on: depends_on.into_iter().collect(),
        files: pkg.files.iter().map(|f| f.path.clone()).collect(),
    }
}

fn collect_items(
    items: &[syn::Item],
    package: &str,
    depends_on: &mut BTreeSet<String>,
    functions: &mut Vec<String>,
) {
    for item in items {
        match item {
            syn::Item::Use(u) => {
                let mut paths = Vec::new();
                flatten_use_tree(&u.tree, &mut paths);
                for path in paths {
                    let head = path.split("::").next().unwrap_or_default();
                    if !matches!(head, "crate" | "self" | "super") && head != package {
                        depends_on.insert(head.to_string());
                    }
                }
            }
            syn::Item::Fn(f) => {
                if is_exported(&f.vis) {
                    functions.push(f.sig.ident.to_string());
                }
            }
            syn::Item::Impl(imp) if imp.trait_.is_none() => {
                for impl_item in &imp.items {
                    if let syn::ImplItem::Fn(method) = impl_item {
                        if is_exported(&method.vis) {
                            functions.push(method.sig.ident.to_string());
                        }
                    }
                }
            }
            syn::Item::Mod(m) => {
                if let Some((_, nested)) = &m.content {
                    collect_items(nested, package, depends_on, functions);
                }
            }
            _ => {}
        }
    }
}
