//! Per-file import maps: local alias → full use-path.

use rustc_hash::FxHashMap;

/// Maps the names a file's `use` declarations bring into scope to their full
/// paths. `use other::Data` maps `Data` → `other::Data`; `use other::Data as
/// D` maps `D` → `other::Data`; globs contribute nothing (the bound names
/// are unknowable without type information).
#[derive(Debug, Default)]
pub struct ImportMap {
    aliases: FxHashMap<String, Vec<String>>,
}

impl ImportMap {
    /// Builds the map from every `use` declaration in the file, including
    /// those inside inline modules.
    pub fn from_file(ast: &syn::File) -> Self {
        let mut map = Self::default();
        map.collect_items(&ast.items);
        map
    }

    fn collect_items(&mut self, items: &[syn::Item]) {
        for item in items {
            match item {
                syn::Item::Use(u) => {
                    let mut prefix = Vec::new();
                    self.collect_tree(&u.tree, &mut prefix);
                }
                syn::Item::Mod(m) => {
                    if let Some((_, nested)) = &m.content {
                        self.collect_items(nested);
                    }
                }
                _ => {}
            }
        }
    }

    fn collect_tree(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(p) => {
                prefix.push(p.ident.to_string());
                self.collect_tree(&p.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(n) => {
                if n.ident == "self" {
                    if let Some(last) = prefix.last() {
                        self.aliases.insert(last.clone(), prefix.clone());
                    }
                } else {
                    let mut full = prefix.clone();
                    full.push(n.ident.to_string());
                    self.aliases.insert(n.ident.to_string(), full);
                }
            }
            syn::UseTree::Rename(r) => {
                let mut full = prefix.clone();
                full.push(r.ident.to_string());
                self.aliases.insert(r.rename.to_string(), full);
            }
            syn::UseTree::Glob(_) => {}
            syn::UseTree::Group(g) => {
                for item in &g.items {
                    self.collect_tree(item, prefix);
                }
            }
        }
    }

    /// Full path a local name expands to, if any `use` declaration bound it.
    pub fn expand(&self, name: &str) -> Option<&[String]> {
        self.aliases.get(name).map(|segs| segs.as_slice())
    }
}
