//! Usage scanning: every place a file references a symbol declared in
//! another package.
//!
//! Detection is syntactic. A path counts as external when its head segment
//! expands through the file's import map, or when a multi-segment path leads
//! with a known project package (or a std root crate). Bare names that no
//! `use` declaration bound are local or prelude and are ignored.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use syn::visit::Visit;

use super::imports::ImportMap;

/// Where a reference was detected; decides stub placement on a resolution
/// miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Surface {
    /// A type position: field, parameter, return, local ascription, literal.
    Type,
    /// The callee of a call expression.
    Call,
    /// A qualified path in value position.
    Value,
}

/// One detected external reference, keyed by fully-qualified name.
#[derive(Debug, Clone)]
pub(crate) struct ExternalRef {
    pub item: String,
    pub surface: Surface,
    /// True when segments follow the item (`pkg::Data::new`): the item is
    /// being used as a type qualifier whatever the surface.
    pub type_like: bool,
}

pub(crate) struct UsageCollector<'a> {
    package: &'a str,
    imports: &'a ImportMap,
    known_packages: &'a FxHashSet<String>,
    refs: IndexMap<String, ExternalRef>,
}

impl<'a> UsageCollector<'a> {
    pub(crate) fn new(
        package: &'a str,
        imports: &'a ImportMap,
        known_packages: &'a FxHashSet<String>,
    ) -> Self {
        Self {
            package,
            imports,
            known_packages,
            refs: IndexMap::new(),
        }
    }

    /// Detected references in first-seen order, deduplicated by name.
    pub(crate) fn into_refs(self) -> IndexMap<String, ExternalRef> {
        self.refs
    }

    /// Resolves a path to `(fq_name, item, type_like)` when it points
    /// outside the current package, `None` otherwise.
    fn resolve_path(&self, path: &syn::Path) -> Option<(String, String, bool)> {
        let segs: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let first = segs.first()?;
        if matches!(first.as_str(), "crate" | "self" | "super" | "Self") {
            return None;
        }
        let mapped = self.imports.expand(first);
        let full: Vec<String> = match mapped {
            Some(expansion) => expansion
                .iter()
                .cloned()
                .chain(segs.iter().skip(1).cloned())
                .collect(),
            None => {
                if segs.len() < 2 {
                    return None;
                }
                segs.clone()
            }
        };
        let head = full[0].clone();
        if matches!(head.as_str(), "crate" | "self" | "super") {
            return None;
        }
        if head == self.package {
            return None;
        }
        if mapped.is_none()
            && !self.known_packages.contains(&head)
            && !matches!(head.as_str(), "std" | "core" | "alloc")
        {
            return None;
        }
        if full.len() < 2 {
            return None;
        }
        // The item is the first upper-initial segment after the head, so
        // `pkg::sub::Thing`, `pkg::Data::new` and `pkg::MAX` all land on
        // the right name; lowercase-only paths take the last segment.
        let item_idx = full[1..]
            .iter()
            .position(|s| s.chars().next().is_some_and(|c| c.is_uppercase()))
            .map(|i| i + 1)
            .unwrap_or(full.len() - 1);
        let item = full[item_idx].clone();
        let type_like = item_idx < full.len() - 1;
        Some((format!("{head}::{item}"), item, type_like))
    }

    fn record_path(&mut self, path: &syn::Path, surface: Surface) {
        if let Some((fq, item, type_like)) = self.resolve_path(path) {
            self.refs.entry(fq).or_insert(ExternalRef {
                item,
                surface,
                type_like,
            });
        }
    }

    /// Types appearing as generic arguments anywhere along a path
    /// (turbofish included).
    fn scan_path_generics(&mut self, path: &syn::Path) {
        for seg in &path.segments {
            if let syn::PathArguments::AngleBracketed(ab) = &seg.arguments {
                for arg in &ab.args {
                    if let syn::GenericArgument::Type(ty) = arg {
                        self.collect_type(ty);
                    }
                }
            }
        }
    }

    /// Recursive type walk. References, pointers, slices, arrays, and
    /// groups are unwrapped; tuple elements are walked; for map-like
    /// generics the key type argument is not tracked.
    fn collect_type(&mut self, ty: &syn::Type) {
        match ty {
            syn::Type::Reference(r) => self.collect_type(&r.elem),
            syn::Type::Ptr(p) => self.collect_type(&p.elem),
            syn::Type::Slice(s) => self.collect_type(&s.elem),
            syn::Type::Array(a) => self.collect_type(&a.elem),
            syn::Type::Paren(p) => self.collect_type(&p.elem),
            syn::Type::Group(g) => self.collect_type(&g.elem),
            syn::Type::Tuple(t) => {
                for elem in &t.elems {
                    self.collect_type(elem);
                }
            }
            syn::Type::Path(tp) => {
                if let Some(qself) = &tp.qself {
                    self.collect_type(&qself.ty);
                    return;
                }
                self.record_path(&tp.path, Surface::Type);
                if let Some(last) = tp.path.segments.last() {
                    if let syn::PathArguments::AngleBracketed(ab) = &last.arguments {
                        let skip_key = last.ident.to_string().ends_with("Map");
                        let mut type_args = 0usize;
                        for arg in &ab.args {
                            if let syn::GenericArgument::Type(inner) = arg {
                                type_args += 1;
                                if skip_key && type_args == 1 {
                                    continue;
                                }
                                self.collect_type(inner);
                            }
                        }
                    }
                }
            }
            syn::Type::ImplTrait(it) => {
                for bound in &it.bounds {
                    self.collect_bound(bound);
                }
            }
            syn::Type::TraitObject(to) => {
                for bound in &to.bounds {
                    self.collect_bound(bound);
                }
            }
            syn::Type::BareFn(f) => {
                for input in &f.inputs {
                    self.collect_type(&input.ty);
                }
                if let syn::ReturnType::Type(_, out) = &f.output {
                    self.collect_type(out);
                }
            }
            _ => {}
        }
    }

    fn collect_bound(&mut self, bound: &syn::TypeParamBound) {
        if let syn::TypeParamBound::Trait(t) = bound {
            self.record_path(&t.path, Surface::Type);
            self.scan_path_generics(&t.path);
        }
    }
}

impl<'ast> Visit<'ast> for UsageCollector<'_> {
    // Use declarations name symbols without using them.
    fn visit_item_use(&mut self, _node: &'ast syn::ItemUse) {}

    fn visit_type(&mut self, node: &'ast syn::Type) {
        self.collect_type(node);
    }

    // Covers generic parameter bounds, where clauses, and supertraits.
    fn visit_trait_bound(&mut self, node: &'ast syn::TraitBound) {
        self.record_path(&node.path, Surface::Type);
        self.scan_path_generics(&node.path);
    }

    fn visit_expr_struct(&mut self, node: &'ast syn::ExprStruct) {
        self.record_path(&node.path, Surface::Type);
        for field in &node.fields {
            self.visit_expr(&field.expr);
        }
        if let Some(rest) = &node.rest {
            self.visit_expr(rest);
        }
    }

    fn visit_expr_call(&mut self, node: &'ast syn::ExprCall) {
        if let syn::Expr::Path(callee) = node.func.as_ref() {
            self.record_path(&callee.path, Surface::Call);
            self.scan_path_generics(&callee.path);
        } else {
            self.visit_expr(&node.func);
        }
        for arg in &node.args {
            self.visit_expr(arg);
        }
    }

    fn visit_expr_path(&mut self, node: &'ast syn::ExprPath) {
        self.record_path(&node.path, Surface::Value);
        self.scan_path_generics(&node.path);
    }
}
