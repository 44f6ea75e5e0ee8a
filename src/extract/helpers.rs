//! Shared extraction helpers: doc comments, signatures, use-tree flattening.

use crate::frontend::type_to_string;

/// Joins the `#[doc]` attribute lines of an item, trimmed.
pub(crate) fn doc_comment(attrs: &[syn::Attribute]) -> String {
    let mut lines = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(nv) = &attr.meta {
            if let syn::Expr::Lit(expr_lit) = &nv.value {
                if let syn::Lit::Str(s) = &expr_lit.lit {
                    lines.push(s.value().trim().to_string());
                }
            }
        }
    }
    lines.join("\n").trim().to_string()
}

/// Fully-qualified name for an item declared in `package`.
pub(crate) fn qualified(package: &str, name: &syn::Ident) -> String {
    format!("{package}::{name}")
}

/// True for `pub` items; restricted visibility does not count as exported.
pub(crate) fn is_exported(vis: &syn::Visibility) -> bool {
    matches!(vis, syn::Visibility::Public(_))
}

/// Parameter descriptors for a signature, `name: Type` or a bare type when
/// the pattern has no simple name. Receivers are skipped.
pub(crate) fn signature_params(sig: &syn::Signature) -> Vec<String> {
    let mut params = Vec::new();
    for input in &sig.inputs {
        if let syn::FnArg::Typed(pat_type) = input {
            let ty = type_to_string(&pat_type.ty);
            match pat_type.pat.as_ref() {
                syn::Pat::Ident(ident) => params.push(format!("{}: {ty}", ident.ident)),
                _ => params.push(ty),
            }
        }
    }
    params
}

/// Return-type strings for a signature; empty when the function returns `()`
/// implicitly.
pub(crate) fn signature_returns(sig: &syn::Signature) -> Vec<String> {
    match &sig.output {
        syn::ReturnType::Default => Vec::new(),
        syn::ReturnType::Type(_, ty) => vec![type_to_string(ty)],
    }
}

/// Flattens a use tree into full path strings, one per imported leaf.
/// Globs render as `path::*`; `use pkg::{self}` renders as `pkg`.
pub(crate) fn flatten_use_tree(tree: &syn::UseTree, out: &mut Vec<String>) {
    fn walk(tree: &syn::UseTree, prefix: &mut Vec<String>, out: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(p) => {
                prefix.push(p.ident.to_string());
                walk(&p.tree, prefix, out);
                prefix.pop();
            }
            syn::UseTree::Name(n) => {
                if n.ident == "self" {
                    out.push(prefix.join("::"));
                } else {
                    let mut segs = prefix.clone();
                    segs.push(n.ident.to_string());
                    out.push(segs.join("::"));
                }
            }
            syn::UseTree::Rename(r) => {
                let mut segs = prefix.clone();
                segs.push(r.ident.to_string());
                out.push(segs.join("::"));
            }
            syn::UseTree::Glob(_) => {
                let mut segs = prefix.clone();
                segs.push("*".to_string());
                out.push(segs.join("::"));
            }
            syn::UseTree::Group(g) => {
                for item in &g.items {
                    walk(item, prefix, out);
                }
            }
        }
    }
    let mut prefix = Vec::new();
    walk(tree, &mut prefix, out);
}
