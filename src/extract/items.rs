//! Per-item extraction: structs, enums, traits, functions, globals, methods.

use crate::frontend::{expr_to_string, type_to_string};
use crate::model::{
    FileInfo, FunctionInfo, GlobalVarInfo, InterfaceInfo, MethodInfo, StructField, StructInfo,
};

use super::helpers::{
    doc_comment, flatten_use_tree, qualified, signature_params, signature_returns,
};

/// First pass: collect declarations. Inline `mod` blocks are walked too,
/// since the package is one flat namespace.
pub(super) fn extract_items(info: &mut FileInfo, package: &str, items: &[syn::Item]) {
    for item in items {
        match item {
            syn::Item::Use(u) => flatten_use_tree(&u.tree, &mut info.imports),
            syn::Item::Struct(s) => info.structs.push(struct_info(package, s)),
            syn::Item::Enum(e) => info.structs.push(enum_info(package, e)),
            syn::Item::Trait(t) => info.interfaces.push(trait_info(package, t)),
            syn::Item::Fn(f) => info.functions.push(function_info(package, f)),
            syn::Item::Const(c) => info.global_vars.push(const_info(package, c)),
            syn::Item::Static(s) => info.global_vars.push(static_info(package, s)),
            syn::Item::Mod(m) => {
                if let Some((_, nested)) = &m.content {
                    extract_items(info, package, nested);
                }
            }
            _ => {}
        }
    }
}

/// Second pass: attach inherent-impl methods to the struct declared in the
/// same file. Runs after all types are collected so an `impl` block may
/// precede its type declaration. Trait impls contribute nothing.
pub(super) fn attach_methods(info: &mut FileInfo, package: &str, items: &[syn::Item]) {
    for item in items {
        match item {
            syn::Item::Impl(imp) if imp.trait_.is_none() => {
                let Some(type_name) = self_type_name(&imp.self_ty) else {
                    continue;
                };
                let fq = format!("{package}::{type_name}");
                let Some(owner) = info.structs.iter_mut().find(|s| s.name == fq) else {
                    continue;
                };
                for impl_item in &imp.items {
                    if let syn::ImplItem::Fn(method) = impl_item {
                        owner.methods.push(MethodInfo {
                            name: method.sig.ident.to_string(),
                            comment: doc_comment(&method.attrs),
                            params: signature_params(&method.sig),
                            returns: signature_returns(&method.sig),
                        });
                    }
                }
            }
            syn::Item::Mod(m) => {
                if let Some((_, nested)) = &m.content {
                    attach_methods(info, package, nested);
                }
            }
            _ => {}
        }
    }
}

/// Bare name of the impl self type, with references unwrapped.
fn self_type_name(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(tp) => tp.path.segments.last().map(|s| s.ident.to_string()),
        syn::Type::Reference(r) => self_type_name(&r.elem),
        _ => None,
    }
}

fn struct_info(package: &str, item: &syn::ItemStruct) -> StructInfo {
    let mut fields = Vec::new();
    match &item.fields {
        syn::Fields::Named(named) => {
            for field in &named.named {
                fields.push(StructField {
                    name: field
                        .ident
                        .as_ref()
                        .map(|i| i.to_string())
                        .unwrap_or_default(),
                    ty: type_to_string(&field.ty),
                });
            }
        }
        syn::Fields::Unnamed(unnamed) => {
            for (idx, field) in unnamed.unnamed.iter().enumerate() {
                fields.push(StructField {
                    name: idx.to_string(),
                    ty: type_to_string(&field.ty),
                });
            }
        }
        syn::Fields::Unit => {}
    }
    StructInfo {
        name: qualified(package, &item.ident),
        comment: doc_comment(&item.attrs),
        fields,
        methods: Vec::new(),
    }
}

/// Enums are reported as struct records whose fields are the variants in
/// payload form: unit variants bare, tuple variants `(types)`, record
/// variants `{ .. }`.
fn enum_info(package: &str, item: &syn::ItemEnum) -> StructInfo {
    let mut fields = Vec::new();
    for variant in &item.variants {
        let ty = match &variant.fields {
            syn::Fields::Unit => String::new(),
            syn::Fields::Unnamed(unnamed) => {
                let types: Vec<String> =
                    unnamed.unnamed.iter().map(|f| type_to_string(&f.ty)).collect();
                format!("({})", types.join(", "))
            }
            syn::Fields::Named(_) => "{ .. }".to_string(),
        };
        fields.push(StructField {
            name: variant.ident.to_string(),
            ty,
        });
    }
    StructInfo {
        name: qualified(package, &item.ident),
        comment: doc_comment(&item.attrs),
        fields,
        methods: Vec::new(),
    }
}

fn trait_info(package: &str, item: &syn::ItemTrait) -> InterfaceInfo {
    let mut methods = Vec::new();
    for trait_item in &item.items {
        if let syn::TraitItem::Fn(method) = trait_item {
            methods.push(MethodInfo {
                name: method.sig.ident.to_string(),
                comment: doc_comment(&method.attrs),
                params: signature_params(&method.sig),
                returns: signature_returns(&method.sig),
            });
        }
    }
    let embeds = item
        .supertraits
        .iter()
        .filter_map(|bound| match bound {
            syn::TypeParamBound::Trait(t) => Some(crate::frontend::path_to_string(&t.path)),
            _ => None,
        })
        .collect();
    InterfaceInfo {
        name: qualified(package, &item.ident),
        comment: doc_comment(&item.attrs),
        methods,
        embeds,
    }
}

fn function_info(package: &str, item: &syn::ItemFn) -> FunctionInfo {
    FunctionInfo {
        name: qualified(package, &item.sig.ident),
        comment: doc_comment(&item.attrs),
        params: signature_params(&item.sig),
        returns: signature_returns(&item.sig),
    }
}

fn const_info(package: &str, item: &syn::ItemConst) -> GlobalVarInfo {
    GlobalVarInfo {
        name: qualified(package, &item.ident),
        comment: doc_comment(&item.attrs),
        ty: type_to_string(&item.ty),
        value: expr_to_string(&item.expr),
        is_const: true,
    }
}

fn static_info(package: &str, item: &syn::ItemStatic) -> GlobalVarInfo {
    GlobalVarInfo {
        name: qualified(package, &item.ident),
        comment: doc_comment(&item.attrs),
        ty: type_to_string(&item.ty),
        value: expr_to_string(&item.expr),
        is_const: false,
    }
}
