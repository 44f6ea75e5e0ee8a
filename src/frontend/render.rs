//! Rendering syntax-tree fragments back to canonical text.
//!
//! `ToTokens` output inserts a space between every token (`Vec < String >`);
//! these helpers normalize that into the form a reader would write.

use quote::ToTokens;

/// Canonical text for a type, e.g. `Vec<String>` or `&str`.
pub fn type_to_string(ty: &syn::Type) -> String {
    normalize_tokens(&ty.to_token_stream().to_string())
}

/// Literal text of an expression, used for initializer values.
pub fn expr_to_string(expr: &syn::Expr) -> String {
    normalize_tokens(&expr.to_token_stream().to_string())
}

/// Canonical text for a path, e.g. `serde::Serialize`.
pub fn path_to_string(path: &syn::Path) -> String {
    normalize_tokens(&path.to_token_stream().to_string())
}

fn normalize_tokens(raw: &str) -> String {
    let mut s = raw.to_string();
    for (from, to) in [
        (" :: ", "::"),
        (":: ", "::"),
        (" ::", "::"),
        ("< ", "<"),
        (" <", "<"),
        (" >", ">"),
        (" ,", ","),
        (" (", "("),
        ("( ", "("),
        (" )", ")"),
        ("[ ", "["),
        (" ]", "]"),
        (" ;", ";"),
        ("& ", "&"),
        (" .", "."),
        (". ", "."),
        ("# ", "#"),
    ] {
        s = s.replace(from, to);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(src: &str) -> syn::Type {
        syn::parse_str(src).unwrap()
    }

    #[test]
    fn renders_plain_and_generic_types() {
        assert_eq!(type_to_string(&ty("String")), "String");
        assert_eq!(type_to_string(&ty("Vec<String>")), "Vec<String>");
        assert_eq!(
            type_to_string(&ty("HashMap<String, Vec<u8>>")),
            "HashMap<String, Vec<u8>>"
        );
    }

    #[test]
    fn renders_references_slices_and_tuples() {
        assert_eq!(type_to_string(&ty("&str")), "&str");
        assert_eq!(type_to_string(&ty("&'a mut [u8]")), "&'a mut [u8]");
        assert_eq!(type_to_string(&ty("[u8; 4]")), "[u8; 4]");
        assert_eq!(type_to_string(&ty("(i32, String)")), "(i32, String)");
    }

    #[test]
    fn renders_qualified_paths() {
        assert_eq!(
            type_to_string(&ty("other_pkg::Data")),
            "other_pkg::Data"
        );
    }

    #[test]
    fn renders_initializer_expressions() {
        let expr: syn::Expr = syn::parse_str("Vec::new()").unwrap();
        assert_eq!(expr_to_string(&expr), "Vec::new()");
        let expr: syn::Expr = syn::parse_str("42").unwrap();
        assert_eq!(expr_to_string(&expr), "42");
        let expr: syn::Expr = syn::parse_str("\"hello\"").unwrap();
        assert_eq!(expr_to_string(&expr), "\"hello\"");
    }
}
