//! Block formatters for the rendered report.
//!
//! The output is parsed structurally by consumers: two-space indent per
//! nesting level, `<Kind>: <name>` block openers, `Comment:` lines only when
//! non-empty, `- ` bullets for fields and methods.

use crate::model::{FunctionInfo, GlobalVarInfo, InterfaceInfo, MethodInfo, StructInfo};

pub(crate) fn format_function(out: &mut String, f: &FunctionInfo, indent: &str) {
    out.push_str(&format!("{indent}Function: {}\n", f.name));
    if !f.comment.is_empty() {
        out.push_str(&format!("{indent}  Comment: {}\n", f.comment));
    }
    out.push_str(&format!(
        "{indent}  Signature: ({}) -> ({})\n",
        f.params.join(", "),
        f.returns.join(", ")
    ));
}

pub(crate) fn format_global_var(out: &mut String, g: &GlobalVarInfo, indent: &str) {
    let kind = if g.is_const { "Const" } else { "Var" };
    out.push_str(&format!("{indent}{kind}: {} {}", g.name, g.ty));
    if !g.value.is_empty() {
        out.push_str(&format!(" = {}", g.value));
    }
    out.push('\n');
    if !g.comment.is_empty() {
        out.push_str(&format!("{indent}  Comment: {}\n", g.comment));
    }
}

pub(crate) fn format_struct(out: &mut String, s: &StructInfo, indent: &str) {
    out.push_str(&format!("{indent}Struct: {}\n", s.name));
    if !s.comment.is_empty() {
        out.push_str(&format!("{indent}  Comment: {}\n", s.comment));
    }
    if !s.fields.is_empty() {
        out.push_str(&format!("{indent}  Fields:\n"));
        for field in &s.fields {
            if field.ty.is_empty() {
                out.push_str(&format!("{indent}    - {}\n", field.name));
            } else {
                out.push_str(&format!("{indent}    - {} {}\n", field.name, field.ty));
            }
        }
    }
    if !s.methods.is_empty() {
        out.push_str(&format!("{indent}  Methods:\n"));
        for method in &s.methods {
            format_method(out, method, indent);
        }
    }
}

pub(crate) fn format_interface(out: &mut String, iface: &InterfaceInfo, indent: &str) {
    out.push_str(&format!("{indent}Interface: {}\n", iface.name));
    if !iface.comment.is_empty() {
        out.push_str(&format!("{indent}  Comment: {}\n", iface.comment));
    }
    if !iface.embeds.is_empty() {
        out.push_str(&format!("{indent}  Embeds:\n"));
        for embed in &iface.embeds {
            out.push_str(&format!("{indent}    - {embed}\n"));
        }
    }
    if !iface.methods.is_empty() {
        out.push_str(&format!("{indent}  Methods:\n"));
        for method in &iface.methods {
            format_method(out, method, indent);
        }
    }
}

fn format_method(out: &mut String, m: &MethodInfo, indent: &str) {
    out.push_str(&format!(
        "{indent}    - {}({}) ({})\n",
        m.name,
        m.params.join(", "),
        m.returns.join(", ")
    ));
    if !m.comment.is_empty() {
        out.push_str(&format!("{indent}      Comment: {}\n", m.comment));
    }
}
