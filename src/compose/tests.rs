use std::path::PathBuf;

use rstest::rstest;

use super::*;
use crate::model::{
    FunctionInfo, GlobalVarInfo, InterfaceInfo, MethodInfo, ProjectInfo, StructField, StructInfo,
};

fn data_struct() -> StructInfo {
    StructInfo {
        name: "pkg1::Data".to_string(),
        comment: "Holds a value.".to_string(),
        fields: vec![StructField {
            name: "value".to_string(),
            ty: "String".to_string(),
        }],
        methods: Vec::new(),
    }
}

fn project_with_pkg1() -> (ProjectInfo, PathBuf) {
    let mut pkg1 = crate::model::FileInfo::new("pkg1");
    pkg1.structs.push(data_struct());
    pkg1.functions.push(FunctionInfo {
        name: "pkg1::helper".to_string(),
        comment: String::new(),
        params: Vec::new(),
        returns: Vec::new(),
    });

    let mut project = ProjectInfo::new();
    let pkg1_path = PathBuf::from("/proj/pkg1/src/lib.rs");
    project.insert(pkg1_path.clone(), pkg1);
    (project, pkg1_path)
}

#[test]
fn composes_all_sections_in_fixed_order() {
    let (mut project, _) = project_with_pkg1();

    let mut info = crate::model::FileInfo::new("pkg2");
    info.imports.push("pkg1::Data".to_string());
    info.functions.push(FunctionInfo {
        name: "pkg2::run".to_string(),
        comment: "Runs.".to_string(),
        params: vec!["d: Data".to_string()],
        returns: vec!["bool".to_string()],
    });
    info.global_vars.push(GlobalVarInfo {
        name: "pkg2::LIMIT".to_string(),
        comment: String::new(),
        ty: "usize".to_string(),
        value: "10".to_string(),
        is_const: true,
    });
    info.used_imported_structs.push(StructInfo::stub("pkg1::Data"));
    info.used_imported_structs
        .push(StructInfo::stub("serde::Serialize"));
    info.used_imported_functions
        .push(FunctionInfo::stub("pkg1::helper"));

    let path = PathBuf::from("/proj/pkg2/src/lib.rs");
    project.insert(path.clone(), info);

    let report = compose(&project, &path).unwrap();
    let expected = "\
--- File: /proj/pkg2/src/lib.rs ---
Package: pkg2

Imports:
- pkg1::Data

Functions:
  Function: pkg2::run
    Comment: Runs.
    Signature: (d: Data) -> (bool)

Global Variables/Constants:
  Const: pkg2::LIMIT usize = 10

Used Items From Other Packages:
  Struct: pkg1::Data
    Comment: Holds a value.
    Fields:
      - value String
  - serde::Serialize
  Function: pkg1::helper
    Signature: () -> ()
";
    assert_eq!(report, expected);
}

#[test]
fn empty_file_composes_to_header_only() {
    let mut project = ProjectInfo::new();
    let path = PathBuf::from("/proj/empty/src/lib.rs");
    project.insert(path.clone(), crate::model::FileInfo::new("empty"));

    let report = compose(&project, &path).unwrap();
    assert_eq!(report, "--- File: /proj/empty/src/lib.rs ---\nPackage: empty\n");
}

#[test]
fn missing_path_is_a_typed_error_with_the_path() {
    let project = ProjectInfo::new();
    let err = compose(&project, &PathBuf::from("/nope.rs")).unwrap_err();
    assert!(matches!(err, AnalyzeError::FileInfoNotFound { .. }));
    assert_eq!(err.to_string(), "file info not found for path: /nope.rs");
}

#[test]
fn same_name_across_used_lists_renders_once() {
    let (mut project, _) = project_with_pkg1();

    let mut info = crate::model::FileInfo::new("pkg2");
    info.used_imported_structs.push(StructInfo::stub("pkg1::Data"));
    info.used_imported_functions
        .push(FunctionInfo::stub("pkg1::Data"));
    info.used_imported_global_vars
        .push(GlobalVarInfo::stub("pkg1::Data"));

    let path = PathBuf::from("/proj/pkg2/src/lib.rs");
    project.insert(path.clone(), info);

    let report = compose(&project, &path).unwrap();
    assert_eq!(report.matches("pkg1::Data").count(), 1);
    assert!(report.contains("Struct: pkg1::Data"));
}

#[test]
fn local_interface_renders_embeds_and_methods() {
    let mut project = ProjectInfo::new();
    let mut info = crate::model::FileInfo::new("pkg1");
    info.interfaces.push(InterfaceInfo {
        name: "pkg1::Runner".to_string(),
        comment: "Can run.".to_string(),
        methods: vec![MethodInfo {
            name: "run".to_string(),
            comment: "Runs once.".to_string(),
            params: vec!["input: &str".to_string()],
            returns: vec!["bool".to_string()],
        }],
        embeds: vec!["Send".to_string()],
    });
    let path = PathBuf::from("/proj/pkg1/src/lib.rs");
    project.insert(path.clone(), info);

    let report = compose(&project, &path).unwrap();
    let expected = "\
--- File: /proj/pkg1/src/lib.rs ---
Package: pkg1

Local Interfaces:
  Interface: pkg1::Runner
    Comment: Can run.
    Embeds:
      - Send
    Methods:
      - run(input: &str) (bool)
        Comment: Runs once.
";
    assert_eq!(report, expected);
}

#[test]
fn enriched_global_renders_without_an_index_entry() {
    let mut project = ProjectInfo::new();
    let mut info = crate::model::FileInfo::new("pkg2");
    info.used_imported_global_vars.push(GlobalVarInfo {
        name: "pkg1::X".to_string(),
        comment: String::new(),
        ty: "i32".to_string(),
        value: "42".to_string(),
        is_const: true,
    });
    let path = PathBuf::from("/proj/pkg2/src/lib.rs");
    project.insert(path.clone(), info);

    let report = compose(&project, &path).unwrap();
    assert!(report.contains("Used Items From Other Packages:\n  Const: pkg1::X i32 = 42\n"));
}

#[rstest]
#[case(true, "10", "  Const: pkg2::LIMIT usize = 10\n")]
#[case(false, "", "  Var: pkg2::LIMIT usize\n")]
fn formats_globals_by_kind(#[case] is_const: bool, #[case] value: &str, #[case] expected: &str) {
    let g = GlobalVarInfo {
        name: "pkg2::LIMIT".to_string(),
        comment: String::new(),
        ty: "usize".to_string(),
        value: value.to_string(),
        is_const,
    };
    let mut out = String::new();
    format::format_global_var(&mut out, &g, "  ");
    assert_eq!(out, expected);
}
