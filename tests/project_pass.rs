//! End-to-end pass over a fixture workspace on disk: load, extract, resolve,
//! then compose briefings and check the rendered text.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use astbrief::{AnalyzeError, compose, parse_project};

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fixture(root: &Path) {
    write(
        root,
        "pkg1/Cargo.toml",
        "[package]\nname = \"pkg1\"\nversion = \"0.1.0\"\n",
    );
    write(
        root,
        "pkg1/src/lib.rs",
        r#"
        /// A value holder.
        pub struct Data {
            pub value: String,
        }

        impl Data {
            /// Builds an empty holder.
            pub fn new() -> Data {
                Data { value: String::new() }
            }
        }

        /// Upper bound on holders.
        pub const MAX: usize = 8;
        "#,
    );
    write(
        root,
        "pkg2/Cargo.toml",
        "[package]\nname = \"pkg2\"\nversion = \"0.1.0\"\n",
    );
    write(
        root,
        "pkg2/src/lib.rs",
        r#"
        use pkg1::Data;

        /// Consumes a holder.
        pub fn consume(d: Data) -> usize {
            pkg1::MAX
        }
        "#,
    );
}

#[test]
fn used_struct_is_rendered_with_its_full_definition() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let project = parse_project(dir.path()).unwrap();
    let report = compose(&project, &dir.path().join("pkg2/src/lib.rs")).unwrap();

    assert!(report.contains("Package: pkg2\n"));
    let expected = "\
Used Items From Other Packages:
  Struct: pkg1::Data
    Comment: A value holder.
    Fields:
      - value String
    Methods:
      - new() (Data)
        Comment: Builds an empty holder.
";
    assert!(report.contains(expected));
}

#[test]
fn used_constant_is_rendered_with_type_and_value() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let project = parse_project(dir.path()).unwrap();
    let report = compose(&project, &dir.path().join("pkg2/src/lib.rs")).unwrap();

    assert!(report.contains("  Const: pkg1::MAX usize = 8\n"));
    assert!(report.contains("    Comment: Upper bound on holders.\n"));
}

#[test]
fn every_analyzed_path_composes() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let project = parse_project(dir.path()).unwrap();
    for path in project.keys() {
        let report = compose(&project, path).unwrap();
        assert!(report.starts_with("--- File: "));
    }
}

#[test]
fn repeated_passes_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let first = parse_project(dir.path()).unwrap();
    let second = parse_project(dir.path()).unwrap();
    assert_eq!(first.keys().collect::<Vec<_>>(), second.keys().collect::<Vec<_>>());

    for path in first.keys() {
        assert_eq!(
            compose(&first, path).unwrap(),
            compose(&second, path).unwrap()
        );
    }
}

#[test]
fn composing_an_unknown_path_names_it_in_the_error() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let project = parse_project(dir.path()).unwrap();
    let missing = dir.path().join("pkg3/src/lib.rs");
    let err = compose(&project, &missing).unwrap_err();
    assert!(matches!(err, AnalyzeError::FileInfoNotFound { .. }));
    assert!(err.to_string().contains(missing.to_str().unwrap()));
}
