use std::fs;
use std::path::Path;

use super::*;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn two_package_project(root: &Path) {
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

        pub fn consume(d: Data) -> usize {
            pkg1::MAX
        }
        "#,
    );
}

#[test]
fn cross_package_references_are_enriched() {
    let dir = tempfile::tempdir().unwrap();
    two_package_project(dir.path());

    let project = parse_project(dir.path()).unwrap();
    assert_eq!(project.len(), 2);

    let info = &project[&dir.path().join("pkg2/src/lib.rs")];
    assert_eq!(info.package_name, "pkg2");

    let data = &info.used_imported_structs[0];
    assert_eq!(data.name, "pkg1::Data");
    assert_eq!(data.comment, "A value holder.");
    assert_eq!(data.fields[0].name, "value");
    assert_eq!(data.fields[0].ty, "String");

    let max = &info.used_imported_global_vars[0];
    assert_eq!(max.name, "pkg1::MAX");
    assert_eq!(max.ty, "usize");
    assert_eq!(max.value, "8");
    assert!(max.is_const);
}

#[test]
fn own_package_symbols_are_not_used_imports() {
    let dir = tempfile::tempdir().unwrap();
    two_package_project(dir.path());

    let project = parse_project(dir.path()).unwrap();
    let info = &project[&dir.path().join("pkg1/src/lib.rs")];
    assert!(info.used_imported_structs.is_empty());
    assert!(info.used_imported_functions.is_empty());
    assert!(info.used_imported_global_vars.is_empty());
}

#[test]
fn unparsable_file_is_excluded_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    two_package_project(dir.path());
    write(dir.path(), "pkg1/src/broken.rs", "pub fn oops( {");

    let project = parse_project(dir.path()).unwrap();
    assert_eq!(project.len(), 2);
    assert!(!project.contains_key(&dir.path().join("pkg1/src/broken.rs")));
}

#[test]
fn empty_root_reports_no_packages() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_project(dir.path()).unwrap_err();
    assert!(matches!(err, AnalyzeError::NoPackages { .. }));
}
