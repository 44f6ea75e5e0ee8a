//! Data model for extracted symbol facts.
//!
//! Identity for every struct/interface/function/global is its fully-qualified
//! name, `<package>::<Item>`. Two records with the same fully-qualified name
//! anywhere in a project denote the same logical entity; the resolver and
//! composer deduplicate on that key. Sequence fields are always initialized
//! to empty so serialization downstream stays stable.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Everything extracted from one source file.
///
/// Created once per file during a project pass and immutable afterwards; the
/// next pass recomputes it from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// Name of the package the file belongs to.
    pub package_name: String,
    /// Import paths in file order, not deduplicated against other files.
    pub imports: Vec<String>,
    /// Free functions declared in this file. Methods are attached to their
    /// owning type instead.
    pub functions: Vec<FunctionInfo>,
    /// Struct and enum declarations in this file.
    pub structs: Vec<StructInfo>,
    /// Trait declarations in this file.
    pub interfaces: Vec<InterfaceInfo>,
    /// Top-level consts and statics declared in this file.
    pub global_vars: Vec<GlobalVarInfo>,
    /// Types referenced here but declared in another package.
    pub used_imported_structs: Vec<StructInfo>,
    /// Functions referenced here but declared in another package.
    pub used_imported_functions: Vec<FunctionInfo>,
    /// Consts/statics referenced here but declared in another package.
    pub used_imported_global_vars: Vec<GlobalVarInfo>,
}

impl FileInfo {
    /// Creates an empty FileInfo for the given package.
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ..Self::default()
        }
    }
}

/// A field within a struct, or a variant within an enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    /// Canonical type string. Empty for unit enum variants.
    pub ty: String,
}

/// A method attached to a struct or declared on a trait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    pub comment: String,
    /// Parameter descriptors, `name: Type` or a bare type when unnamed.
    pub params: Vec<String>,
    pub returns: Vec<String>,
}

/// A struct or enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructInfo {
    /// Fully-qualified name, the identity key.
    pub name: String,
    pub comment: String,
    pub fields: Vec<StructField>,
    pub methods: Vec<MethodInfo>,
}

impl StructInfo {
    /// A bare name-only stub for a type whose definition was not located.
    pub fn stub(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A trait declaration: explicit methods plus the supertraits it embeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceInfo {
    /// Fully-qualified name, the identity key.
    pub name: String,
    pub comment: String,
    pub methods: Vec<MethodInfo>,
    pub embeds: Vec<String>,
}

/// A free function declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionInfo {
    /// Fully-qualified name, the identity key.
    pub name: String,
    pub comment: String,
    /// Parameter descriptors, `name: Type` or a bare type when unnamed.
    pub params: Vec<String>,
    pub returns: Vec<String>,
}

impl FunctionInfo {
    /// A bare name-only stub for a function whose definition was not located.
    pub fn stub(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A top-level const or static.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalVarInfo {
    /// Fully-qualified name, the identity key.
    pub name: String,
    pub comment: String,
    /// Canonical type string. Empty on a bare stub.
    pub ty: String,
    /// Literal source text of the initializer, empty when not renderable.
    pub value: String,
    /// True for `const` items, false for `static`.
    pub is_const: bool,
}

impl GlobalVarInfo {
    /// A bare name-only stub for a global whose definition was not located.
    pub fn stub(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A resolved definition, tagged by declaration kind.
///
/// Closed variant set: every consumer matches all kinds exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolDef {
    Struct(StructInfo),
    Interface(InterfaceInfo),
    Function(FunctionInfo),
    Global(GlobalVarInfo),
}

impl SymbolDef {
    /// The fully-qualified name of the underlying definition.
    pub fn name(&self) -> &str {
        match self {
            SymbolDef::Struct(s) => &s.name,
            SymbolDef::Interface(i) => &i.name,
            SymbolDef::Function(f) => &f.name,
            SymbolDef::Global(g) => &g.name,
        }
    }
}

/// One package in the dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Package path, the identity key.
    pub pkg_path: String,
    /// Exported free functions and exported inherent methods, in file order.
    pub functions: Vec<String>,
    /// Sorted, deduplicated package paths this package imports. Edges may
    /// point outside the project; dangling edges are legal.
    pub depends_on: Vec<String>,
    /// Sorted source file paths belonging to the package.
    pub files: Vec<PathBuf>,
}

/// Package-granularity dependency structure of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Nodes keyed by package path.
    pub nodes: BTreeMap<String, Node>,
}

impl DependencyGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The root aggregate of a project pass: absolute file path → FileInfo.
///
/// A sorted map so every iteration over the project is deterministic.
pub type ProjectInfo = BTreeMap<PathBuf, FileInfo>;
