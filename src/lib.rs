//! # astbrief
//!
//! Static analysis over Cargo workspaces that distills each source file into
//! a compact, deterministic briefing for LLM prompts: the file's own
//! declarations plus the full definitions of everything it uses from other
//! packages in the project.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! compose   → Deterministic report rendering
//!   ↓
//! project   → Whole-project pass (extract, index, resolve)
//!   ↓
//! graph     → Package-level dependency graph
//!   ↓
//! resolve   → Import maps, definition index, usage collection
//!   ↓
//! extract   → Per-file symbol extraction
//!   ↓
//! frontend  → Package discovery, manifest reading, parsing, rendering
//!   ↓
//! model     → Extraction data model (FileInfo and friends)
//! error     → AnalyzeError / AnalyzeResult
//! ```

/// Error types shared across the analysis pipeline.
pub mod error;

/// Extraction data model: per-file symbol records and project maps.
pub mod model;

/// Source discovery and parsing: packages, manifests, token rendering.
pub mod frontend;

/// Per-file symbol extraction from a parsed syntax tree.
pub mod extract;

/// Cross-package reference resolution and the project-wide definition index.
pub mod resolve;

/// Package-level dependency graph construction.
pub mod graph;

/// The three-phase whole-project analysis pass.
pub mod project;

/// Deterministic briefing composition.
pub mod compose;

pub use compose::compose;
pub use error::{AnalyzeError, AnalyzeResult};
pub use extract::extract_file;
pub use graph::build_graph;
pub use model::{
    DependencyGraph, FileInfo, FunctionInfo, GlobalVarInfo, InterfaceInfo, MethodInfo, Node,
    ProjectInfo, StructField, StructInfo,
};
pub use project::parse_project;
