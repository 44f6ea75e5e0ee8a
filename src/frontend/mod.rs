//! Language Frontend binding.
//!
//! Everything that touches source text lives here: manifest reading, package
//! discovery, file parsing through `syn`, and token-to-text rendering. The
//! rest of the crate consumes parsed syntax trees and never performs IO.

mod loader;
mod manifest;
mod render;

pub use loader::{Package, SourceFile, load_project, parse_source};
pub use render::{expr_to_string, path_to_string, type_to_string};

pub(crate) use manifest::read_package_name;
