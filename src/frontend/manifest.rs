//! Minimal Cargo.toml reading: just enough to name a package.

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Manifest {
    package: Option<PackageSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PackageSection {
    name: Option<String>,
}

/// Reads the `[package] name` entry from a manifest.
///
/// Returns `None` for virtual workspace manifests (no `[package]` table) and
/// for manifests that cannot be read or parsed; those directories simply do
/// not contribute a package.
pub(crate) fn read_package_name(manifest_path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(manifest_path).ok()?;
    let manifest: Manifest = match toml::from_str(&content) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!("skipping unreadable manifest {}: {e}", manifest_path.display());
            return None;
        }
    };
    manifest.package?.name
}
