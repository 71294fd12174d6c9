//! Location and loading of the feature registry source file.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Path to the feature registry, relative to the project root the tool is
/// invoked from.
pub const REGISTRY_FILE: &str = "app/pocket-manager5/featureRegistry.ts";

/// Read the full registry source text.
///
/// The file handle is scoped to this call and released before returning,
/// on the error path included.
pub fn read_registry(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read feature registry: {}", path.display()))
}
