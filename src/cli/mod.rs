use std::path::Path;

use anyhow::Result;

pub use exit_status::ExitStatus;

mod exit_status;
mod report;

/// Main entry point for the featls CLI.
///
/// Reads the feature registry, extracts the distinct slugs, and prints
/// them to stdout in sorted order.
///
/// # Returns
/// - `Ok(ExitStatus::Success)` on a completed run, the zero-slug case
///   included
/// - `Err` if the registry cannot be read or stdout cannot be written
pub fn run_cli() -> Result<ExitStatus> {
    let text = crate::registry::read_registry(Path::new(crate::registry::REGISTRY_FILE))?;
    let slugs = crate::extract::extract_slugs(&text);

    report::print(&slugs)?;

    Ok(ExitStatus::Success)
}
