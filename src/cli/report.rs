//! Slug output printing.
//!
//! Separate from the extraction logic so the line format can be tested
//! against an in-memory writer.

use std::io::{self, Write};

use anyhow::{Context, Result};

/// Print slugs to stdout, one per line.
///
/// A write failure (e.g. a closed pipe) is fatal and propagated to the
/// caller.
pub fn print(slugs: &[String]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    print_to(slugs, &mut stdout).context("Failed to write slug list to stdout")
}

/// Print slugs to a custom writer, one per line, no header or trailer.
fn print_to(slugs: &[String], out: &mut impl Write) -> io::Result<()> {
    for slug in slugs {
        writeln!(out, "{}", slug)?;
    }
    Ok(())
}
