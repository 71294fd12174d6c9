//! Featls - feature slug listing for Next.js feature registries
//!
//! Featls is a tiny CLI tool and library that reads a project's feature
//! registry file, extracts every `slug: "<value>"` literal, and prints the
//! distinct slugs in sorted order, one per line.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (entry point, exit codes, output)
//! - `extract`: Lexical slug extraction from registry source text
//! - `registry`: Registry file location and loading

pub mod cli;
pub mod extract;
pub mod registry;
