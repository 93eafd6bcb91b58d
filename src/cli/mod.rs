//! # CLI Module
//!
//! Command-line front end of the RDL controller generator.
//!
//! ## Usage
//!
//! ```bash
//! rdl <INPUT> <OUTPUT_DIR> [--dry-run] [--log-level <LEVEL>]
//! ```
//!
//! - `<INPUT>` - parsed compilation unit produced by the RDL parser (YAML or JSON)
//! - `<OUTPUT_DIR>` - root directory; package segments are created below it
//! - `--dry-run` - list the files that would be written, write nothing
//! - `--log-level` - override `RDL_LOG_LEVEL`
//!
//! A missing `<OUTPUT_DIR>` exits non-zero with a usage message. On success the
//! absolute output directory is printed.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use rdl_codegen::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(&cli)?;
//! ```
//!
//! ## Examples
//!
//! ```bash
//! # Generate controllers for the showcase unit
//! rdl demos/full-showcase.yaml generated
//!
//! # Preview without writing
//! rdl demos/full-showcase.yaml generated --dry-run
//! ```

mod commands;


pub use commands::{run_cli, Cli};
