use crate::ast::load_unit;
use crate::generator::{generate_controllers, GenerateOptions};
use crate::logging::{init_logging_with_config, LogConfig};
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface for the RDL controller generator
///
/// Reads a parsed RDL compilation unit (YAML or JSON) and writes one
/// controller class per resource beneath the output directory.
#[derive(Parser, Debug)]
#[command(name = "rdl")]
#[command(about = "Generate controller stubs from an RDL compilation unit", long_about = None)]
pub struct Cli {
    /// Parsed RDL unit (`.yaml`/`.yml` for YAML, anything else as JSON)
    pub input: PathBuf,

    /// Root directory for generated sources; package segments are created below it
    pub output: PathBuf,

    /// Show which files would be written without writing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error); overrides RDL_LOG_LEVEL
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Generation options selected by the flags.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            dry_run: self.dry_run,
        }
    }

    /// Logging configuration: environment first, then flag overrides.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::from_env();
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }
}

/// Execute one generator run for the parsed command line
///
/// # Errors
///
/// Returns an error if:
/// - Logging cannot be initialised
/// - The input unit cannot be read or parsed
/// - A trait-use references an undeclared trait
/// - The output directory or a controller file cannot be written
pub fn run_cli(cli: &Cli) -> anyhow::Result<()> {
    init_logging_with_config(&cli.log_config())?;

    let unit = load_unit(&cli.input)?;
    let report = generate_controllers(&unit, &cli.output, &cli.options())?;

    if report.dry_run {
        println!(
            "🔍 Dry run: {} controller(s) would be written",
            report.files.len()
        );
        for file in &report.files {
            println!("  {}", file.display());
        }
    } else {
        let out = std::path::absolute(&cli.output)?;
        println!("✅ Controllers generated in: {}", out.display());
    }
    Ok(())
}
