use clap::Parser;
use rdl_codegen::cli::{run_cli, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_cli(&cli)
}
