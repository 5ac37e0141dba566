mod cli;
mod config;

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    vitrine_observability::init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let catalog = config.load_catalog()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli.command.run(&catalog, &mut out)?;
    out.flush()?;
    Ok(())
}
