use std::io;

use anyhow::{Context, Result};
use backstage_config_wizard::{cli::Cli, output, wizard};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the prompts and the document, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = {
        let mut prompter = cli.prompt_style.prompter();
        wizard::run(prompter.as_mut()).context("Failed to collect answers")?
    };

    let document = output::render(&config)?;
    output::write_document(&document, &cli.destination(), &mut io::stdout().lock())?;

    Ok(())
}
