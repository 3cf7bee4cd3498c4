//! Full wizard with dialoguer's colorful theme. Run with: cargo run --example colorful_wizard

use backstage_config_prompt::DialoguerBackend;
use backstage_config_wizard::{output, wizard};

fn main() -> anyhow::Result<()> {
    let mut backend = DialoguerBackend::new();
    let config = wizard::run(&mut backend)?;
    print!("{}", output::render(&config)?);
    Ok(())
}
