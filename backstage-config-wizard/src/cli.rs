use std::path::PathBuf;

use backstage_config_prompt::{DialoguerBackend, LineBackend, Prompter};
use clap::{Parser, ValueEnum};

use crate::output::Destination;

#[derive(Debug, Parser)]
#[command(name = "backstage-config-wizard")]
#[command(about = "Interactively generate a Backstage app-config.yaml")]
pub struct Cli {
    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How prompts are rendered
    #[arg(
        long,
        value_enum,
        env = "BACKSTAGE_WIZARD_PROMPT_STYLE",
        default_value = "line",
        hide = true
    )]
    pub prompt_style: PromptStyle,
}

impl Cli {
    pub fn destination(&self) -> Destination {
        Destination::from(self.output.clone())
    }
}

/// Prompt backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PromptStyle {
    /// Plain `label [default]: ` lines on stdout, answers from stdin
    Line,
    /// Dialoguer with the colorful theme (needs a terminal)
    Colorful,
    /// Dialoguer without colors (needs a terminal)
    Plain,
}

impl PromptStyle {
    pub fn prompter(self) -> Box<dyn Prompter> {
        match self {
            Self::Line => Box::new(LineBackend::stdio()),
            Self::Colorful => Box::new(DialoguerBackend::new()),
            Self::Plain => Box::new(DialoguerBackend::plain()),
        }
    }
}
