use std::path::PathBuf;

use backstage_config_prompt::PromptError;

/// Everything that can stop the wizard. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Error marshaling YAML: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Error writing file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to standard output: {0}")]
    Stdout(#[source] std::io::Error),
}
