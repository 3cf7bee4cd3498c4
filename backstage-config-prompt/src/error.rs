/// Error type for prompting.
///
/// Malformed answers are never errors; they fall back to a default. Only the
/// terminal itself failing ends up here.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// User cancelled the wizard (Ctrl+C in an interactive terminal).
    #[error("Wizard cancelled by user")]
    Cancelled,

    /// Writing a prompt to the terminal failed.
    #[error("Failed to write prompt: {0}")]
    Io(#[from] std::io::Error),

    /// The dialoguer terminal frontend failed.
    #[error("Dialoguer error: {0}")]
    Dialoguer(dialoguer::Error),
}

impl PromptError {
    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted => {
                Self::Cancelled
            }
            other => Self::Dialoguer(other),
        }
    }
}
