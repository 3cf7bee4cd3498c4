//! # backstage-config-prompt
//!
//! Interactive prompts for the Backstage configuration wizard.
//!
//! Three kinds of question are supported, each answered with exactly one line
//! of input and each carrying a default that an empty answer selects:
//! - free text: `Enter backend port [7007]: `
//! - yes/no: `Configure proxy endpoints? (y/n) [n]: `
//! - comma-separated list: `Enter excluded namespaces [kube-public,kube-system]: `
//!
//! There is no validation loop. Anything other than `y`/`Y` answers "no",
//! and list answers are split on commas as typed.
//!
//! ## Backends
//!
//! - [`LineBackend`] - plain prompts over any `BufRead`/`Write` pair (stdio by default)
//! - [`DialoguerBackend`] - the same questions rendered through `dialoguer`
//! - [`TestBackend`] - scripted answers for tests
//!
//! ## Example
//!
//! ```rust
//! use backstage_config_prompt::{LineBackend, Prompter};
//!
//! let input = b"9000\n\n" as &[u8];
//! let mut prompts = LineBackend::new(input, Vec::new());
//!
//! let port = prompts.ask_text("Enter backend port", "7007").unwrap();
//! let url = prompts
//!     .ask_text("Enter backend base URL", &format!("http://localhost:{port}"))
//!     .unwrap();
//!
//! assert_eq!(url, "http://localhost:9000");
//! ```

mod error;
pub use error::PromptError;

mod prompt;
pub use prompt::{
    Prompter, bool_prompt, list_prompt, resolve_bool, resolve_list, resolve_text, text_prompt,
};

mod line_backend;
pub use line_backend::LineBackend;

mod dialoguer_backend;
pub use dialoguer_backend::DialoguerBackend;

mod test_backend;
pub use test_backend::{AskedPrompt, TestBackend};
