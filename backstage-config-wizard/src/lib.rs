//! # backstage-config-wizard
//!
//! Walks an operator through the Backstage platform setup and emits a single
//! `app-config` YAML document.
//!
//! ## Usage
//!
//! ```rust
//! use backstage_config_prompt::TestBackend;
//! use backstage_config_wizard::{output, wizard};
//!
//! // Every question answered with its default.
//! let config = wizard::run(&mut TestBackend::new()).unwrap();
//! let document = output::render(&config).unwrap();
//!
//! assert!(document.starts_with("app:\n  title: TeraSky OSS Backstage\n"));
//! assert!(!document.contains("kubernetes:"));
//! ```
//!
//! Sections are asked in a fixed order (see [`wizard::run`]). Optional
//! sections start with a "Configure ...?" question and are left out of the
//! document entirely when declined.

pub mod cli;
pub mod flow;
pub mod output;
pub mod sections;
pub mod wizard;

mod error;
pub use error::WizardError;
