//! One builder per configuration area, in the order the wizard asks them.
//!
//! Builders only talk to the [`Prompter`](backstage_config_prompt::Prompter)
//! they are given and return their finished branch; none of them reads
//! another section's answers.

mod app;
pub use app::{app, organization};

mod backend;
pub use backend::backend;

mod auth;
pub use auth::auth;

mod integrations;
pub use integrations::integrations;

mod catalog;
pub use catalog::catalog;

mod kubernetes;
pub use kubernetes::kubernetes;

mod ingestor;
pub use ingestor::kubernetes_ingestor;

mod scaleops;
pub use scaleops::scaleops;

mod proxy;
pub use proxy::proxy;

mod devpod;
pub use devpod::devpod;

mod permission;
pub use permission::permission;

mod policy;
pub use policy::{crossplane, kyverno};
