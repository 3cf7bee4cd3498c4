//! Crossplane and Kyverno visualization add-ons. Both only carry a
//! permissions toggle.

use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{CrossplaneConfig, KyvernoConfig};
use tracing::debug;

use crate::flow::gated;

pub fn crossplane<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Option<CrossplaneConfig>, PromptError> {
    debug!("collecting crossplane settings");
    prompter.section("Crossplane Visualization Configurations")?;

    gated(prompter, "Configure Crossplane?", false, |prompter| {
        Ok(CrossplaneConfig {
            enable_permissions: prompter.ask_bool("Enable Crossplane permissions?", true)?,
        })
    })
}

pub fn kyverno<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Option<KyvernoConfig>, PromptError> {
    debug!("collecting kyverno settings");
    prompter.section("Kyverno Policy Report Configurations")?;

    gated(prompter, "Configure Kyverno?", false, |prompter| {
        Ok(KyvernoConfig {
            enable_permissions: prompter.ask_bool("Enable Kyverno permissions?", true)?,
        })
    })
}
