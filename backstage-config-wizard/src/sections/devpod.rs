use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{DevpodConfig, defaults};
use tracing::debug;

use crate::flow::gated;

pub fn devpod<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Option<DevpodConfig>, PromptError> {
    debug!("collecting devpod settings");
    prompter.section("Devpod Configurations")?;

    gated(prompter, "Configure Devpod?", false, |prompter| {
        Ok(DevpodConfig {
            default_ide: prompter.ask_text("Enter default IDE", defaults::DEVPOD_DEFAULT_IDE)?,
        })
    })
}
