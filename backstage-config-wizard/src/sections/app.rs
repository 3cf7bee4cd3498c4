use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{AppConfig, OrganizationConfig, defaults};
use tracing::debug;

pub fn app<P: Prompter + ?Sized>(prompter: &mut P) -> Result<AppConfig, PromptError> {
    debug!("collecting app settings");
    prompter.section("General App Configurations")?;

    let title = prompter.ask_text("Enter application title", defaults::APP_TITLE)?;
    let base_url = prompter.ask_text("Enter frontend base URL", defaults::APP_BASE_URL)?;

    Ok(AppConfig { title, base_url })
}

/// Asked right after the app settings, under the same banner.
pub fn organization<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<OrganizationConfig, PromptError> {
    let name = prompter.ask_text("Enter organization name", defaults::ORGANIZATION_NAME)?;
    Ok(OrganizationConfig { name })
}
