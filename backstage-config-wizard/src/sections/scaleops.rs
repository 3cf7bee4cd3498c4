use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{ScaleopsAuthentication, ScaleopsConfig, defaults};
use tracing::debug;

use crate::flow::gated;

pub fn scaleops<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Option<ScaleopsConfig>, PromptError> {
    debug!("collecting scaleops settings");
    prompter.section("ScaleOps Configurations")?;

    gated(prompter, "Configure ScaleOps?", false, |prompter| {
        let base_url = prompter.ask_text("Enter ScaleOps base URL", defaults::SCALEOPS_BASE_URL)?;
        let currency_prefix =
            prompter.ask_text("Enter currency prefix", defaults::SCALEOPS_CURRENCY_PREFIX)?;
        let link_to_dashboard = prompter.ask_bool("Enable dashboard linking?", true)?;
        let authentication = authentication(prompter)?;

        Ok(ScaleopsConfig {
            base_url,
            currency_prefix,
            link_to_dashboard,
            authentication,
        })
    })
}

/// Credentials are asked only once authentication is switched on.
fn authentication<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<ScaleopsAuthentication, PromptError> {
    if !prompter.ask_bool("Enable authentication?", false)? {
        return Ok(ScaleopsAuthentication::disabled());
    }

    let kind = prompter.ask_text(
        "Enter ScaleOps authentication type",
        defaults::SCALEOPS_AUTH_TYPE,
    )?;
    let user = prompter.ask_text("Enter ScaleOps user", "")?;
    let password = prompter.ask_text("Enter ScaleOps password", "")?;

    Ok(ScaleopsAuthentication {
        enabled: true,
        kind: Some(kind),
        user: Some(user),
        password: Some(password),
    })
}
