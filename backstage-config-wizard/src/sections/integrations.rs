use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{GithubIntegration, IntegrationsConfig, defaults};
use tracing::debug;

use crate::flow::gated;

pub fn integrations<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<IntegrationsConfig, PromptError> {
    debug!("collecting source control integrations");
    prompter.section("Source Control Integration Configurations")?;

    let github = gated(prompter, "Configure GitHub integration?", true, |prompter| {
        Ok(GithubIntegration {
            host: defaults::GITHUB_HOST.to_string(),
            token: prompter.ask_text("Enter GitHub PAT", "")?,
        })
    })?;

    Ok(IntegrationsConfig {
        github: github.into_iter().collect(),
    })
}
