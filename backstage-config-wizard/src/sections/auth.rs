use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{AuthConfig, AuthProvider, GithubAuth, MicrosoftAuth, defaults};
use tracing::debug;

use crate::flow::gated;

/// Sign-in providers for the development environment. Always present, with
/// no providers when both are declined.
pub fn auth<P: Prompter + ?Sized>(prompter: &mut P) -> Result<AuthConfig, PromptError> {
    debug!("collecting authentication settings");
    prompter.section("Authentication Configurations")?;

    let mut auth = AuthConfig::new(defaults::AUTH_ENVIRONMENT);
    let microsoft = gated(prompter, "Configure Microsoft authentication?", false, microsoft)?;
    let github = gated(prompter, "Configure GitHub authentication?", false, github)?;
    for provider in microsoft.into_iter().chain(github) {
        auth = auth.with_provider(provider);
    }
    Ok(auth)
}

fn microsoft<P: Prompter + ?Sized>(prompter: &mut P) -> Result<AuthProvider, PromptError> {
    Ok(AuthProvider::Microsoft(MicrosoftAuth {
        client_id: prompter.ask_text("Enter Microsoft client ID", "")?,
        client_secret: prompter.ask_text("Enter Microsoft client secret", "")?,
        tenant_id: prompter.ask_text("Enter Microsoft tenant ID", "")?,
        domain_hint: prompter.ask_text("Enter Microsoft domain hint", "")?,
    }))
}

fn github<P: Prompter + ?Sized>(prompter: &mut P) -> Result<AuthProvider, PromptError> {
    Ok(AuthProvider::Github(GithubAuth {
        client_id: prompter.ask_text("Enter GitHub client ID", "")?,
        client_secret: prompter.ask_text("Enter GitHub client secret", "")?,
    }))
}
