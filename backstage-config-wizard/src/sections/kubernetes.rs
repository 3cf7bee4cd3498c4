use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{Cluster, KubernetesConfig, defaults};
use tracing::debug;

use crate::flow::{collect_repeated, gated};

pub fn kubernetes<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Option<KubernetesConfig>, PromptError> {
    debug!("collecting kubernetes settings");
    prompter.section("Kubernetes Configurations")?;

    gated(prompter, "Configure Kubernetes integration?", false, |prompter| {
        let clusters = collect_repeated(prompter, "Add a Kubernetes cluster?", cluster)?;
        Ok(KubernetesConfig::new(clusters))
    })
}

fn cluster<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Cluster, PromptError> {
    let name = prompter.ask_text("Enter cluster name", "")?;
    let url = prompter.ask_text("Enter cluster URL", "")?;
    let auth_provider = prompter.ask_text(
        "Enter auth provider (serviceAccount/oidc)",
        defaults::SERVICE_ACCOUNT_AUTH_PROVIDER,
    )?;
    let skip_tls_verify = prompter.ask_bool("Skip TLS verification?", false)?;

    let service_account_token = if auth_provider == defaults::SERVICE_ACCOUNT_AUTH_PROVIDER {
        Some(prompter.ask_text("Enter service account token", "")?)
    } else {
        None
    };

    Ok(Cluster {
        name,
        url,
        auth_provider,
        service_account_token,
        skip_tls_verify,
    })
}

#[cfg(test)]
mod tests {
    use backstage_config_prompt::TestBackend;

    use super::*;

    #[test]
    fn token_is_only_asked_for_service_accounts() {
        let mut prompts = TestBackend::new()
            .with_yes("Configure Kubernetes integration?")
            .with_answers("Add a Kubernetes cluster?", ["y", "y", "n"])
            .with_answers("Enter cluster name", ["sa", "oidc"])
            .with_answers("Enter auth provider (serviceAccount/oidc)", ["", "oidc"])
            .with_answer("Enter service account token", "secret");
        let kubernetes = kubernetes(&mut prompts).unwrap().unwrap();

        let clusters: Vec<_> = kubernetes.clusters().collect();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].service_account_token.as_deref(), Some("secret"));
        assert_eq!(clusters[1].auth_provider, "oidc");
        assert_eq!(clusters[1].service_account_token, None);
        assert_eq!(prompts.times_asked("Enter service account token"), 1);
    }

    #[test]
    fn declined_section_is_absent() {
        let mut prompts = TestBackend::new();

        assert_eq!(kubernetes(&mut prompts).unwrap(), None);
        assert!(!prompts.was_asked("Add a Kubernetes cluster?"));
    }
}
