use std::collections::BTreeMap;

use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{CatalogConfig, CatalogProviders, MicrosoftGraphOrg, defaults};
use tracing::debug;

use crate::flow::gated;

/// Catalog rules and locations are fixed; only the Microsoft Graph org
/// provider is optional.
pub fn catalog<P: Prompter + ?Sized>(prompter: &mut P) -> Result<CatalogConfig, PromptError> {
    debug!("collecting catalog settings");
    prompter.section("Catalog Configurations")?;

    let graph = gated(prompter, "Configure Microsoft Graph integration?", false, |prompter| {
        let alias = prompter.ask_text(
            "Enter Microsoft Graph provider alias",
            defaults::GRAPH_PROVIDER_ALIAS,
        )?;
        let client_id = prompter.ask_text("Enter Microsoft Graph client ID", "")?;
        let client_secret = prompter.ask_text("Enter Microsoft Graph client secret", "")?;
        let tenant_id = prompter.ask_text("Enter Microsoft Graph tenant ID", "")?;
        Ok((alias, MicrosoftGraphOrg::new(client_id, client_secret, tenant_id)))
    })?;

    Ok(CatalogConfig::new(CatalogProviders {
        microsoft_graph_org: graph.into_iter().collect::<BTreeMap<_, _>>(),
    }))
}

#[cfg(test)]
mod tests {
    use backstage_config_prompt::TestBackend;

    use super::*;

    #[test]
    fn graph_provider_is_keyed_by_alias() {
        let mut prompts = TestBackend::new()
            .with_yes("Configure Microsoft Graph integration?")
            .with_answer("Enter Microsoft Graph provider alias", "corp")
            .with_answer("Enter Microsoft Graph tenant ID", "tenant");
        let catalog = catalog(&mut prompts).unwrap();

        let graph = &catalog.providers.microsoft_graph_org["corp"];
        assert_eq!(graph.tenant_id, "tenant");
        assert_eq!(graph.schedule.frequency, "PT1H");
        assert_eq!(catalog.providers.microsoft_graph_org.len(), 1);
    }

    #[test]
    fn declined_graph_leaves_no_providers() {
        let mut prompts = TestBackend::new();
        let catalog = catalog(&mut prompts).unwrap();

        assert!(catalog.providers.microsoft_graph_org.is_empty());
        assert_eq!(catalog.locations.len(), 3);
        assert_eq!(prompts.asked().len(), 1);
    }
}
