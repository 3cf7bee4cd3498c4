use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{Config, ScaffolderConfig, TechdocsConfig};
use tracing::info;

use crate::sections;

/// Ask every section in order and assemble the configuration tree.
///
/// Order: app, organization, backend, authentication, integrations, catalog,
/// kubernetes, kubernetes ingestor, scaleops, proxy, devpod, permissions,
/// crossplane, kyverno. Techdocs and the scaffolder are not asked about.
pub fn run<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Config, PromptError> {
    let app = sections::app(prompter)?;
    let organization = sections::organization(prompter)?;
    let backend = sections::backend(prompter)?;
    let auth = sections::auth(prompter)?;
    let integrations = sections::integrations(prompter)?;
    let catalog = sections::catalog(prompter)?;
    let kubernetes = sections::kubernetes(prompter)?;
    let kubernetes_ingestor = sections::kubernetes_ingestor(prompter)?;
    let scaleops = sections::scaleops(prompter)?;
    let proxy = sections::proxy(prompter)?;
    let devpod = sections::devpod(prompter)?;
    let permission = sections::permission(prompter)?;
    let crossplane = sections::crossplane(prompter)?;
    let kyverno = sections::kyverno(prompter)?;

    info!("all sections collected");

    Ok(Config {
        app,
        organization,
        backend,
        integrations,
        proxy,
        techdocs: TechdocsConfig::default(),
        auth,
        scaffolder: ScaffolderConfig::default(),
        catalog,
        kubernetes_ingestor,
        kubernetes,
        scaleops,
        crossplane,
        kyverno,
        permission,
        devpod,
    })
}
