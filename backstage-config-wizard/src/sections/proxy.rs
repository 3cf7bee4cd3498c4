use std::collections::BTreeMap;

use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{ProxyConfig, ProxyEndpoint, defaults};
use tracing::{debug, warn};

use crate::flow::{collect_repeated, gated};

/// Backend proxy endpoints keyed by path. Entering a path twice keeps the
/// later endpoint.
pub fn proxy<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<ProxyConfig>, PromptError> {
    debug!("collecting proxy settings");
    prompter.section("Backstage Backend Proxy Configurations")?;

    gated(prompter, "Configure proxy endpoints?", false, |prompter| {
        let entries = collect_repeated(prompter, "Add proxy endpoint?", endpoint)?;

        let mut endpoints = BTreeMap::new();
        for (path, endpoint) in entries {
            if let Some(previous) = endpoints.insert(path.clone(), endpoint) {
                warn!(
                    path,
                    previous = %previous.target,
                    "proxy path entered twice, keeping the later endpoint"
                );
            }
        }
        Ok(ProxyConfig { endpoints })
    })
}

fn endpoint<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<(String, ProxyEndpoint), PromptError> {
    let path = prompter.ask_text(
        "Enter endpoint path (e.g., /scaleops)",
        defaults::PROXY_ENDPOINT_PATH,
    )?;
    let target = prompter.ask_text("Enter target URL", "")?;
    let change_origin = prompter.ask_bool("Enable change origin?", true)?;

    Ok((
        path,
        ProxyEndpoint {
            target,
            change_origin,
        },
    ))
}
