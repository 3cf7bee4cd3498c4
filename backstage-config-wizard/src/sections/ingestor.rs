use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{
    ComponentsConfig, CrossplaneClaims, CrossplaneIngestion, CrossplaneXrds, CustomWorkloadType,
    GitTarget, KubernetesIngestorConfig, MappingsConfig, PublishPhase, TaskRunner, defaults,
};
use tracing::debug;

use crate::flow::{collect_repeated, gated};

/// Kubernetes ingestor: entity mappings, workload component generation,
/// custom workload types and Crossplane claim/XRD ingestion.
pub fn kubernetes_ingestor<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Option<KubernetesIngestorConfig>, PromptError> {
    debug!("collecting kubernetes ingestor settings");
    prompter.section("Kubernetes Ingestor Configurations")?;

    gated(prompter, "Configure Kubernetes Ingestor?", false, |prompter| {
        let mappings = mappings(prompter)?;
        let (mut components, allowed_cluster_names) = components(prompter)?;
        components.custom_workload_types = custom_workload_types(prompter)?;
        let crossplane = crossplane(prompter)?;

        Ok(KubernetesIngestorConfig {
            mappings,
            components,
            crossplane,
            allowed_cluster_names,
        })
    })
}

fn mappings<P: Prompter + ?Sized>(prompter: &mut P) -> Result<MappingsConfig, PromptError> {
    prompter.section("Kubernetes To Backstage Mappings Configurations")?;

    Ok(MappingsConfig {
        namespace_model: prompter.ask_text(
            "Enter namespace model (cluster/namespace/default)",
            defaults::NAMESPACE_MODEL,
        )?,
        name_model: prompter.ask_text(
            "Enter name model (name-cluster/name-namespace/name)",
            defaults::NAME_MODEL,
        )?,
        title_model: prompter.ask_text(
            "Enter title model (name/name-cluster/name-namespace)",
            defaults::TITLE_MODEL,
        )?,
        system_model: prompter.ask_text(
            "Enter system model (cluster/namespace/cluster-namespace/default)",
            defaults::SYSTEM_MODEL,
        )?,
        references_namespace_model: prompter.ask_text(
            "Enter references namespace model (default/same)",
            defaults::REFERENCES_NAMESPACE_MODEL,
        )?,
    })
}

/// Component generation settings, without custom workload types, plus the
/// cluster allow-list.
fn components<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<(ComponentsConfig, Vec<String>), PromptError> {
    prompter.section("Kubernetes Workloads Component Generation Configurations")?;

    let enabled = prompter.ask_bool("Enable components?", true)?;
    let excluded_namespaces =
        prompter.ask_list("Enter excluded namespaces", defaults::EXCLUDED_NAMESPACES)?;
    let disable_default_workload_types =
        prompter.ask_bool("Disable default workload types?", false)?;
    let only_ingest_annotated_resources =
        prompter.ask_bool("Only ingest annotated resources?", false)?;
    let allowed_cluster_names = prompter.ask_list("Enter allowed cluster names", &[])?;

    let components = ComponentsConfig {
        enabled,
        task_runner: TaskRunner::default(),
        excluded_namespaces,
        custom_workload_types: Vec::new(),
        disable_default_workload_types,
        only_ingest_annotated_resources,
    };
    Ok((components, allowed_cluster_names))
}

fn custom_workload_types<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Vec<CustomWorkloadType>, PromptError> {
    prompter.section("Custom Workload Types Configurations")?;

    let types = gated(prompter, "Add custom workload types?", false, |prompter| {
        collect_repeated(prompter, "Add another custom workload type?", |prompter| {
            let group = prompter.ask_text("Enter group", "")?;
            let api_version = prompter.ask_text("Enter API version", "")?;
            let plural = prompter.ask_text("Enter plural", "")?;
            let singular = prompter.ask_text("Enter singular (optional)", "")?;
            Ok(CustomWorkloadType {
                group,
                api_version,
                plural,
                singular: (!singular.is_empty()).then_some(singular),
            })
        })
    })?;
    Ok(types.unwrap_or_default())
}

fn crossplane<P: Prompter + ?Sized>(prompter: &mut P) -> Result<CrossplaneIngestion, PromptError> {
    prompter.section("Crossplane Ingestion Configurations")?;

    let ingest_all_claims = prompter.ask_bool("Ingest all claims?", true)?;
    let convert_default_values_to_placeholders =
        prompter.ask_bool("Convert default values to placeholders?", true)?;
    let enabled = prompter.ask_bool("Enable XRDs?", true)?;
    let ingest_all_xrds = prompter.ask_bool("Ingest all XRDs?", true)?;

    let allow_repo_selection = prompter.ask_bool("Allow repo selection?", false)?;
    let allowed_targets =
        prompter.ask_list("Enter allowed targets", defaults::PUBLISH_ALLOWED_TARGETS)?;
    let target = prompter.ask_text("Enter target", defaults::PUBLISH_TARGET)?;
    let repo_url = prompter.ask_text("Enter Git repo URL", defaults::PUBLISH_GIT_REPO_URL)?;
    let target_branch = prompter.ask_text("Enter target branch", defaults::PUBLISH_GIT_BRANCH)?;

    Ok(CrossplaneIngestion {
        claims: CrossplaneClaims { ingest_all_claims },
        xrds: CrossplaneXrds {
            convert_default_values_to_placeholders,
            enabled,
            publish_phase: PublishPhase {
                allow_repo_selection,
                allowed_targets,
                target,
                git: GitTarget {
                    repo_url,
                    target_branch,
                },
            },
            task_runner: TaskRunner::default(),
            ingest_all_xrds,
        },
    })
}
