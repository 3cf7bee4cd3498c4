use serde::{Deserialize, Serialize};

use crate::defaults;

/// Settings for ingesting Kubernetes workloads and Crossplane resources
/// into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesIngestorConfig {
    pub mappings: MappingsConfig,
    pub components: ComponentsConfig,
    pub crossplane: CrossplaneIngestion,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_cluster_names: Vec<String>,
}

/// How Kubernetes objects map onto catalog entity fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingsConfig {
    pub namespace_model: String,
    pub name_model: String,
    pub title_model: String,
    pub system_model: String,
    pub references_namespace_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentsConfig {
    pub enabled: bool,
    pub task_runner: TaskRunner,
    pub excluded_namespaces: Vec<String>,
    pub custom_workload_types: Vec<CustomWorkloadType>,
    pub disable_default_workload_types: bool,
    pub only_ingest_annotated_resources: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRunner {
    pub frequency: u32,
    pub timeout: u32,
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self {
            frequency: defaults::TASK_RUNNER_FREQUENCY,
            timeout: defaults::TASK_RUNNER_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWorkloadType {
    pub group: String,
    pub api_version: String,
    pub plural: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossplaneIngestion {
    pub claims: CrossplaneClaims,
    pub xrds: CrossplaneXrds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossplaneClaims {
    pub ingest_all_claims: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossplaneXrds {
    pub convert_default_values_to_placeholders: bool,
    pub enabled: bool,
    pub publish_phase: PublishPhase,
    pub task_runner: TaskRunner,
    #[serde(rename = "ingestAllXRDs")]
    pub ingest_all_xrds: bool,
}

/// Where generated templates for XRDs get published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishPhase {
    pub allow_repo_selection: bool,
    pub allowed_targets: Vec<String>,
    pub target: String,
    pub git: GitTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitTarget {
    pub repo_url: String,
    pub target_branch: String,
}
