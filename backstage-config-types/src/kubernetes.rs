use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesConfig {
    pub frontend: KubernetesFrontend,
    pub service_locator_method: ServiceLocatorMethod,
    pub cluster_locator_methods: Vec<ClusterLocatorMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesFrontend {
    pub pod_delete: PodDelete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodDelete {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLocatorMethod {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterLocatorMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub clusters: Vec<Cluster>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub name: String,
    pub url: String,
    pub auth_provider: String,
    /// Only collected for service-account clusters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_token: Option<String>,
    #[serde(rename = "skipTLSVerify")]
    pub skip_tls_verify: bool,
}

impl KubernetesConfig {
    /// Multi-tenant setup with pod deletion enabled and a single
    /// config-based locator holding `clusters`.
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self {
            frontend: KubernetesFrontend {
                pod_delete: PodDelete { enabled: true },
            },
            service_locator_method: ServiceLocatorMethod {
                kind: defaults::SERVICE_LOCATOR_METHOD.to_string(),
            },
            cluster_locator_methods: vec![ClusterLocatorMethod {
                kind: defaults::CLUSTER_LOCATOR_METHOD.to_string(),
                clusters,
            }],
        }
    }

    /// All clusters across every locator method.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.cluster_locator_methods
            .iter()
            .flat_map(|method| method.clusters.iter())
    }
}
