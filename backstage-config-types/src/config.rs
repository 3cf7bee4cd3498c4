use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::{
    AuthConfig, BackendConfig, CatalogConfig, CrossplaneConfig, DevpodConfig, IntegrationsConfig,
    KubernetesConfig, KubernetesIngestorConfig, KyvernoConfig, PermissionConfig, ProxyConfig,
    ScaleopsConfig,
};

/// The whole `app-config` document.
///
/// Field order is the key order of the serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub app: AppConfig,
    pub organization: OrganizationConfig,
    pub backend: BackendConfig,
    pub integrations: IntegrationsConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
    pub techdocs: TechdocsConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub scaffolder: ScaffolderConfig,
    pub catalog: CatalogConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_ingestor: Option<KubernetesIngestorConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes: Option<KubernetesConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaleops: Option<ScaleopsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossplane: Option<CrossplaneConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyverno: Option<KyvernoConfig>,
    pub permission: PermissionConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devpod: Option<DevpodConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    pub name: String,
}

/// TechDocs settings. Not prompted; always the local/docker setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechdocsConfig {
    pub builder: String,
    pub generator: GeneratorConfig,
    pub publisher: PublisherConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub run_in: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherConfig {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for TechdocsConfig {
    fn default() -> Self {
        Self {
            builder: defaults::TECHDOCS_BUILDER.to_string(),
            generator: GeneratorConfig {
                run_in: defaults::TECHDOCS_GENERATOR_RUN_IN.to_string(),
            },
            publisher: PublisherConfig {
                kind: defaults::TECHDOCS_PUBLISHER.to_string(),
            },
        }
    }
}

/// Scaffolder settings; rendered as an empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaffolderConfig {}
