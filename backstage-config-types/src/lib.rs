//! Typed model of the Backstage `app-config` document.
//!
//! This crate provides the records the wizard assembles and serializes:
//! - `Config` - The root of the configuration tree
//! - One record per configuration area (backend, auth, catalog, kubernetes, ...)
//! - `defaults` - Every default value the wizard offers, declared once
//!
//! Optional branches are `Option`s and are skipped during serialization when
//! absent, so a declined section never shows up as `null` in the output.

pub mod defaults;

mod config;
pub use config::{
    AppConfig, Config, GeneratorConfig, OrganizationConfig, PublisherConfig, ScaffolderConfig,
    TechdocsConfig,
};

mod backend;
pub use backend::{
    BackendConfig, CorsConfig, CspConfig, DatabaseConfig, ListenConfig, ReadingAllow,
    ReadingConfig,
};

mod auth;
pub use auth::{AuthConfig, AuthProvider, AuthProviderId, GithubAuth, MicrosoftAuth};

mod integrations;
pub use integrations::{GithubIntegration, IntegrationsConfig};

mod proxy;
pub use proxy::{ProxyConfig, ProxyEndpoint};

mod catalog;
pub use catalog::{
    CatalogConfig, CatalogImport, CatalogLocation, CatalogProviders, CatalogRule,
    MicrosoftGraphOrg, MicrosoftGraphSchedule, MicrosoftGraphUser,
};

mod kubernetes;
pub use kubernetes::{
    Cluster, ClusterLocatorMethod, KubernetesConfig, KubernetesFrontend, PodDelete,
    ServiceLocatorMethod,
};

mod ingestor;
pub use ingestor::{
    ComponentsConfig, CrossplaneClaims, CrossplaneIngestion, CrossplaneXrds, CustomWorkloadType,
    GitTarget, KubernetesIngestorConfig, MappingsConfig, PublishPhase, TaskRunner,
};

mod addons;
pub use addons::{
    CrossplaneConfig, DevpodConfig, KyvernoConfig, ScaleopsAuthentication, ScaleopsConfig,
};

mod permission;
pub use permission::{PermissionConfig, RbacConfig, RbacUser, RbacUsers};
