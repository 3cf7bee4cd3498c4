//! Default answers and fixed values for every configuration area.
//!
//! The wizard never embeds a literal default inline; it reads them from here.
//! Defaults that depend on an earlier answer are functions of that answer.

pub const APP_TITLE: &str = "TeraSky OSS Backstage";
pub const APP_BASE_URL: &str = "http://localhost:3000";
pub const ORGANIZATION_NAME: &str = "TeraSky";

pub const BACKEND_PORT: &str = "7007";
pub const CSP_CONNECT_SRC: &[&str] = &["'self'", "http:", "https:"];
pub const CORS_ORIGIN: &str = "http://localhost:3000";
pub const CORS_METHODS: &[&str] = &["GET", "HEAD", "PATCH", "POST", "PUT", "DELETE"];
pub const DATABASE_CLIENT: &str = "better-sqlite3";
pub const DATABASE_CONNECTION: &str = ":memory:";
pub const READING_ALLOW_HOSTS: &[&str] = &["raw.githubusercontent.com"];

/// Backend base URL offered once the listen port is known.
pub fn backend_base_url(port: &str) -> String {
    format!("http://localhost:{port}")
}

pub const GITHUB_HOST: &str = "github.com";

pub const AUTH_ENVIRONMENT: &str = "development";

pub const TECHDOCS_BUILDER: &str = "local";
pub const TECHDOCS_GENERATOR_RUN_IN: &str = "docker";
pub const TECHDOCS_PUBLISHER: &str = "local";

pub const GRAPH_PROVIDER_ALIAS: &str = "default";
pub const GRAPH_USER_FILTER: &str = "accountEnabled eq true and userType eq 'member'";
pub const GRAPH_SCHEDULE_FREQUENCY: &str = "PT1H";
pub const GRAPH_SCHEDULE_TIMEOUT: &str = "PT50M";
pub const CATALOG_ENTITY_FILENAME: &str = "catalog-info.yaml";
pub const CATALOG_PULL_REQUEST_BRANCH: &str = "backstage-integration";
pub const CATALOG_ALLOWED_KINDS: &[&str] =
    &["Component", "System", "API", "Resource", "Location", "Template"];
pub const CATALOG_ENTITIES_LOCATION: &str = "../../examples/entities.yaml";
pub const CATALOG_TEMPLATE_LOCATION: &str = "../../examples/template/template.yaml";
pub const CATALOG_ORG_LOCATION: &str = "../../examples/org.yaml";

/// Cluster auth provider for which a service account token is collected.
pub const SERVICE_ACCOUNT_AUTH_PROVIDER: &str = "serviceAccount";
pub const SERVICE_LOCATOR_METHOD: &str = "multiTenant";
pub const CLUSTER_LOCATOR_METHOD: &str = "config";

pub const NAMESPACE_MODEL: &str = "default";
pub const NAME_MODEL: &str = "name-cluster";
pub const TITLE_MODEL: &str = "name";
pub const SYSTEM_MODEL: &str = "cluster-namespace";
pub const REFERENCES_NAMESPACE_MODEL: &str = "default";
pub const EXCLUDED_NAMESPACES: &[&str] = &["kube-public", "kube-system", "default"];
pub const TASK_RUNNER_FREQUENCY: u32 = 10;
pub const TASK_RUNNER_TIMEOUT: u32 = 600;
pub const PUBLISH_ALLOWED_TARGETS: &[&str] = &["github.com", "gitlab.com"];
pub const PUBLISH_TARGET: &str = "github";
pub const PUBLISH_GIT_REPO_URL: &str = "github.com?owner=vrabbi-tap&repo=acc-v2-poc";
pub const PUBLISH_GIT_BRANCH: &str = "main";

pub const SCALEOPS_BASE_URL: &str = "http://scaleops.10.100.148.235.nip.io";
pub const SCALEOPS_CURRENCY_PREFIX: &str = "$";
pub const SCALEOPS_AUTH_TYPE: &str = "internal";

pub const PROXY_ENDPOINT_PATH: &str = "/scaleops";

pub const DEVPOD_DEFAULT_IDE: &str = "webstorm";

pub const RBAC_POLICIES_CSV_FILE: &str = "/home/vrabbi/crossplane/bakstage-plugins/permissions.csv";
pub const RBAC_PLUGINS_WITH_PERMISSION: &[&str] = &[
    "catalog",
    "permission",
    "kubernetes",
    "crossplane",
    "scaffolder",
    "kyverno",
];

/// Owned copy of a default list, for records that store `Vec<String>`.
pub fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_follows_port() {
        assert_eq!(backend_base_url("9000"), "http://localhost:9000");
        assert_eq!(backend_base_url(BACKEND_PORT), "http://localhost:7007");
    }

    #[test]
    fn owned_preserves_order() {
        assert_eq!(owned(&["b", "a"]), vec!["b".to_string(), "a".to_string()]);
    }
}
