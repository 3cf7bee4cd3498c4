use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub providers: CatalogProviders,
    pub import: CatalogImport,
    pub rules: Vec<CatalogRule>,
    pub locations: Vec<CatalogLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProviders {
    /// Microsoft Graph org sync configurations, keyed by alias.
    #[serde(default)]
    pub microsoft_graph_org: BTreeMap<String, MicrosoftGraphOrg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftGraphOrg {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub user: MicrosoftGraphUser,
    pub schedule: MicrosoftGraphSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicrosoftGraphUser {
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicrosoftGraphSchedule {
    pub frequency: String,
    pub timeout: String,
}

impl MicrosoftGraphOrg {
    /// Graph org sync for the given app registration, importing enabled
    /// member accounts hourly.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            tenant_id: tenant_id.into(),
            user: MicrosoftGraphUser {
                filter: defaults::GRAPH_USER_FILTER.to_string(),
            },
            schedule: MicrosoftGraphSchedule {
                frequency: defaults::GRAPH_SCHEDULE_FREQUENCY.to_string(),
                timeout: defaults::GRAPH_SCHEDULE_TIMEOUT.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogImport {
    pub entity_filename: String,
    pub pull_request_branch_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRule {
    pub allow: Vec<String>,
}

impl CatalogRule {
    pub fn allow(kinds: &[&str]) -> Self {
        Self {
            allow: defaults::owned(kinds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLocation {
    #[serde(rename = "type")]
    pub kind: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<CatalogRule>,
}

impl CatalogLocation {
    fn file(target: &str, rules: Vec<CatalogRule>) -> Self {
        Self {
            kind: "file".to_string(),
            target: target.to_string(),
            rules,
        }
    }
}

impl CatalogConfig {
    /// Catalog with the standard import settings, rules and example
    /// locations, plus the given external providers.
    pub fn new(providers: CatalogProviders) -> Self {
        Self {
            providers,
            import: CatalogImport {
                entity_filename: defaults::CATALOG_ENTITY_FILENAME.to_string(),
                pull_request_branch_name: defaults::CATALOG_PULL_REQUEST_BRANCH.to_string(),
            },
            rules: vec![CatalogRule::allow(defaults::CATALOG_ALLOWED_KINDS)],
            locations: vec![
                CatalogLocation::file(defaults::CATALOG_ENTITIES_LOCATION, Vec::new()),
                CatalogLocation::file(
                    defaults::CATALOG_TEMPLATE_LOCATION,
                    vec![CatalogRule::allow(&["Template"])],
                ),
                CatalogLocation::file(
                    defaults::CATALOG_ORG_LOCATION,
                    vec![CatalogRule::allow(&["User", "Group"])],
                ),
            ],
        }
    }
}
