use serde::{Deserialize, Serialize};

/// Source control integrations. `github` is empty when the operator skips it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    #[serde(default)]
    pub github: Vec<GithubIntegration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubIntegration {
    pub host: String,
    pub token: String,
}
