use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Backend proxy endpoints, keyed by request path (e.g. `/scaleops`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub endpoints: BTreeMap<String, ProxyEndpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEndpoint {
    pub target: String,
    pub change_origin: bool,
}
