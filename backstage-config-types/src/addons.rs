use serde::{Deserialize, Serialize};

/// ScaleOps cost-optimization dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleopsConfig {
    pub base_url: String,
    pub currency_prefix: String,
    pub link_to_dashboard: bool,
    pub authentication: ScaleopsAuthentication,
}

/// Credentials are only present when authentication is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleopsAuthentication {
    pub enabled: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ScaleopsAuthentication {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            kind: None,
            user: None,
            password: None,
        }
    }
}

/// DevPod developer environments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevpodConfig {
    #[serde(rename = "defaultIDE")]
    pub default_ide: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossplaneConfig {
    pub enable_permissions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KyvernoConfig {
    pub enable_permissions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_authentication_has_no_credentials() {
        let yaml = serde_yaml::to_string(&ScaleopsAuthentication::disabled()).unwrap();
        assert_eq!(yaml, "enabled: false\n");
    }

    #[test]
    fn devpod_uses_upper_case_ide_key() {
        let yaml = serde_yaml::to_string(&DevpodConfig {
            default_ide: "vscode".into(),
        })
        .unwrap();
        assert_eq!(yaml, "defaultIDE: vscode\n");
    }
}
