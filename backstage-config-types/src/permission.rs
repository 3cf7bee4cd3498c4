use serde::{Deserialize, Serialize};

/// Permission framework settings.
///
/// `rbac` is absent unless the operator configured permissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionConfig {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rbac: Option<RbacConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacConfig {
    #[serde(rename = "policies-csv-file")]
    pub policies_csv_file: String,
    pub policy_file_reload: bool,
    pub plugins_with_permission: Vec<String>,
    pub admin: RbacUsers,
    pub super_admin: RbacUsers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RbacUsers {
    pub users: Vec<RbacUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacUser {
    /// Entity reference, e.g. `user:default/jane`.
    pub name: String,
}

impl PermissionConfig {
    pub fn rbac(rbac: RbacConfig) -> Self {
        Self {
            enabled: true,
            rbac: Some(rbac),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_permissions_render_only_the_flag() {
        let yaml = serde_yaml::to_string(&PermissionConfig::default()).unwrap();
        assert_eq!(yaml, "enabled: false\n");
    }

    #[test]
    fn rbac_keys_keep_their_mixed_case() {
        let permission = PermissionConfig::rbac(RbacConfig {
            policies_csv_file: "/etc/permissions.csv".into(),
            policy_file_reload: true,
            plugins_with_permission: vec!["catalog".into()],
            admin: RbacUsers::default(),
            super_admin: RbacUsers {
                users: vec![RbacUser {
                    name: "user:default/root".into(),
                }],
            },
        });
        let yaml = serde_yaml::to_string(&permission).unwrap();

        assert!(yaml.contains("policies-csv-file: /etc/permissions.csv\n"));
        assert!(yaml.contains("policyFileReload: true\n"));
        assert!(yaml.contains("superAdmin:\n"));
        assert!(yaml.contains("- name: user:default/root\n"));
    }
}
