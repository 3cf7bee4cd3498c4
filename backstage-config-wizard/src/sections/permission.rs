use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{PermissionConfig, RbacConfig, RbacUser, RbacUsers, defaults};
use tracing::debug;

use crate::flow::{collect_repeated, gated};

/// Permission framework with the RBAC plugin. Declining leaves the framework
/// disabled with no `rbac` settings at all.
pub fn permission<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<PermissionConfig, PromptError> {
    debug!("collecting permission settings");
    prompter.section("Permission Framework Configurations")?;

    let rbac = gated(prompter, "Configure permissions?", false, rbac)?;
    Ok(rbac.map(PermissionConfig::rbac).unwrap_or_default())
}

fn rbac<P: Prompter + ?Sized>(prompter: &mut P) -> Result<RbacConfig, PromptError> {
    prompter.section("RBAC Plugin Configurations")?;

    let policies_csv_file =
        prompter.ask_text("Enter policies CSV file path", defaults::RBAC_POLICIES_CSV_FILE)?;
    let policy_file_reload = prompter.ask_bool("Enable policy file reload?", true)?;
    let plugins_with_permission = prompter.ask_list(
        "Enter plugins with permission",
        defaults::RBAC_PLUGINS_WITH_PERMISSION,
    )?;

    prompter.note("Configuring admin users:")?;
    let admin = users(
        prompter,
        "Add admin user?",
        "Enter admin user name (e.g., user:default/username)",
    )?;

    prompter.note("Configuring super admin users:")?;
    let super_admin = users(
        prompter,
        "Add super admin user?",
        "Enter super admin user name (e.g., user:default/username)",
    )?;

    Ok(RbacConfig {
        policies_csv_file,
        policy_file_reload,
        plugins_with_permission,
        admin,
        super_admin,
    })
}

fn users<P: Prompter + ?Sized>(
    prompter: &mut P,
    add_question: &str,
    name_question: &str,
) -> Result<RbacUsers, PromptError> {
    let users = collect_repeated(prompter, add_question, |prompter| {
        Ok(RbacUser {
            name: prompter.ask_text(name_question, "")?,
        })
    })?;
    Ok(RbacUsers { users })
}

#[cfg(test)]
mod tests {
    use backstage_config_prompt::TestBackend;

    use super::*;

    #[test]
    fn declined_permissions_are_disabled() {
        let mut prompts = TestBackend::new();
        let permission = permission(&mut prompts).unwrap();

        assert_eq!(permission, PermissionConfig::default());
        assert!(!prompts.sections().contains(&"RBAC Plugin Configurations".to_string()));
    }

    #[test]
    fn admin_and_super_admin_groups_are_separate() {
        let mut prompts = TestBackend::new()
            .with_yes("Configure permissions?")
            .with_answers("Add admin user?", ["y", "y", "n"])
            .with_answers(
                "Enter admin user name (e.g., user:default/username)",
                ["user:default/alice", "user:default/bob"],
            )
            .with_no("Add super admin user?");
        let permission = permission(&mut prompts).unwrap();

        assert!(permission.enabled);
        let rbac = permission.rbac.unwrap();
        let admins: Vec<_> = rbac.admin.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(admins, vec!["user:default/alice", "user:default/bob"]);
        assert!(rbac.super_admin.users.is_empty());
        assert!(rbac.policy_file_reload);
        assert_eq!(rbac.plugins_with_permission.len(), 6);
    }
}
