use backstage_config_prompt::{PromptError, Prompter};
use backstage_config_types::{BackendConfig, defaults};
use tracing::debug;

/// Listen port and base URL; the base URL default points at the port just
/// entered.
pub fn backend<P: Prompter + ?Sized>(prompter: &mut P) -> Result<BackendConfig, PromptError> {
    debug!("collecting backend settings");
    prompter.section("Backend Configurations")?;

    let port = prompter.ask_text("Enter backend port", defaults::BACKEND_PORT)?;
    let base_url =
        prompter.ask_text("Enter backend base URL", &defaults::backend_base_url(&port))?;

    Ok(BackendConfig::new(base_url, port))
}

#[cfg(test)]
mod tests {
    use backstage_config_prompt::TestBackend;

    use super::*;

    #[test]
    fn base_url_default_follows_entered_port() {
        let mut prompts = TestBackend::new().with_answer("Enter backend port", "9000");
        let backend = backend(&mut prompts).unwrap();

        assert_eq!(
            prompts.prompt_for("Enter backend base URL"),
            Some("Enter backend base URL [http://localhost:9000]: ")
        );
        assert_eq!(backend.base_url, "http://localhost:9000");
        assert_eq!(backend.listen.port, "9000");
    }

    #[test]
    fn explicit_base_url_wins() {
        let mut prompts = TestBackend::new()
            .with_answer("Enter backend base URL", "https://backstage.example.com");
        let backend = backend(&mut prompts).unwrap();

        assert_eq!(backend.base_url, "https://backstage.example.com");
        assert_eq!(backend.listen.port, "7007");
    }
}
