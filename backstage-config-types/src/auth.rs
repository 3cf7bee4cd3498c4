use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Authentication settings.
///
/// Providers are keyed by their id, then by environment name:
///
/// ```yaml
/// auth:
///   environment: development
///   providers:
///     github:
///       development:
///         clientId: ...
///         clientSecret: ...
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub environment: String,
    #[serde(default)]
    pub providers: BTreeMap<AuthProviderId, BTreeMap<String, AuthProvider>>,
}

impl AuthConfig {
    /// Settings for `environment` with no providers.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            providers: BTreeMap::new(),
        }
    }

    /// Register `provider` for the configured environment, keyed by its own id.
    pub fn with_provider(mut self, provider: AuthProvider) -> Self {
        self.providers
            .entry(provider.id())
            .or_default()
            .insert(self.environment.clone(), provider);
        self
    }

    /// The provider registered under `id` for the configured environment.
    pub fn provider(&self, id: AuthProviderId) -> Option<&AuthProvider> {
        self.providers.get(&id)?.get(&self.environment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderId {
    Microsoft,
    Github,
}

/// Provider-specific sign-in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthProvider {
    Microsoft(MicrosoftAuth),
    Github(GithubAuth),
}

impl AuthProvider {
    pub fn id(&self) -> AuthProviderId {
        match self {
            Self::Microsoft(_) => AuthProviderId::Microsoft,
            Self::Github(_) => AuthProviderId::Github,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftAuth {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub domain_hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubAuth {
    pub client_id: String,
    pub client_secret: String,
}
