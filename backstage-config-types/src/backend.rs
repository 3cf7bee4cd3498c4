use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    pub base_url: String,
    pub listen: ListenConfig,
    pub csp: CspConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub reading: ReadingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenConfig {
    /// Kept as entered; the wizard does not validate it.
    pub port: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CspConfig {
    #[serde(rename = "connect-src")]
    pub connect_src: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsConfig {
    pub origin: String,
    pub methods: Vec<String>,
    pub credentials: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub client: String,
    pub connection: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingConfig {
    pub allow: Vec<ReadingAllow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingAllow {
    pub host: String,
}

impl BackendConfig {
    /// Backend listening on `port` and reachable at `base_url`; everything
    /// else (CSP, CORS, database, reading allow-list) is fixed.
    pub fn new(base_url: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            listen: ListenConfig { port: port.into() },
            csp: CspConfig {
                connect_src: defaults::owned(defaults::CSP_CONNECT_SRC),
            },
            cors: CorsConfig {
                origin: defaults::CORS_ORIGIN.to_string(),
                methods: defaults::owned(defaults::CORS_METHODS),
                credentials: true,
            },
            database: DatabaseConfig {
                client: defaults::DATABASE_CLIENT.to_string(),
                connection: defaults::DATABASE_CONNECTION.to_string(),
            },
            reading: ReadingConfig {
                allow: defaults::READING_ALLOW_HOSTS
                    .iter()
                    .map(|host| ReadingAllow {
                        host: (*host).to_string(),
                    })
                    .collect(),
            },
        }
    }
}
