//! Typed configuration read from the process environment.
//!
//! `main` loads `.env` with `dotenvy` first, so every value here may come from
//! either source.

use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} should be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("identity provider credentials are incomplete, {0} is missing")]
    PartialCredentials(&'static str),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub allowed_origin: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            allowed_origin: lookup("CORS_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        })
    }
}

/// Credentials handed to the popup identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCredentials {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub identity_provider: Option<ProviderCredentials>,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = lookup("API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let keys = [
            "IDENTITY_PROVIDER_API_KEY",
            "IDENTITY_PROVIDER_AUTH_DOMAIN",
            "IDENTITY_PROVIDER_PROJECT_ID",
        ];
        let values: Vec<Option<String>> = keys.iter().map(|key| lookup(*key)).collect();

        let identity_provider = match values.as_slice() {
            [Some(api_key), Some(auth_domain), Some(project_id)] => Some(ProviderCredentials {
                api_key: api_key.clone(),
                auth_domain: auth_domain.clone(),
                project_id: project_id.clone(),
            }),
            [None, None, None] => None,
            _ => {
                let missing = keys
                    .iter()
                    .zip(&values)
                    .find_map(|(key, value)| value.is_none().then_some(*key))
                    .unwrap_or(keys[0]);
                return Err(ConfigError::PartialCredentials(missing));
            }
        };

        Ok(Self {
            api_base_url,
            identity_provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn server_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "users.db")])).unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.allowed_origin, "http://localhost:5173");
    }

    #[test]
    fn server_requires_database_url() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();

        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn server_rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "users.db"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn client_provider_credentials_are_all_or_nothing() {
        let config = ClientConfig::from_lookup(lookup(&[("API_BASE_URL", "http://api.test/")]))
            .unwrap();
        assert_eq!(config.api_base_url, "http://api.test");
        assert!(config.identity_provider.is_none());

        let config = ClientConfig::from_lookup(lookup(&[
            ("IDENTITY_PROVIDER_API_KEY", "key"),
            ("IDENTITY_PROVIDER_AUTH_DOMAIN", "app.example"),
            ("IDENTITY_PROVIDER_PROJECT_ID", "app"),
        ]))
        .unwrap();
        assert_eq!(config.identity_provider.unwrap().project_id, "app");

        let err = ClientConfig::from_lookup(lookup(&[("IDENTITY_PROVIDER_API_KEY", "key")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::PartialCredentials("IDENTITY_PROVIDER_AUTH_DOMAIN")
        );
    }
}
