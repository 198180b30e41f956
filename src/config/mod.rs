use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::error::AppError;

/// Application configuration structure
///
/// Features:
/// - AppSettings
/// - ServerConfig
/// - ProviderConfig (media-hosting account)

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Media-hosting provider configuration
///
/// Credentials come from `PROVIDER_CLOUD_NAME`, `PROVIDER_API_KEY` and
/// `PROVIDER_API_SECRET`. They stay optional here so that a partially
/// configured process can still answer health checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, deserialize_with = "string_or_number")]
    pub cloud_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub api_key: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub api_secret: Option<String>,
    /// Build `https` delivery URLs
    pub secure: bool,
    pub delivery_host: String,
    /// Base URL of the admin (metadata) API
    pub api_base: String,
    pub request_timeout_secs: u64,
}

// A YAML config file may still hand a numeric API key over as a number.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Complete set of provider credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "video-link-service".to_string(),
                version: "0.1.0".to_string(),
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            api_key: None,
            api_secret: None,
            secure: true,
            delivery_host: "res.cloudinary.com".to_string(),
            api_base: "https://api.cloudinary.com".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ProviderConfig {
    /// Returns the credentials when all three values are present and non-blank.
    pub fn credentials(&self) -> Result<ProviderCredentials, AppError> {
        let missing: Vec<&str> = [
            ("PROVIDER_CLOUD_NAME", &self.cloud_name),
            ("PROVIDER_API_KEY", &self.api_key),
            ("PROVIDER_API_SECRET", &self.api_secret),
        ]
        .iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Configuration(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        Ok(ProviderCredentials {
            cloud_name: self.cloud_name.clone().unwrap_or_default(),
            api_key: self.api_key.clone().unwrap_or_default(),
            api_secret: self.api_secret.clone().unwrap_or_default(),
        })
    }
}

const CREDENTIAL_KEYS: [&str; 3] = ["cloud_name", "api_key", "api_secret"];

impl AppConfig {
    pub fn load() -> Result<Self> {
        info!("Loading application configuration...");

        let config: AppConfig = Self::figment().extract()?;

        info!("Configuration loaded successfully");
        info!("name: {:?}", config.app.name);
        info!("Provider delivery host: {}", config.provider.delivery_host);
        info!(
            "Provider cloud: {}",
            config.provider.cloud_name.as_deref().unwrap_or("<unset>")
        );

        Ok(config)
    }

    pub fn figment() -> Figment {
        let figment = Figment::new()
            // Start with default values
            .merge(Serialized::defaults(Self::default()))
            // Override with config file if present
            .merge(Yaml::file("config.yaml"))
            // Override with environment variables
            .merge(Env::prefixed("APP_").split("_"))
            .merge(
                Env::prefixed("PROVIDER_")
                    .ignore(&CREDENTIAL_KEYS)
                    .map(|key| format!("provider.{}", key).into()),
            );

        // Credentials are taken verbatim; `Env` would turn "0012345" into 12345
        CREDENTIAL_KEYS.iter().fold(figment, |figment, key| {
            match std::env::var(format!("PROVIDER_{}", key.to_uppercase())) {
                Ok(value) => figment.merge(Serialized::default(&format!("provider.{}", key), value)),
                Err(_) => figment,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> ProviderConfig {
        ProviderConfig {
            cloud_name: Some("demo".to_string()),
            api_key: Some("123456".to_string()),
            api_secret: Some("s3cret".to_string()),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_credentials_complete() {
        let credentials = configured().credentials().unwrap();
        assert_eq!(credentials.cloud_name, "demo");
        assert_eq!(credentials.api_key, "123456");
        assert_eq!(credentials.api_secret, "s3cret");
    }

    #[test]
    fn test_credentials_missing_each_value() {
        let mut no_cloud = configured();
        no_cloud.cloud_name = None;
        let mut no_key = configured();
        no_key.api_key = Some("   ".to_string());
        let mut no_secret = configured();
        no_secret.api_secret = None;

        for (config, name) in [
            (no_cloud, "PROVIDER_CLOUD_NAME"),
            (no_key, "PROVIDER_API_KEY"),
            (no_secret, "PROVIDER_API_SECRET"),
        ] {
            match config.credentials() {
                Err(AppError::Configuration(msg)) => assert!(msg.contains(name)),
                other => panic!("expected configuration error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PROVIDER_CLOUD_NAME", "jail-cloud");
            jail.set_env("PROVIDER_API_KEY", "874837483274837");
            jail.set_env("PROVIDER_API_SECRET", "secret");
            jail.set_env("APP_SERVER_PORT", "8080");

            let config: AppConfig = AppConfig::figment().extract()?;
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.provider.cloud_name.as_deref(), Some("jail-cloud"));
            let credentials = config.provider.credentials().map_err(|e| e.to_string())?;
            assert_eq!(credentials.api_key, "874837483274837");
            assert!(config.provider.secure);
            Ok(())
        });
    }

    #[test]
    fn test_numeric_credentials_kept_verbatim() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PROVIDER_CLOUD_NAME", "007");
            jail.set_env("PROVIDER_API_KEY", "0012345");
            jail.set_env("PROVIDER_API_SECRET", "1e3");
            jail.set_env("PROVIDER_SECURE", "false");

            let config: AppConfig = AppConfig::figment().extract()?;
            let credentials = config.provider.credentials().map_err(|e| e.to_string())?;
            assert_eq!(credentials.cloud_name, "007");
            assert_eq!(credentials.api_key, "0012345");
            assert_eq!(credentials.api_secret, "1e3");
            assert!(!config.provider.secure);
            Ok(())
        });
    }
}
