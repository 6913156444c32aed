//! Application configuration schemas.
//!
//! The configuration is assembled once at startup via the `config` crate
//! and handed to constructors explicitly. Each sub-module represents a
//! logical configuration section.

pub mod app;
pub mod database;
pub mod logging;
pub mod notification;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::notification::NotificationConfig;

use crate::error::AppError;

/// Plain environment variables honoured for compatibility with existing
/// deployments, mapped onto their configuration keys.
pub const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DATABASE_URL", "database.url"),
    ("SENDER_EMAIL", "notification.sender_email"),
    ("RECIPIENT_EMAIL", "notification.recipient_email"),
    ("BREVO_API_KEY", "notification.api_key"),
];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Item store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Email notification settings.
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the process environment.
    ///
    /// Sources, lowest priority first: `config/default.toml`,
    /// `config/{env}.toml`, `ITEMHUB__SECTION__KEY` variables, then the
    /// plain variables listed in [`LEGACY_ENV_KEYS`].
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_with(env, |name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::load`], resolving the plain variables through
    /// `lookup` instead of the process environment.
    pub fn load_with<F>(env: &str, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ITEMHUB")
                    .separator("__")
                    .try_parsing(true),
            );

        for &(var, key) in LEGACY_ENV_KEYS {
            builder = builder.set_override_option(key, lookup(var))?;
        }

        let config: Self = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field requirements that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.provider == "postgres" && self.database.url.trim().is_empty() {
            return Err(AppError::configuration(
                "database.url (DATABASE_URL) is required for the postgres provider",
            ));
        }

        if self.notification.enabled {
            let required = [
                ("notification.api_key (BREVO_API_KEY)", &self.notification.api_key),
                (
                    "notification.sender_email (SENDER_EMAIL)",
                    &self.notification.sender_email,
                ),
                (
                    "notification.recipient_email (RECIPIENT_EMAIL)",
                    &self.notification.recipient_email,
                ),
            ];
            for (name, value) in required {
                if value.trim().is_empty() {
                    return Err(AppError::configuration(format!(
                        "{name} is required when notifications are enabled"
                    )));
                }
            }
        }

        Ok(())
    }
}
