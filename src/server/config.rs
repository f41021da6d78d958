use crate::server::error::config::ConfigError;

/// Server configuration loaded from environment variables.
pub struct Config {
    /// Connection URL of the database holding the rank table
    pub database_url: String,
    /// Insert the demo players at startup when the rank table is empty
    pub seed_demo_data: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `SEED_DEMO_DATA` is not a boolean
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let seed_demo_data = match std::env::var("SEED_DEMO_DATA") {
            Ok(value) => parse_bool("SEED_DEMO_DATA", &value)?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            seed_demo_data,
        })
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
