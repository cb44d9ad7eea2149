//! Runtime configuration loaded from environment variables.

use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 3000;

/// Server configuration.
pub struct Config {
    /// Database connection URL, any backend supported by SeaORM.
    pub database_url: String,
    /// Interface the HTTP listener binds to.
    pub host: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Every variable is optional: `DATABASE_URL` falls back to a local SQLite file,
    /// `HOST` to `0.0.0.0` and `PORT` to `3000`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => normalize_database_url(url),
            None => {
                tracing::info!("DATABASE_URL not set, using default: {}", DEFAULT_DATABASE_URL);
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Address for the HTTP listener in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rewrites the legacy `postgres://` scheme some hosting providers hand out to `postgresql://`.
fn normalize_database_url(url: String) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url,
    }
}
