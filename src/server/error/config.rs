use thiserror::Error;

/// Invalid server configuration, reported at startup before the listener binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
