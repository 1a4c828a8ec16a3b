//! Process configuration loaded from the environment

use auth::{AuthResult, JwtConfig};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// HTTP and token settings; database settings live in `DatabaseConfig`
///
/// # Environment Variables
/// - `HOST`: bind address (default: `0.0.0.0`)
/// - `PORT`: listen port (default: 3000)
/// - `JWT_SECRET`: token signing secret (required)
/// - `JWT_EXPIRES_IN`: token lifetime such as `7d` or `3600` (default: `7d`)
/// - `RUN_MIGRATIONS`: apply embedded migrations at startup (default: true)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expires_in: String,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("jwt_expires_in", "7d")?
            .set_default("run_migrations", true)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Token settings; fails on an empty secret or an unparseable lifetime
    pub fn jwt_config(&self) -> AuthResult<JwtConfig> {
        JwtConfig::new(self.jwt_secret.clone(), &self.jwt_expires_in)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let source = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_environment(Environment::default().source(Some(source)))
    }

    #[test]
    fn applies_defaults() {
        let config = load(&[("JWT_SECRET", "secret")]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.jwt_expires_in, "7d");
        assert!(config.run_migrations);
        assert_eq!(config.jwt_config().unwrap().expiry, 7 * 24 * 60 * 60);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("JWT_SECRET", "secret"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("JWT_EXPIRES_IN", "1h"),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert!(!config.run_migrations);
        assert_eq!(config.jwt_config().unwrap().expiry, 3600);
    }

    #[test]
    fn secret_is_required() {
        assert!(load(&[]).is_err());

        let config = load(&[("JWT_SECRET", "  ")]).unwrap();
        assert!(config.jwt_config().is_err());
    }

    #[test]
    fn rejects_unparseable_port() {
        assert!(load(&[("JWT_SECRET", "secret"), ("PORT", "http")]).is_err());
    }

    #[test]
    #[serial]
    fn from_env_reads_process_environment() {
        unsafe {
            std::env::set_var("JWT_SECRET", "from-env");
            std::env::set_var("PORT", "4000");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.jwt_secret, "from-env");
        assert_eq!(config.port, 4000);

        unsafe {
            std::env::remove_var("JWT_SECRET");
            std::env::remove_var("PORT");
        }
    }
}
