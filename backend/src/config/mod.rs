use ::config::{Config, ConfigError, Environment, Map};
use dotenv::dotenv;
use serde::Deserialize;
use std::path::PathBuf;

const ENV_PREFIX: &str = "ESTATE";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// File backing the session role/currency keys.
    pub storage_path: PathBuf,
    pub owners: usize,
    pub max_listings_per_owner: usize,
}

impl AppConfig {
    /// Defaults overlaid with `ESTATE_*` variables (a `.env` file is read first if present).
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::build(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Same layering as [`AppConfig::load`] over an explicit variable map.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::build(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(vars)),
        )
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080_i64)?
            .set_default("jwt_secret", "demo-secret")?
            .set_default("storage_path", "session.json")?
            .set_default("owners", 12_i64)?
            .set_default("max_listings_per_owner", 6_i64)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_variables() {
        let config = AppConfig::from_vars(Map::new()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.storage_path, PathBuf::from("session.json"));
        assert_eq!(config.owners, 12);
        assert_eq!(config.max_listings_per_owner, 6);
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        let mut vars = Map::new();
        vars.insert("ESTATE_PORT".to_string(), "9090".to_string());
        vars.insert("ESTATE_JWT_SECRET".to_string(), "s3cret".to_string());
        vars.insert("ESTATE_OWNERS".to_string(), "20".to_string());
        vars.insert("PORT".to_string(), "1".to_string());
        let config = AppConfig::from_vars(vars).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.owners, 20);
    }
}
