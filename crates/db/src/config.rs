use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection};
use thiserror::Error;

/// Connection settings, read once at startup from `DB_*` environment
/// variables and passed to whatever needs a connection.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("DB_PORT must be a port number, got `{0}`")]
    InvalidPort(String),
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::Missing(key))
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_raw = require("DB_PORT")?;
        let port = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw))?;

        Ok(Self {
            host: require("DB_HOST")?,
            port,
            name: require("DB_NAME")?,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
        })
    }

    fn options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }

    /// Opens a fresh, unpooled connection. Every operation gets its own
    /// connection; dropping it closes it on all exit paths.
    pub async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        self.options().connect().await
    }

    /// Round-trips a trivial query to prove the database is reachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.connect().await?;
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&mut conn)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_full_env() {
        std::env::set_var("DB_HOST", "db.internal");
        std::env::set_var("DB_PORT", "5433");
        std::env::set_var("DB_NAME", "inbox");
        std::env::set_var("DB_USER", "inbox_api");
        std::env::set_var("DB_PASSWORD", "hunter2");
    }

    #[test]
    #[serial]
    fn loads_all_settings() {
        set_full_env();
        let config = DbConfig::from_env().unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 5433);
        assert_eq!(config.name, "inbox");
        assert_eq!(config.user, "inbox_api");
        assert_eq!(config.password, "hunter2");
    }

    #[test]
    #[serial]
    fn missing_variable_is_reported_by_name() {
        set_full_env();
        std::env::remove_var("DB_PASSWORD");
        let err = DbConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "DB_PASSWORD must be set");
    }

    #[test]
    #[serial]
    fn rejects_non_numeric_port() {
        set_full_env();
        std::env::set_var("DB_PORT", "fivefour32");
        let err = DbConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    #[serial]
    fn connect_options_carry_every_setting() {
        set_full_env();
        let options = DbConfig::from_env().unwrap().options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("inbox"));
        assert_eq!(options.get_username(), "inbox_api");
    }
}
