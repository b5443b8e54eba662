//! MySQL connection arguments shared by every command
//!
//! Each flag falls back to its MYSQL_* environment variable. Missing
//! required values are reported through [`ConfigError`].

use clap::Args;
use invoicectl_server::{ConfigError, DbConfig};

#[derive(Args, Debug, Clone, Default)]
pub struct DbArgs {
    /// MySQL host
    #[arg(long = "mysql-host", env = "MYSQL_HOST")]
    pub host: Option<String>,

    /// MySQL port (default: 3306)
    #[arg(long = "mysql-port", env = "MYSQL_PORT")]
    pub port: Option<u16>,

    /// MySQL user
    #[arg(long = "mysql-user", env = "MYSQL_USER")]
    pub user: Option<String>,

    /// MySQL password
    #[arg(long = "mysql-password", env = "MYSQL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// MySQL database name
    #[arg(long = "mysql-database", env = "MYSQL_DATABASE")]
    pub database: Option<String>,

    /// Maximum pooled connections (default: 5)
    #[arg(long, env = "MYSQL_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,
}

impl DbArgs {
    pub fn to_config(&self) -> Result<DbConfig, ConfigError> {
        DbConfig::from_lookup(|name| match name {
            "MYSQL_HOST" => self.host.clone(),
            "MYSQL_PORT" => self.port.map(|p| p.to_string()),
            "MYSQL_USER" => self.user.clone(),
            "MYSQL_PASSWORD" => self.password.clone(),
            "MYSQL_DATABASE" => self.database.clone(),
            "MYSQL_MAX_CONNECTIONS" => self.max_connections.map(|n| n.to_string()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> DbArgs {
        DbArgs {
            host: Some("db.internal".into()),
            port: None,
            user: Some("dash".into()),
            password: Some("secret".into()),
            database: Some("invoices".into()),
            max_connections: Some(2),
        }
    }

    #[test]
    fn builds_config_with_defaults() {
        let config = full().to_config().unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3306);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn missing_password_is_reported() {
        let args = DbArgs {
            password: None,
            ..full()
        };
        assert_eq!(
            args.to_config().unwrap_err(),
            ConfigError::MissingVar("MYSQL_PASSWORD")
        );
    }

    #[test]
    fn zero_connections_rejected() {
        let args = DbArgs {
            max_connections: Some(0),
            ..full()
        };
        assert!(matches!(
            args.to_config(),
            Err(ConfigError::InvalidValue { var: "MYSQL_MAX_CONNECTIONS", .. })
        ));
    }
}
