//! Runtime configuration
//!
//! Database settings come from the environment:
//!
//!   MYSQL_HOST, MYSQL_USER, MYSQL_PASSWORD, MYSQL_DATABASE   (required)
//!   MYSQL_PORT                                               (default: 3306)
//!   MYSQL_MAX_CONNECTIONS                                    (default: 5)

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Default MySQL port
pub const DEFAULT_PORT: u16 = 3306;

/// Default maximum connections for the pool.
/// Kept low for a single admin dashboard.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration error
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// MySQL connection parameters
#[derive(Clone, PartialEq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

// Keeps the password out of logs
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DbConfig {
    /// Read connection parameters from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read connection parameters through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::MissingVar(var));

        let port = match lookup("MYSQL_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var: "MYSQL_PORT", value })?,
            None => DEFAULT_PORT,
        };

        let max_connections = match lookup("MYSQL_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "MYSQL_MAX_CONNECTIONS",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            host: required("MYSQL_HOST")?,
            port,
            user: required("MYSQL_USER")?,
            password: required("MYSQL_PASSWORD")?,
            database: required("MYSQL_DATABASE")?,
            max_connections,
        })
    }
}

/// Artificial delays on the slow dashboard widgets.
///
/// The revenue chart and latest-invoices panel are deliberately slow so the
/// front end's streaming placeholders can be exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub revenue: Duration,
    pub latest_invoices: Duration,
}

impl SimulatedLatency {
    pub fn none() -> Self {
        Self {
            revenue: Duration::ZERO,
            latest_invoices: Duration::ZERO,
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            revenue: Duration::from_secs(3),
            latest_invoices: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("MYSQL_HOST", "db.internal"),
        ("MYSQL_USER", "dashboard"),
        ("MYSQL_PASSWORD", "hunter2"),
        ("MYSQL_DATABASE", "invoices"),
    ];

    #[test]
    fn reads_required_vars_with_defaults() {
        let config = DbConfig::from_lookup(env(&REQUIRED)).unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.user, "dashboard");
        assert_eq!(config.database, "invoices");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn missing_var_is_reported_by_name() {
        let err = DbConfig::from_lookup(env(&REQUIRED[..3])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("MYSQL_DATABASE"));
    }

    #[test]
    fn optional_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("MYSQL_PORT", "3307"));
        pairs.push(("MYSQL_MAX_CONNECTIONS", "12"));
        let config = DbConfig::from_lookup(env(&pairs)).unwrap();
        assert_eq!(config.port, 3307);
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn rejects_bad_port_and_zero_pool() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("MYSQL_PORT", "not-a-port"));
        assert!(matches!(
            DbConfig::from_lookup(env(&pairs)).unwrap_err(),
            ConfigError::InvalidValue { var: "MYSQL_PORT", .. }
        ));

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("MYSQL_MAX_CONNECTIONS", "0"));
        assert!(matches!(
            DbConfig::from_lookup(env(&pairs)).unwrap_err(),
            ConfigError::InvalidValue { var: "MYSQL_MAX_CONNECTIONS", .. }
        ));
    }

    #[test]
    fn debug_hides_password() {
        let config = DbConfig::from_lookup(env(&REQUIRED)).unwrap();
        let shown = format!("{:?}", config);
        assert!(!shown.contains("hunter2"));
    }
}
