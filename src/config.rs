use std::env;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

use crate::errors::{AppError, Result};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;

/// What a delete does when other rows still reference the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Issue the plain delete and let the foreign key reject it.
    #[default]
    Restrict,
    /// Remove dependent roles/employees and detach direct reports first.
    Cascade,
}

impl FromStr for DeletePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restrict" => Ok(DeletePolicy::Restrict),
            "cascade" => Ok(DeletePolicy::Cascade),
            other => Err(AppError::Config(format!(
                "DELETE_POLICY must be 'restrict' or 'cascade', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub connect_options: PgConnectOptions,
    pub delete_policy: DeletePolicy,
}

impl Config {
    /// Read settings from the process environment, after loading `.env`.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `DATABASE_URL` wins over the
    /// individual `DB_*` variables when both are present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let connect_options = match var("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url)
                .map_err(|err| AppError::Config(format!("invalid DATABASE_URL: {}", err)))?,
            None => {
                let required = |key: &str| {
                    var(key).ok_or_else(|| AppError::Config(format!("{} must be set", key)))
                };
                let port = match var("DB_PORT") {
                    Some(port) => port.trim().parse::<u16>().map_err(|_| {
                        AppError::Config(format!("DB_PORT must be a port number, got '{}'", port))
                    })?,
                    None => DEFAULT_PORT,
                };

                PgConnectOptions::new()
                    .host(&var("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()))
                    .port(port)
                    .username(&required("DB_USER")?)
                    .password(&required("DB_PASSWORD")?)
                    .database(&required("DB_DATABASE")?)
            }
        };

        let delete_policy = match var("DELETE_POLICY") {
            Some(policy) => policy.parse()?,
            None => DeletePolicy::default(),
        };

        Ok(Config {
            connect_options,
            delete_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn builds_options_from_parts() {
        let config = Config::from_lookup(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "tracker"),
            ("DB_PASSWORD", "secret"),
            ("DB_DATABASE", "company"),
        ]))
        .unwrap();

        assert_eq!(config.connect_options.get_host(), "db.internal");
        assert_eq!(config.connect_options.get_port(), 6543);
        assert_eq!(config.connect_options.get_username(), "tracker");
        assert_eq!(config.connect_options.get_database(), Some("company"));
        assert_eq!(config.delete_policy, DeletePolicy::Restrict);
    }

    #[test]
    fn host_and_port_have_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DB_USER", "tracker"),
            ("DB_PASSWORD", "secret"),
            ("DB_DATABASE", "company"),
        ]))
        .unwrap();

        assert_eq!(config.connect_options.get_host(), "localhost");
        assert_eq!(config.connect_options.get_port(), 5432);
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://alice:pw@example.com:5433/hr"),
            ("DB_HOST", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.connect_options.get_host(), "example.com");
        assert_eq!(config.connect_options.get_port(), 5433);
        assert_eq!(config.connect_options.get_database(), Some("hr"));
    }

    #[test]
    fn missing_credentials_are_reported() {
        let err = Config::from_lookup(lookup(&[("DB_USER", "tracker")])).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg == "DB_PASSWORD must be set"));
    }

    #[test]
    fn malformed_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("DB_PORT", "fifty"),
            ("DB_USER", "tracker"),
            ("DB_PASSWORD", "secret"),
            ("DB_DATABASE", "company"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn delete_policy_parses_case_insensitively() {
        assert_eq!("Cascade".parse::<DeletePolicy>().unwrap(), DeletePolicy::Cascade);
        assert_eq!(" restrict ".parse::<DeletePolicy>().unwrap(), DeletePolicy::Restrict);
        assert!("nullify".parse::<DeletePolicy>().is_err());
    }
}
