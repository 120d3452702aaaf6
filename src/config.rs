//! Connection settings.
//!
//! Read from the process environment. The `schema-groups` binary loads a
//! `.env` file into it at startup.
//!
//! | variable | default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite::memory:` |
//! | `DATABASE_MAX_CONNECTIONS` | driver default, `1` for in-memory SQLite |
//! | `DATABASE_SQLX_LOGGING` | `false` |

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::error::SchemaError;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const DATABASE_SQLX_LOGGING: &str = "DATABASE_SQLX_LOGGING";

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: Option<u32>,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: None,
            sqlx_logging: false,
        }
    }

    /// A private SQLite database living as long as the connection.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_URL)
    }

    pub fn from_env() -> Result<Self, SchemaError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SchemaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL).unwrap_or_else(|| IN_MEMORY_URL.to_owned());
        let max_connections = lookup(DATABASE_MAX_CONNECTIONS)
            .map(|v| {
                v.trim().parse::<u32>().map_err(|e| {
                    SchemaError::Config(format!("{DATABASE_MAX_CONNECTIONS}={v:?}: {e}"))
                })
            })
            .transpose()?;
        let sqlx_logging = lookup(DATABASE_SQLX_LOGGING)
            .map(|v| parse_bool(&v).ok_or_else(|| {
                SchemaError::Config(format!("{DATABASE_SQLX_LOGGING}={v:?}: expected a boolean"))
            }))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            url,
            max_connections,
            sqlx_logging,
        })
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite:")
            && (self.url.contains(":memory:") || self.url.contains("mode=memory"))
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.sqlx_logging(self.sqlx_logging);
        // every pooled connection to `:memory:` would open its own database
        match (self.max_connections, self.is_in_memory()) {
            (_, true) => {
                opt.max_connections(1);
            }
            (Some(n), false) => {
                opt.max_connections(n);
            }
            (None, false) => {}
        }
        opt
    }

    /// Open a connection pool. SQLite connections are opened with
    /// `foreign_keys` on, which sqlx sets for every connection of the pool.
    pub async fn connect(&self) -> Result<DatabaseConnection, SchemaError> {
        let db = Database::connect(self.connect_options()).await?;
        info!(backend = ?db.get_database_backend(), in_memory = self.is_in_memory(), "connected");
        Ok(db)
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
