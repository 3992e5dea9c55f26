use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::{DatabaseConfig, DbTarget};

/// Errors from DatabaseManager and the repositories built on it
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return DatabaseError::Duplicate("A record with this key already exists".to_string());
            }
            // SQLSTATE class 23: integrity constraint violation
            if db.code().map_or(false, |code| code.starts_with("23")) {
                return DatabaseError::Integrity(db.message().to_string());
            }
        }

        match err {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DatabaseError::Unavailable(err.to_string())
            }
            other => DatabaseError::Sqlx(other),
        }
    }
}

/// Logical databases the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    Analitica,
    Convocatoria,
    DtfFinanciera,
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Database::Analitica => "analitica",
            Database::Convocatoria => "convocatoria",
            Database::DtfFinanciera => "dtf_financiera",
        })
    }
}

/// One connection pool per logical database. Pools connect lazily, so the
/// service starts without any database reachable.
#[derive(Clone)]
pub struct DatabaseManager {
    analitica: MySqlPool,
    convocatoria: MySqlPool,
    dtf_financiera: MySqlPool,
}

impl DatabaseManager {
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let build = |name: Database, target: &DbTarget| {
            info!(
                "Created lazy pool for {} ({}@{}:{}/{})",
                name, target.user, target.host, target.port, target.database
            );
            MySqlPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(Duration::from_secs(config.connection_timeout))
                .test_before_acquire(true)
                .connect_lazy_with(target.connect_options())
        };

        Self {
            analitica: build(Database::Analitica, &config.analitica),
            convocatoria: build(Database::Convocatoria, &config.convocatoria),
            dtf_financiera: build(Database::DtfFinanciera, &config.dtf_financiera),
        }
    }

    /// Route every logical database to the same pool (test setups with a
    /// single schema holding all tables).
    pub fn single(pool: MySqlPool) -> Self {
        Self {
            analitica: pool.clone(),
            convocatoria: pool.clone(),
            dtf_financiera: pool,
        }
    }

    pub fn pool(&self, database: Database) -> &MySqlPool {
        match database {
            Database::Analitica => &self.analitica,
            Database::Convocatoria => &self.convocatoria,
            Database::DtfFinanciera => &self.dtf_financiera,
        }
    }

    /// Pings one database
    pub async fn health_check(&self, database: Database) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(self.pool(database)).await?;
        Ok(())
    }

    /// Close all pools (e.g., on shutdown)
    pub async fn close_all(&self) {
        for database in [Database::Analitica, Database::Convocatoria, Database::DtfFinanciera] {
            self.pool(database).close().await;
            info!("Closed database pool: {}", database);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        let err: DatabaseError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DatabaseError::NotFound(_)));
    }

    #[test]
    fn pool_timeouts_are_unavailable() {
        let err: DatabaseError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DatabaseError::Unavailable(_)));
    }

    #[test]
    fn other_errors_pass_through() {
        let err: DatabaseError = sqlx::Error::ColumnNotFound("x".into()).into();
        assert!(matches!(err, DatabaseError::Sqlx(_)));
    }

    #[tokio::test]
    async fn lazy_pools_do_not_connect_up_front() {
        let config = crate::config::AppConfig::development().database;
        let manager = DatabaseManager::connect_lazy(&config);
        assert_eq!(manager.pool(Database::Convocatoria).size(), 0);
    }
}
