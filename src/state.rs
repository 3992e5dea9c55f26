//! Application state shared by every handler.

use std::sync::Arc;

use crate::auth::{TokenError, TokenService};
use crate::config::AppConfig;
use crate::database::{CredentialStore, Database, DatabaseManager, MySqlCredentialStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub databases: DatabaseManager,
    pub tokens: TokenService,
    pub credentials: Arc<dyn CredentialStore>,
}

impl AppState {
    /// Lazily connected pools and the MySQL-backed credential store.
    /// Must be called inside a tokio runtime.
    pub fn new(config: AppConfig) -> Result<Self, TokenError> {
        let databases = DatabaseManager::connect_lazy(&config.database);
        let credentials = Arc::new(MySqlCredentialStore::new(databases.pool(Database::Analitica).clone()));
        Self::with_parts(config, databases, credentials)
    }

    pub fn with_parts(
        config: AppConfig,
        databases: DatabaseManager,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, TokenError> {
        let tokens = TokenService::from_config(&config.security)?;
        Ok(Self {
            config: Arc::new(config),
            databases,
            tokens,
            credentials,
        })
    }

    pub fn is_admin(&self, username: &str) -> bool {
        username == self.config.security.admin_username
    }
}
