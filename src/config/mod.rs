use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;
use std::env;
use std::fmt;

/// Placeholder signing secret used only by the development profile.
pub const DEVELOPMENT_JWT_SECRET: &str = "change-me";

/// One hundred years.
pub const MAX_JWT_EXPIRY_HOURS: i64 = 100 * 365 * 24;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set outside development")]
    MissingInProduction(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection target for one logical MySQL database.
#[derive(Clone, Serialize, Deserialize)]
pub struct DbTarget {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub analitica: DbTarget,
    pub convocatoria: DbTarget,
    pub dtf_financiera: DbTarget,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub max_page_limit: u32,
    pub max_request_size_bytes: usize,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_algorithm: String,
    pub jwt_expiry_hours: i64,
    pub admin_username: String,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl DbTarget {
    fn local(database: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            user: "root".to_string(),
            password: String::new(),
            database: database.to_string(),
            port: 3306,
        }
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

// Passwords stay out of logs.
impl fmt::Debug for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbTarget")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"***")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("admin_username", &self.admin_username)
            .field("enable_cors", &self.enable_cors)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, so tests can
    /// supply variables without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        let config = match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(&lookup)?;

        config.validate()?;
        Ok(config)
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server
        if let Some(v) = lookup("SAPIENCIA_API_PORT").or_else(|| lookup("PORT")) {
            self.server.port = parse("PORT", &v)?;
        }
        if let Some(v) = lookup("SAPIENCIA_API_HOST") {
            self.server.host = v;
        }

        // Database targets
        apply_db_overrides(&mut self.database.analitica, "ANALITICA_DB", lookup)?;
        apply_db_overrides(&mut self.database.convocatoria, "CONVOCATORIA_DB", lookup)?;
        apply_db_overrides(&mut self.database.dtf_financiera, "DTF_FINANCIERA_DB", lookup)?;

        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = parse("DATABASE_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = parse("DATABASE_CONNECTION_TIMEOUT", &v)?;
        }

        // API
        if let Some(v) = lookup("API_MAX_PAGE_LIMIT") {
            self.api.max_page_limit = parse("API_MAX_PAGE_LIMIT", &v)?;
        }
        if let Some(v) = lookup("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = parse("API_MAX_REQUEST_SIZE_BYTES", &v)?;
        }

        // Security
        if let Some(v) = lookup("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Some(v) = lookup("JWT_ALGORITHM") {
            self.security.jwt_algorithm = v;
        }
        if let Some(v) = lookup("JWT_EXPIRES_HOURS") {
            self.security.jwt_expiry_hours = parse("JWT_EXPIRES_HOURS", &v)?;
        }
        if let Some(v) = lookup("ADMIN_USERNAME") {
            self.security.admin_username = v;
        }
        if let Some(v) = lookup("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = parse("SECURITY_ENABLE_CORS", &v)?;
        }
        if let Some(v) = lookup("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.environment != Environment::Development
            && (self.security.jwt_secret.is_empty()
                || self.security.jwt_secret == DEVELOPMENT_JWT_SECRET)
        {
            return Err(ConfigError::MissingInProduction("JWT_SECRET"));
        }
        if !(1..=MAX_JWT_EXPIRY_HOURS).contains(&self.security.jwt_expiry_hours) {
            return Err(ConfigError::InvalidValue {
                key: "JWT_EXPIRES_HOURS",
                value: self.security.jwt_expiry_hours.to_string(),
            });
        }
        if self.api.max_page_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "API_MAX_PAGE_LIMIT",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            database: DatabaseConfig {
                analitica: DbTarget::local("analitica_fondos"),
                convocatoria: DbTarget::local("convocatoria_sapiencia"),
                dtf_financiera: DbTarget::local("dtf_financiera"),
                max_connections: 10,
                connection_timeout: 30,
            },
            api: ApiConfig {
                max_page_limit: 100,
                max_request_size_bytes: 10 * 1024 * 1024, // 10MB
            },
            security: SecurityConfig {
                jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
                jwt_algorithm: "HS256".to_string(),
                jwt_expiry_hours: 24,
                admin_username: "admin".to_string(),
                enable_cors: true,
                cors_origins: vec![],
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout: 10,
                ..Self::development().database
            },
            api: ApiConfig {
                max_page_limit: 100,
                max_request_size_bytes: 5 * 1024 * 1024, // 5MB
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                ..Self::development().security
            },
            ..Self::development()
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                max_connections: 50,
                connection_timeout: 5,
                ..Self::development().database
            },
            api: ApiConfig {
                max_page_limit: 100,
                max_request_size_bytes: 2 * 1024 * 1024, // 2MB
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                enable_cors: true,
                cors_origins: vec!["https://sapiencia.gov.co".to_string()],
                ..Self::development().security
            },
            ..Self::development()
        }
    }
}

fn apply_db_overrides<F>(target: &mut DbTarget, prefix: &'static str, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(&format!("{prefix}_HOST")) {
        target.host = v;
    }
    if let Some(v) = lookup(&format!("{prefix}_USER")) {
        target.user = v;
    }
    if let Some(v) = lookup(&format!("{prefix}_PASSWORD")) {
        target.password = v;
    }
    if let Some(v) = lookup(&format!("{prefix}_DATABASE")) {
        target.database = v;
    }
    if let Some(v) = lookup(&format!("{prefix}_PORT")) {
        target.port = parse(prefix, &v)?;
    }
    Ok(())
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.security.jwt_expiry_hours, 24);
        assert_eq!(config.security.admin_username, "admin");
        assert_eq!(config.api.max_page_limit, 100);
        assert_eq!(config.database.analitica.port, 3306);
    }

    #[test]
    fn test_production_requires_secret() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "production")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInProduction("JWT_SECRET")));

        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("JWT_SECRET", "s3cr3t"),
        ]))
        .unwrap();
        assert_eq!(config.database.max_connections, 50);
    }

    #[test]
    fn test_database_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ANALITICA_DB_HOST", "10.0.0.5"),
            ("ANALITICA_DB_USER", "analitica"),
            ("ANALITICA_DB_PASSWORD", "pw"),
            ("ANALITICA_DB_DATABASE", "analitica_fondos"),
            ("ANALITICA_DB_PORT", "3307"),
            ("JWT_EXPIRES_HOURS", "8760"),
        ]))
        .unwrap();
        assert_eq!(config.database.analitica.host, "10.0.0.5");
        assert_eq!(config.database.analitica.port, 3307);
        assert_eq!(config.database.convocatoria.host, "127.0.0.1");
        assert_eq!(config.security.jwt_expiry_hours, 8760);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("JWT_EXPIRES_HOURS", "forever")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "JWT_EXPIRES_HOURS", .. }));
    }

    #[test]
    fn test_token_lifetime_is_bounded() {
        for raw in ["0", "-5", "3000000000"] {
            let err = AppConfig::from_lookup(lookup_from(&[("JWT_EXPIRES_HOURS", raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { key: "JWT_EXPIRES_HOURS", .. }), "{}", raw);
        }

        let max = MAX_JWT_EXPIRY_HOURS.to_string();
        let config = AppConfig::from_lookup(lookup_from(&[("JWT_EXPIRES_HOURS", max.as_str())])).unwrap();
        assert_eq!(config.security.jwt_expiry_hours, MAX_JWT_EXPIRY_HOURS);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut config = AppConfig::development();
        config.database.analitica.password = "hunter2".to_string();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains(DEVELOPMENT_JWT_SECRET));
    }
}
