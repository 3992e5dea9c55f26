//! Login credentials stored in `usuarios`.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::auth::PasswordHash;
use crate::database::manager::DatabaseError;

/// The columns of `usuarios` the login flow needs.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
    #[sqlx(rename = "sal")]
    pub salt: String,
    #[sqlx(rename = "nombre_completo")]
    pub full_name: Option<String>,
    #[sqlx(rename = "activo")]
    pub active: Option<i64>,
}

impl Credential {
    /// Accounts without an explicit flag count as active.
    pub fn is_active(&self) -> bool {
        self.active.map_or(true, |flag| flag != 0)
    }
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DatabaseError>;

    /// Insert an active account. Fails with `Duplicate` when the username exists.
    async fn create(&self, username: &str, full_name: &str, password: &PasswordHash) -> Result<(), DatabaseError>;

    /// Replace the hash and salt. Returns false when the user does not exist.
    async fn update_password(&self, username: &str, password: &PasswordHash) -> Result<bool, DatabaseError>;
}

pub struct MySqlCredentialStore {
    pool: MySqlPool,
}

impl MySqlCredentialStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for MySqlCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DatabaseError> {
        let credential = sqlx::query_as::<_, Credential>(
            "SELECT username, password_hash, sal, nombre_completo, CAST(activo AS SIGNED) AS activo
             FROM usuarios
             WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credential)
    }

    async fn create(&self, username: &str, full_name: &str, password: &PasswordHash) -> Result<(), DatabaseError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM usuarios WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Err(DatabaseError::Duplicate("User already exists".to_string()));
        }

        sqlx::query(
            "INSERT INTO usuarios (username, password_hash, sal, nombre_completo, activo)
             VALUES (?, ?, ?, ?, 1)",
        )
        .bind(username)
        .bind(&password.hash)
        .bind(&password.salt)
        .bind(full_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_password(&self, username: &str, password: &PasswordHash) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE usuarios SET password_hash = ?, sal = ? WHERE username = ?")
            .bind(&password.hash)
            .bind(&password.salt)
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Process-local credential store for tests and local demos.
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: RwLock<HashMap<String, Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account with a clear-text password.
    pub async fn insert(&self, username: &str, full_name: Option<&str>, password: &str, active: bool) {
        let hash = PasswordHash::new(password);
        self.users.write().await.insert(
            username.to_string(),
            Credential {
                username: username.to_string(),
                password_hash: hash.hash,
                salt: hash.salt,
                full_name: full_name.map(str::to_string),
                active: Some(i64::from(active)),
            },
        );
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DatabaseError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn create(&self, username: &str, full_name: &str, password: &PasswordHash) -> Result<(), DatabaseError> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(DatabaseError::Duplicate("User already exists".to_string()));
        }
        users.insert(
            username.to_string(),
            Credential {
                username: username.to_string(),
                password_hash: password.hash.clone(),
                salt: password.salt.clone(),
                full_name: Some(full_name.to_string()),
                active: Some(1),
            },
        );
        Ok(())
    }

    async fn update_password(&self, username: &str, password: &PasswordHash) -> Result<bool, DatabaseError> {
        let mut users = self.users.write().await;
        match users.get_mut(username) {
            Some(user) => {
                user.password_hash = password.hash.clone();
                user.salt = password.salt.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        store.insert("admin", Some("Administrador"), "admin-password", true).await;

        let admin = store.find_by_username("admin").await.unwrap().unwrap();
        assert!(admin.is_active());
        assert!(verify_password(&admin.salt, &admin.password_hash, "admin-password"));
        assert!(store.find_by_username("nadie").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn memory_store_rejects_duplicates() {
        let store = MemoryCredentialStore::new();
        let hash = PasswordHash::new("password1");
        store.create("jperez", "Juan Pérez", &hash).await.unwrap();
        let err = store.create("jperez", "Otro", &hash).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Duplicate(_)));
    }

    #[tokio::test]
    async fn memory_store_updates_password() {
        let store = MemoryCredentialStore::new();
        store.insert("jperez", None, "old-password", true).await;
        let new_hash = PasswordHash::new("new-password");
        assert!(store.update_password("jperez", &new_hash).await.unwrap());
        assert!(!store.update_password("nadie", &new_hash).await.unwrap());

        let user = store.find_by_username("jperez").await.unwrap().unwrap();
        assert!(verify_password(&user.salt, &user.password_hash, "new-password"));
    }

    #[test]
    fn missing_active_flag_counts_as_active() {
        let credential = Credential {
            username: "x".into(),
            password_hash: String::new(),
            salt: String::new(),
            full_name: None,
            active: None,
        };
        assert!(credential.is_active());
        assert!(!Credential { active: Some(0), ..credential }.is_active());
    }
}
