pub mod credentials;
pub mod dynamic;
pub mod entity;
pub mod manager;
pub mod models;
pub mod query_builder;
pub mod record;
pub mod repository;

pub use credentials::{Credential, CredentialStore, MemoryCredentialStore, MySqlCredentialStore};
pub use entity::{Entity, KeyKind};
pub use manager::{Database, DatabaseError, DatabaseManager};
pub use record::{FieldChange, FieldRules, Record, RecordError};
pub use repository::Repository;
