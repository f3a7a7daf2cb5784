//! Record store adapter — typed access to the `users` table.
//!
//! The adapter is constructed once at service startup and passed into
//! each handler, so a fake can be substituted in tests. Implementations
//! are stateless between calls and execute one parameterized statement
//! per call.

mod error;
mod memory;
mod postgres;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A persisted user record.
///
/// `id` is store-assigned and immutable once created; `username` is
/// caller-supplied and not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Abstract store executing one statement per call.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a row and return the store-assigned id.
    async fn insert_user(&self, username: &str) -> Result<i64, StoreError>;

    /// Fetch one user by id. Returns `None` when no row matches.
    async fn user_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Fetch all users in the store's natural scan order.
    async fn all_users(&self) -> Result<Vec<User>, StoreError>;

    /// Delete by id, returning the number of rows affected.
    async fn delete_user(&self, id: i64) -> Result<u64, StoreError>;
}
