//! Postgres-backed user store (sqlx).

use async_trait::async_trait;
use sqlx::postgres::PgConnection;
use sqlx::Connection;

use crate::config::StoreConfig;

use super::error::StoreError;
use super::{User, UserStore};

/// Postgres adapter.
///
/// Constructed once at service startup. Each call opens its own
/// connection and releases it before returning, so nothing is shared
/// between concurrent requests. Under sustained load a bounded pool
/// would cap open connections; the per-call model keeps every request
/// fully independent.
pub struct PgStore {
    url: String,
}

impl PgStore {
    /// Create an adapter for the given connection URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Create an adapter from environment-derived configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.url())
    }

    /// Create the `users` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                username TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(query_error);
        let _ = conn.close().await;
        result
    }

    async fn connect(&self) -> Result<PgConnection, StoreError> {
        PgConnection::connect(&self.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

fn query_error(err: sqlx::Error) -> StoreError {
    StoreError::Query(err.to_string())
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, username: &str) -> Result<i64, StoreError> {
        let mut conn = self.connect().await?;
        let result: Result<i64, StoreError> =
            sqlx::query_scalar("INSERT INTO users (username) VALUES ($1) RETURNING id")
                .bind(username)
                .fetch_one(&mut conn)
                .await
                .map_err(query_error);
        let _ = conn.close().await;
        result
    }

    async fn user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut conn)
            .await
            .map_err(query_error);
        let _ = conn.close().await;
        result
    }

    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, User>("SELECT id, username FROM users")
            .fetch_all(&mut conn)
            .await
            .map_err(query_error);
        let _ = conn.close().await;
        result
    }

    async fn delete_user(&self, id: i64) -> Result<u64, StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut conn)
            .await
            .map(|done| done.rows_affected())
            .map_err(query_error);
        let _ = conn.close().await;
        result
    }
}
