//! In-memory user store for testing and single-process scenarios.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::error::StoreError;
use super::{User, UserStore};

struct Rows {
    next_id: i64,
    users: BTreeMap<i64, String>,
}

/// Map-backed store. Clone-friendly via `Arc`; ids come from a
/// monotonically increasing counter, mirroring a serial column.
#[derive(Clone)]
pub struct MemoryStore {
    rows: Arc<Mutex<Rows>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Rows {
                next_id: 1,
                users: BTreeMap::new(),
            })),
        }
    }

    /// Number of persisted rows.
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().users.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, username: &str) -> Result<i64, StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;
        let id = rows.next_id;
        rows.next_id += 1;
        rows.users.insert(id, username.to_string());
        Ok(id)
    }

    async fn user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::LockPoisoned("select"))?;
        Ok(rows.users.get(&id).map(|username| User {
            id,
            username: username.clone(),
        }))
    }

    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::LockPoisoned("scan"))?;
        Ok(rows
            .users
            .iter()
            .map(|(id, username)| User {
                id: *id,
                username: username.clone(),
            })
            .collect())
    }

    async fn delete_user(&self, id: i64) -> Result<u64, StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;
        Ok(rows.users.remove(&id).map(|_| 1).unwrap_or(0))
    }
}
