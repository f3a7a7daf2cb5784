use std::fmt;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached.
    Connection(String),
    /// The store rejected or failed a statement.
    Query(String),
    /// The in-memory store's lock was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Connection(detail) => {
                write!(f, "store connection failed: {}", detail)
            }
            StoreError::Query(detail) => write!(f, "statement failed: {}", detail),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
