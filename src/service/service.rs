//! Service — operation registry and dispatch.
//!
//! `Service<S>` holds a store adapter and a set of operations keyed by
//! subject. Each operation receives a `Context<S>` and returns
//! `Result<Value, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use userbus::service::Service;
//! use userbus::handlers::add_user;
//!
//! let service = userbus::register_operations!(
//!     Service::new(store),
//!     add_user,
//! );
//!
//! let reply = service
//!     .dispatch(add_user::SUBJECT, json!({ "username": "testuser" }))
//!     .await;
//! ```

use std::collections::HashMap;

use futures_util::future::BoxFuture;
use serde_json::Value;

use super::context::Context;
use super::error::HandlerError;

/// An operation handler as stored in the registry.
pub type Operation<S> =
    for<'a> fn(&'a Context<'a, S>) -> BoxFuture<'a, Result<Value, HandlerError>>;

/// A microservice routing subjects to operation handlers.
///
/// Generic over `S`, the store type. Each deployed process hosts a
/// single operation; the registry holds several for in-process
/// composition and tests.
pub struct Service<S> {
    store: S,
    operations: HashMap<String, Operation<S>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a new service with the given store adapter.
    pub fn new(store: S) -> Self {
        Self {
            store,
            operations: HashMap::new(),
        }
    }

    /// Register an operation handler.
    ///
    /// Uses builder pattern — returns `self` for chaining.
    pub fn operation(mut self, subject: &str, handler: Operation<S>) -> Self {
        self.operations.insert(subject.to_string(), handler);
        self
    }

    /// Dispatch a decoded request by subject.
    ///
    /// Builds a `Context` from the input, looks up the operation and
    /// runs it.
    pub async fn dispatch(&self, subject: &str, input: Value) -> Result<Value, HandlerError> {
        let handler = self
            .operations
            .get(subject)
            .ok_or_else(|| HandlerError::UnknownSubject(subject.to_string()))?;

        let ctx = Context::new(subject.to_string(), input, &self.store);
        handler(&ctx).await
    }

    /// List registered subjects.
    pub fn subjects(&self) -> Vec<&str> {
        self.operations.keys().map(|s| s.as_str()).collect()
    }

    /// Get a reference to the store adapter.
    pub fn store(&self) -> &S {
        &self.store
    }
}
