//! Shared wiring for the CRUD integration tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use userbus::bus::InMemoryBus;
use userbus::handlers::{add_user, delete_user, get_user, get_users};
use userbus::register_operations;
use userbus::service::{serve, Service, ServiceHandle};
use userbus::store::{StoreError, User, UserStore};
use userbus::UserClient;

/// Spin up the four services against one shared store on a fresh bus,
/// one dispatcher/handler pair per subject.
pub fn start_services<S>(store: S) -> (InMemoryBus, Vec<ServiceHandle>)
where
    S: UserStore + Clone + 'static,
{
    let bus = InMemoryBus::new();
    let handles = vec![
        serve(
            Arc::new(register_operations!(Service::new(store.clone()), add_user)),
            bus.subscribe(add_user::SUBJECT),
        ),
        serve(
            Arc::new(register_operations!(Service::new(store.clone()), get_user)),
            bus.subscribe(get_user::SUBJECT),
        ),
        serve(
            Arc::new(register_operations!(Service::new(store.clone()), get_users)),
            bus.subscribe(get_users::SUBJECT),
        ),
        serve(
            Arc::new(register_operations!(Service::new(store), delete_user)),
            bus.subscribe(delete_user::SUBJECT),
        ),
    ];
    (bus, handles)
}

/// A client with a deadline short enough for tests.
pub fn client(bus: &InMemoryBus) -> UserClient<InMemoryBus> {
    UserClient::with_timeout(bus.clone(), Duration::from_secs(2))
}

/// Unwrap the error string of an `{"error": ...}` reply.
pub fn service_error<T: std::fmt::Debug>(result: Result<T, userbus::ClientError>) -> String {
    match result {
        Err(userbus::ClientError::Service(message)) => message,
        other => panic!("expected a service error reply, got {:?}", other),
    }
}

/// Store whose every call fails as unreachable.
#[derive(Clone, Default)]
pub struct UnreachableStore;

#[async_trait]
impl UserStore for UnreachableStore {
    async fn insert_user(&self, _username: &str) -> Result<i64, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn user_by_id(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn delete_user(&self, _id: i64) -> Result<u64, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }
}

/// Store that connects fine but fails every statement.
#[derive(Clone, Default)]
pub struct BrokenStore;

#[async_trait]
impl UserStore for BrokenStore {
    async fn insert_user(&self, _username: &str) -> Result<i64, StoreError> {
        Err(StoreError::Query("relation \"users\" does not exist".to_string()))
    }

    async fn user_by_id(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(StoreError::Query("relation \"users\" does not exist".to_string()))
    }

    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        Err(StoreError::Query("relation \"users\" does not exist".to_string()))
    }

    async fn delete_user(&self, _id: i64) -> Result<u64, StoreError> {
        Err(StoreError::Query("relation \"users\" does not exist".to_string()))
    }
}
