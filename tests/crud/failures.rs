//! Store failures and other unhappy paths all map to structured replies.

use std::sync::Arc;
use std::time::Duration;

use userbus::bus::{BusError, InMemoryBus, Requester};
use userbus::handlers::add_user;
use userbus::register_operations;
use userbus::service::{serve, Service};
use userbus::store::MemoryStore;

use crate::support::{client, service_error, start_services, BrokenStore, UnreachableStore};

#[tokio::test]
async fn unreachable_store_maps_to_connection_error_everywhere() {
    let (bus, _services) = start_services(UnreachableStore);
    let client = client(&bus);

    assert_eq!(
        service_error(client.add_user("x").await),
        "Database connection error"
    );
    assert_eq!(
        service_error(client.user(1).await),
        "Database connection error"
    );
    assert_eq!(
        service_error(client.users().await),
        "Database connection error"
    );
    assert_eq!(
        service_error(client.delete_user(1).await),
        "Database connection error"
    );
}

#[tokio::test]
async fn failed_statements_map_to_statement_specific_errors() {
    let (bus, _services) = start_services(BrokenStore);
    let client = client(&bus);

    assert_eq!(
        service_error(client.add_user("x").await),
        "Database insertion error"
    );
    assert_eq!(
        service_error(client.user(1).await),
        "Database query error"
    );
    assert_eq!(
        service_error(client.users().await),
        "Database query error"
    );
    assert_eq!(
        service_error(client.delete_user(1).await),
        "Database deletion error"
    );
}

#[tokio::test]
async fn deleting_an_unknown_id_names_it_and_changes_nothing() {
    let store = MemoryStore::new();
    let (bus, _services) = start_services(store.clone());
    let client = client(&bus);

    client.add_user("keep").await.unwrap();

    let error = service_error(client.delete_user(42).await);
    assert_eq!(error, "no user found with id 42");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn request_on_an_unserved_subject_has_no_responders() {
    let bus = InMemoryBus::new();
    let err = bus
        .request(add_user::SUBJECT, b"{}".to_vec(), Duration::from_millis(50))
        .await
        .unwrap_err();
    assert!(matches!(err, BusError::NoResponders(_)));
}

#[tokio::test]
async fn stats_count_successes_and_failures() {
    let bus = InMemoryBus::new();
    let service = Arc::new(register_operations!(
        Service::new(MemoryStore::new()),
        add_user,
    ));
    let handle = serve(service, bus.subscribe(add_user::SUBJECT));
    let client = client(&bus);

    client.add_user("one").await.unwrap();
    client.add_user("two").await.unwrap();
    let _ = client.add_user("").await;

    let stats = handle.stop().await;
    assert_eq!(stats.handled, 2);
    assert_eq!(stats.failed, 1);
}
