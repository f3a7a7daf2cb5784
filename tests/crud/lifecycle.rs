//! Happy-path lifecycle: create, fetch, list, delete.

use userbus::store::MemoryStore;

use crate::support::{client, service_error, start_services};

#[tokio::test]
async fn full_crud_scenario() {
    let (bus, services) = start_services(MemoryStore::new());
    let client = client(&bus);

    let added = client.add_user("testuser").await.unwrap();
    assert_eq!(added.message, "User successfully added!!!");
    let id: i64 = added.user_id.parse().unwrap();

    let user = client.user(id).await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.username, "testuser");

    let message = client.delete_user(id).await.unwrap();
    assert_eq!(message, "User deleted successfully");

    let error = service_error(client.user(id).await);
    assert_eq!(error, "User not found");

    for service in services {
        service.stop().await;
    }
}

#[tokio::test]
async fn created_users_round_trip_their_username() {
    let (bus, _services) = start_services(MemoryStore::new());
    let client = client(&bus);

    for username in ["alice", "bob", "carol"] {
        let added = client.add_user(username).await.unwrap();
        let id: i64 = added.user_id.parse().unwrap();
        assert_eq!(client.user(id).await.unwrap().username, username);
    }
}

#[tokio::test]
async fn list_reflects_exactly_the_persisted_records() {
    let (bus, _services) = start_services(MemoryStore::new());
    let client = client(&bus);

    assert!(client.users().await.unwrap().is_empty());

    let a: i64 = client.add_user("a").await.unwrap().user_id.parse().unwrap();
    let b: i64 = client.add_user("b").await.unwrap().user_id.parse().unwrap();

    let mut names: Vec<(i64, String)> = client
        .users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| (u.id, u.username))
        .collect();
    names.sort();
    assert_eq!(names, vec![(a, "a".to_string()), (b, "b".to_string())]);

    client.delete_user(a).await.unwrap();
    let remaining = client.users().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b);
}

#[tokio::test]
async fn duplicate_usernames_create_distinct_users() {
    let (bus, _services) = start_services(MemoryStore::new());
    let client = client(&bus);

    let first = client.add_user("retry").await.unwrap();
    let second = client.add_user("retry").await.unwrap();
    assert_ne!(first.user_id, second.user_id);
    assert_eq!(client.users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn concurrent_adds_get_fresh_ids() {
    let (bus, _services) = start_services(MemoryStore::new());

    let mut calls = Vec::new();
    for n in 0..8 {
        let client = crate::support::client(&bus);
        calls.push(tokio::spawn(async move {
            client.add_user(&format!("user-{}", n)).await.unwrap()
        }));
    }

    let mut ids = Vec::new();
    for call in calls {
        ids.push(call.await.unwrap().user_id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}
