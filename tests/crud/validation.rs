//! Malformed and incomplete requests never go unanswered.

use std::time::Duration;

use serde_json::{json, Value};
use userbus::bus::Requester;
use userbus::handlers::{add_user, delete_user, get_user};
use userbus::store::MemoryStore;

use crate::support::{client, service_error, start_services};

#[tokio::test]
async fn add_user_requires_a_username() {
    let store = MemoryStore::new();
    let (bus, _services) = start_services(store.clone());
    let client = client(&bus);

    let error = service_error(client.add_user("").await);
    assert_eq!(error, "Username not provided");
    // Nothing was written on the failed request.
    assert!(store.is_empty());
}

#[tokio::test]
async fn missing_fields_get_field_specific_replies() {
    let (bus, _services) = start_services(MemoryStore::new());

    // Bypass the typed client to send shapes it would never produce.
    let cases = [
        (add_user::SUBJECT, json!({}), "Username not provided"),
        (get_user::SUBJECT, json!({}), "User ID not provided"),
        (get_user::SUBJECT, json!({ "id": "seven" }), "User ID not provided"),
        (delete_user::SUBJECT, json!({}), "User ID is not provided"),
        (delete_user::SUBJECT, json!({ "id": 1.5 }), "User ID is not provided"),
    ];

    for (subject, body, expected) in cases {
        let reply = bus
            .request(
                subject,
                serde_json::to_vec(&body).unwrap(),
                Duration::from_secs(2),
            )
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&reply).unwrap();
        assert_eq!(value, json!({ "error": expected }), "subject {}", subject);
    }
}

#[tokio::test]
async fn non_json_payload_is_an_invalid_request() {
    let (bus, _services) = start_services(MemoryStore::new());

    for subject in [add_user::SUBJECT, get_user::SUBJECT, delete_user::SUBJECT] {
        let reply = bus
            .request(subject, b"not json at all".to_vec(), Duration::from_secs(2))
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&reply).unwrap();
        assert_eq!(value, json!({ "error": "Invalid request" }), "subject {}", subject);
    }
}
