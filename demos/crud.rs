//! End-to-end demo: the four user services on one in-memory bus and
//! store, driven by the typed client.
//!
//! Run with `cargo run --example crud`.

use std::sync::Arc;

use tracing::info;
use userbus::bus::InMemoryBus;
use userbus::handlers::{add_user, delete_user, get_user, get_users};
use userbus::register_operations;
use userbus::service::{serve, Service};
use userbus::store::MemoryStore;
use userbus::UserClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bus = InMemoryBus::new();
    let store = MemoryStore::new();

    let services = vec![
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

    let client = UserClient::new(bus.clone());

    let added = client.add_user("testuser").await?;
    info!(user_id = %added.user_id, message = %added.message, "added");

    let id: i64 = added.user_id.parse()?;
    let user = client.user(id).await?;
    info!(id = user.id, username = %user.username, "fetched");

    let all = client.users().await?;
    info!(count = all.len(), "listed");

    let message = client.delete_user(id).await?;
    info!(%message, "deleted");

    match client.user(id).await {
        Err(err) => info!(error = %err, "second fetch fails as expected"),
        Ok(user) => info!(?user, "unexpected: user still present"),
    }

    for service in services {
        let stats = service.stop().await;
        info!(handled = stats.handled, failed = stats.failed, "stopped");
    }

    Ok(())
}
