//! In-memory bus for testing and single-process scenarios.
//!
//! This module provides a thread-safe request/reply bus useful for:
//! - Unit and integration testing without an external broker
//! - Single-process deployments hosting several services
//! - Development and prototyping

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use super::message::{Delivery, Message};
use super::requester::{BusError, Requester};
use super::subscription::Subscription;

/// In-memory request/reply bus.
///
/// Features:
/// - Thread-safe (can be shared across tasks via `Clone`)
/// - Subject-based routing, one subscription per subject
/// - Caller-supplied deadline per request
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use userbus::bus::{InMemoryBus, Requester};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let bus = InMemoryBus::new();
/// let mut subscription = bus.subscribe("echo");
///
/// tokio::spawn(async move {
///     while let Some(delivery) = subscription.recv().await {
///         let payload = delivery.message.payload.clone();
///         let _ = delivery.respond(payload);
///     }
/// });
///
/// let reply = bus
///     .request("echo", b"ping".to_vec(), Duration::from_secs(1))
///     .await
///     .unwrap();
/// assert_eq!(reply, b"ping");
/// # }
/// ```
#[derive(Clone, Default)]
pub struct InMemoryBus {
    subjects: Arc<Mutex<HashMap<String, UnboundedSender<Delivery>>>>,
}

impl InMemoryBus {
    /// Create a new bus with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a subscription to `subject`.
    ///
    /// Rebinding a subject replaces the previous subscription; the old
    /// one drains whatever was already delivered and then ends.
    pub fn subscribe(&self, subject: &str) -> Subscription {
        let (tx, subscription) = Subscription::channel(subject);
        self.subjects
            .lock()
            .unwrap()
            .insert(subject.to_string(), tx);
        subscription
    }
}

#[async_trait]
impl Requester for InMemoryBus {
    async fn request(
        &self,
        subject: &str,
        payload: Vec<u8>,
        timeout: Duration,
    ) -> Result<Vec<u8>, BusError> {
        let tx = self
            .subjects
            .lock()
            .unwrap()
            .get(subject)
            .cloned()
            .ok_or_else(|| BusError::NoResponders(subject.to_string()))?;

        let message = Message::new(Uuid::new_v4().to_string(), subject, payload);
        let (delivery, reply) = Delivery::new(message);

        tx.send(delivery)
            .map_err(|_| BusError::NoResponders(subject.to_string()))?;

        match tokio::time::timeout(timeout, reply).await {
            Ok(Ok(bytes)) => Ok(bytes),
            Ok(Err(_)) => Err(BusError::Closed(format!(
                "subscription on {} dropped the request",
                subject
            ))),
            Err(_) => Err(BusError::Timeout),
        }
    }
}
