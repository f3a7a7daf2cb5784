//! Message bus seam — request/reply delivery abstractions.
//!
//! The bus itself is an external collaborator: it routes a request
//! payload from a caller to the one subscription bound to a subject and
//! carries the reply back within the caller's deadline. This module
//! defines that seam and ships an in-memory implementation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Requester (caller)                      │
//! │  request(subject, payload, timeout) -> reply bytes          │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Subscription (serving side)                 │
//! │  recv() -> Delivery { Message, single-use reply token }     │
//! └─────────────────────────────────────────────────────────────┘
//!          │                                  │
//!          ▼                                  ▼
//! ┌─────────────────┐              ┌─────────────────────────┐
//! │   InMemoryBus   │              │  broker-backed clients  │
//! │   (included)    │              │       (external)        │
//! └─────────────────┘              └─────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use userbus::bus::{InMemoryBus, Requester};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bus = InMemoryBus::new();
//! let mut subscription = bus.subscribe("greet");
//!
//! tokio::spawn(async move {
//!     while let Some(delivery) = subscription.recv().await {
//!         let _ = delivery.respond(b"hello".to_vec());
//!     }
//! });
//!
//! let reply = bus
//!     .request("greet", b"{}".to_vec(), Duration::from_secs(1))
//!     .await
//!     .unwrap();
//! assert_eq!(reply, b"hello");
//! # }
//! ```

mod in_memory;
mod message;
mod requester;
mod subscription;

pub use in_memory::InMemoryBus;
pub use message::{Delivery, Message, ReplyReceiver};
pub use requester::{BusError, Requester};
pub use subscription::Subscription;
