//! userbus — request/reply user CRUD microservices over a message bus.
//!
//! Four independent services (add, get, list, delete) each bind one
//! operation handler to one subject. Every inbound request is decoded,
//! validated, executed against the record store, and always answered —
//! success and every failure alike map to exactly one JSON reply.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use userbus::bus::InMemoryBus;
//! use userbus::handlers::add_user;
//! use userbus::service::{serve, Service};
//! use userbus::store::MemoryStore;
//! use userbus::UserClient;
//!
//! let bus = InMemoryBus::new();
//! let service = Arc::new(userbus::register_operations!(
//!     Service::new(MemoryStore::new()),
//!     add_user,
//! ));
//! let handle = serve(service, bus.subscribe(add_user::SUBJECT));
//!
//! let client = UserClient::new(bus.clone());
//! let reply = client.add_user("testuser").await?;
//! ```

pub mod bus;
pub mod client;
pub mod config;
pub mod handlers;
pub mod service;
pub mod store;

pub use client::{AddUserReply, ClientError, UserClient};
pub use store::{User, UserStore};
