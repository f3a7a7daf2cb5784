//! Caller-side request trait and the bus error type.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

/// Error type for bus operations.
#[derive(Debug)]
pub enum BusError {
    /// No subscription is bound to the subject.
    NoResponders(String),
    /// No reply arrived within the caller's deadline.
    Timeout,
    /// The channel to the counterparty is gone.
    Closed(String),
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::NoResponders(subject) => {
                write!(f, "no responders on subject: {}", subject)
            }
            BusError::Timeout => write!(f, "request timed out"),
            BusError::Closed(msg) => write!(f, "bus channel closed: {}", msg),
        }
    }
}

impl Error for BusError {}

/// Trait for issuing request/reply calls over a message bus.
///
/// Implementations might include:
/// - `InMemoryBus` — for testing and single-process scenarios
/// - broker-backed clients (NATS, RabbitMQ) — external crates
#[async_trait]
pub trait Requester: Send + Sync {
    /// Send `payload` to `subject` and wait up to `timeout` for the reply.
    ///
    /// The deadline is owned by the caller: when it elapses the call
    /// fails with `BusError::Timeout` regardless of whether the serving
    /// side eventually produces a reply.
    async fn request(
        &self,
        subject: &str,
        payload: Vec<u8>,
        timeout: Duration,
    ) -> Result<Vec<u8>, BusError>;
}
