//! Server-side subscription stream.

use tokio::sync::mpsc;

use super::message::Delivery;

/// Inbound stream of deliveries for one subject.
///
/// Point-to-point: each delivery reaches exactly one subscription, and a
/// service owns its subject for the life of the process.
pub struct Subscription {
    subject: String,
    rx: mpsc::UnboundedReceiver<Delivery>,
}

impl Subscription {
    /// Create a subscription plus the sending half a bus implementation
    /// feeds deliveries into.
    pub fn channel(subject: impl Into<String>) -> (mpsc::UnboundedSender<Delivery>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            tx,
            Self {
                subject: subject.into(),
                rx,
            },
        )
    }

    /// The subject this subscription is bound to.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Next delivery, or `None` once the bus side is gone.
    pub async fn recv(&mut self) -> Option<Delivery> {
        self.rx.recv().await
    }
}
