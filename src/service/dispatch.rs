//! Bus transport: binds a service to a subscription and guarantees a
//! reply for every inbound request.

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures_util::FutureExt;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::bus::{Delivery, Subscription};

use super::error::HandlerError;
use super::service::Service;

/// Fallback reply for the case where even the reply itself cannot be
/// encoded.
const INTERNAL_ERROR_REPLY: &[u8] = br#"{"error":"Internal server error"}"#;

/// Statistics from a serving loop.
#[derive(Debug, Default, Clone)]
pub struct DispatchStats {
    /// Requests answered with a success reply.
    pub handled: usize,
    /// Requests answered with an error reply.
    pub failed: usize,
}

#[derive(Default)]
struct Counters {
    handled: AtomicUsize,
    failed: AtomicUsize,
}

/// Handle to a serving loop. Drop or call `stop()` to shut down.
pub struct ServiceHandle {
    stop_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
    counters: Arc<Counters>,
}

impl ServiceHandle {
    /// Stop receiving and wait for the loop to finish. Returns stats.
    ///
    /// Requests already handed to their own task keep running on the
    /// runtime until they have replied.
    pub async fn stop(mut self) -> DispatchStats {
        let _ = self.stop_tx.send(()).await;
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        DispatchStats {
            handled: self.counters.handled.load(Ordering::SeqCst),
            failed: self.counters.failed.load(Ordering::SeqCst),
        }
    }
}

impl Drop for ServiceHandle {
    fn drop(&mut self) {
        let _ = self.stop_tx.try_send(());
    }
}

/// Bind `service` to `subscription` and serve until stopped.
///
/// Every delivery is handed to its own task, so slow requests never
/// block the receive loop. The task always sends exactly one reply,
/// even when the handler fails or panics; only a vanished requester can
/// make the reply undeliverable, and that is logged best-effort.
pub fn serve<S: Send + Sync + 'static>(
    service: Arc<Service<S>>,
    mut subscription: Subscription,
) -> ServiceHandle {
    let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
    let counters = Arc::new(Counters::default());
    let loop_counters = Arc::clone(&counters);

    let handle = tokio::spawn(async move {
        info!(subject = subscription.subject(), "serving");
        loop {
            tokio::select! {
                _ = stop_rx.recv() => break,
                delivery = subscription.recv() => match delivery {
                    Some(delivery) => {
                        let service = Arc::clone(&service);
                        let counters = Arc::clone(&loop_counters);
                        tokio::spawn(handle_delivery(service, delivery, counters));
                    }
                    None => break,
                },
            }
        }
    });

    ServiceHandle {
        stop_tx,
        handle: Some(handle),
        counters,
    }
}

/// One request's unit of work: structural decode, dispatch, reply.
async fn handle_delivery<S: Send + Sync + 'static>(
    service: Arc<Service<S>>,
    delivery: Delivery,
    counters: Arc<Counters>,
) {
    let subject = delivery.message.subject.clone();
    let id = delivery.message.id.clone();

    let outcome = match serde_json::from_slice::<Value>(&delivery.message.payload) {
        Ok(input) => AssertUnwindSafe(service.dispatch(&subject, input))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(HandlerError::Internal("operation panicked".to_string()))),
        Err(err) => Err(err.into()),
    };

    match &outcome {
        Ok(_) => counters.handled.fetch_add(1, Ordering::SeqCst),
        Err(err) => {
            error!(%subject, %id, error = %err, "operation failed");
            counters.failed.fetch_add(1, Ordering::SeqCst)
        }
    };

    // Best effort: if the requester is gone there is nobody left to tell.
    if let Err(err) = delivery.respond(encode_reply(outcome)) {
        warn!(%subject, %id, error = %err, "failed to send reply");
    }
}

/// Encode a handler outcome into reply bytes. Never fails: an
/// unencodable value degrades to a fixed internal-error reply.
fn encode_reply(outcome: Result<Value, HandlerError>) -> Vec<u8> {
    let body = match outcome {
        Ok(value) => value,
        Err(err) => json!({ "error": err.reply_message() }),
    };
    serde_json::to_vec(&body).unwrap_or_else(|_| INTERNAL_ERROR_REPLY.to_vec())
}
