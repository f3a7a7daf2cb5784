//! Inbound message envelope and its single-use reply token.

use tokio::sync::oneshot;

use super::requester::BusError;

/// A request as seen by the serving side of the bus.
#[derive(Clone, Debug)]
pub struct Message {
    /// Correlation id assigned by the requesting side.
    pub id: String,
    /// Subject the request was sent to.
    pub subject: String,
    /// Opaque payload bytes (JSON on every subject this crate serves).
    pub payload: Vec<u8>,
}

impl Message {
    /// Create a new message.
    pub fn new(id: impl Into<String>, subject: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            payload,
        }
    }

    /// Get the payload as a string (if valid UTF-8).
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

/// Receiving end of a delivery's reply channel. The bus keeps this to
/// hand the reply back to the requester.
pub type ReplyReceiver = oneshot::Receiver<Vec<u8>>;

/// An inbound message plus the reply address it arrived with.
///
/// The reply token is single-use: `respond` consumes the delivery, so a
/// served request can never be answered twice.
#[derive(Debug)]
pub struct Delivery {
    /// The inbound message.
    pub message: Message,
    reply: oneshot::Sender<Vec<u8>>,
}

impl Delivery {
    /// Pair a message with a fresh reply channel.
    pub fn new(message: Message) -> (Self, ReplyReceiver) {
        let (reply, rx) = oneshot::channel();
        (Self { message, reply }, rx)
    }

    /// Send the reply back to the requester.
    ///
    /// Fails only when the requester is gone (timed out or dropped);
    /// there is nothing further to do in that case.
    pub fn respond(self, payload: Vec<u8>) -> Result<(), BusError> {
        self.reply
            .send(payload)
            .map_err(|_| BusError::Closed("requester gone before reply".to_string()))
    }
}
