//! Error taxonomy for operation handlers and its wire mapping.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for operation handling.
///
/// Every variant maps onto exactly one `{"error": ...}` reply via
/// [`HandlerError::reply_message`]; `Display` carries the internal
/// detail for logs.
#[derive(Debug)]
pub enum HandlerError {
    /// No operation registered for this subject.
    UnknownSubject(String),
    /// Payload was not well-formed JSON.
    Decode(String),
    /// Required field missing or wrong shape. The message is
    /// field-specific and goes to the caller verbatim.
    Validation(String),
    /// The store could not be reached.
    Connection(String),
    /// The store rejected or failed a statement. `reply` is the
    /// statement-specific message sent to the caller.
    Store { reply: String, source: StoreError },
    /// A lookup or delete addressed a non-existent id.
    NotFound(String),
    /// A well-formed internal value failed to serialize.
    Encode(String),
    /// Unexpected condition, e.g. a panicking handler.
    Internal(String),
}

impl HandlerError {
    /// Map a store failure: an unreachable store keeps its fixed reply,
    /// anything else surfaces as the statement-specific `reply`.
    pub fn from_store(source: StoreError, reply: &str) -> Self {
        match source {
            StoreError::Connection(detail) => HandlerError::Connection(detail),
            other => HandlerError::Store {
                reply: reply.to_string(),
                source: other,
            },
        }
    }

    /// The error string sent back to the caller.
    pub fn reply_message(&self) -> String {
        match self {
            HandlerError::UnknownSubject(subject) => {
                format!("unknown subject: {}", subject)
            }
            HandlerError::Decode(_) => "Invalid request".to_string(),
            HandlerError::Validation(message) => message.clone(),
            HandlerError::Connection(_) => "Database connection error".to_string(),
            HandlerError::Store { reply, .. } => reply.clone(),
            HandlerError::NotFound(message) => message.clone(),
            HandlerError::Encode(_) | HandlerError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::UnknownSubject(subject) => write!(f, "unknown subject: {}", subject),
            HandlerError::Decode(msg) => write!(f, "decode failed: {}", msg),
            HandlerError::Validation(msg) => write!(f, "validation failed: {}", msg),
            HandlerError::Connection(msg) => write!(f, "store unreachable: {}", msg),
            HandlerError::Store { reply, source } => {
                write!(f, "store operation failed: {} ({})", reply, source)
            }
            HandlerError::NotFound(msg) => write!(f, "not found: {}", msg),
            HandlerError::Encode(msg) => write!(f, "encode failed: {}", msg),
            HandlerError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Decode(err.to_string())
    }
}
