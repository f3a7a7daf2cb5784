//! Typed caller stubs for the four user services.
//!
//! Works over any [`Requester`], so the same client drives the
//! in-memory bus in tests and a broker-backed bus in production.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::bus::{BusError, Requester};
use crate::handlers::{add_user, delete_user, get_user, get_users};
use crate::store::User;

/// Reply to a successful add request. The assigned id arrives as a
/// string.
#[derive(Debug, Clone, Deserialize)]
pub struct AddUserReply {
    pub message: String,
    pub user_id: String,
}

/// Error type for client calls.
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (timeout, no responders, closed).
    Bus(BusError),
    /// Reply was not the expected shape.
    Decode(String),
    /// The service answered with an `{"error": ...}` reply.
    Service(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Bus(err) => write!(f, "bus error: {}", err),
            ClientError::Decode(msg) => write!(f, "unexpected reply: {}", msg),
            ClientError::Service(msg) => write!(f, "service error: {}", msg),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Bus(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BusError> for ClientError {
    fn from(err: BusError) -> Self {
        ClientError::Bus(err)
    }
}

/// Client for the user services.
pub struct UserClient<B> {
    bus: B,
    timeout: Duration,
}

impl<B: Requester> UserClient<B> {
    /// Default per-request deadline.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client with the default deadline.
    pub fn new(bus: B) -> Self {
        Self::with_timeout(bus, Self::DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request deadline.
    pub fn with_timeout(bus: B, timeout: Duration) -> Self {
        Self { bus, timeout }
    }

    /// Create a user. Returns the confirmation message and assigned id.
    pub async fn add_user(&self, username: &str) -> Result<AddUserReply, ClientError> {
        let value = self
            .call(add_user::SUBJECT, json!({ "username": username }))
            .await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetch one user by id.
    pub async fn user(&self, id: i64) -> Result<User, ClientError> {
        let value = self.call(get_user::SUBJECT, json!({ "id": id })).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetch all users.
    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        let value = self.call(get_users::SUBJECT, json!({})).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Delete one user by id. Returns the confirmation message.
    pub async fn delete_user(&self, id: i64) -> Result<String, ClientError> {
        let value = self.call(delete_user::SUBJECT, json!({ "id": id })).await?;
        value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ClientError::Decode("reply missing message field".to_string()))
    }

    /// Issue one request and separate error replies from results.
    async fn call(&self, subject: &str, body: Value) -> Result<Value, ClientError> {
        let payload = serde_json::to_vec(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        let reply = self.bus.request(subject, payload, self.timeout).await?;
        let value: Value =
            serde_json::from_slice(&reply).map_err(|e| ClientError::Decode(e.to_string()))?;

        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return Err(ClientError::Service(error.to_string()));
        }
        Ok(value)
    }
}
