//! Handler: add a user on `users.add.service`.

use serde_json::{json, Value};

use crate::service::{Context, HandlerError};
use crate::store::UserStore;

pub const SUBJECT: &str = "users.add.service";

#[derive(Debug)]
pub struct Input {
    pub username: String,
}

impl Input {
    /// Extract the username; absent, non-string, and empty values are
    /// all rejected the same way.
    pub fn decode(value: &Value) -> Result<Self, HandlerError> {
        match value.get("username").and_then(Value::as_str) {
            Some(username) if !username.is_empty() => Ok(Self {
                username: username.to_string(),
            }),
            _ => Err(HandlerError::Validation("Username not provided".to_string())),
        }
    }
}

pub async fn handle<S: UserStore>(ctx: &Context<'_, S>) -> Result<Value, HandlerError> {
    let input = Input::decode(ctx.raw_input())?;

    let user_id = ctx
        .store()
        .insert_user(&input.username)
        .await
        .map_err(|e| HandlerError::from_store(e, "Database insertion error"))?;

    // The assigned id goes over the wire as a string.
    Ok(json!({
        "message": "User successfully added!!!",
        "user_id": user_id.to_string(),
    }))
}
