//! Handler: fetch one user by id on `user.get.service`.

use serde_json::Value;

use crate::service::{Context, HandlerError};
use crate::store::UserStore;

pub const SUBJECT: &str = "user.get.service";

#[derive(Debug)]
pub struct Input {
    pub id: i64,
}

impl Input {
    pub fn decode(value: &Value) -> Result<Self, HandlerError> {
        match value.get("id").and_then(Value::as_i64) {
            Some(id) => Ok(Self { id }),
            None => Err(HandlerError::Validation("User ID not provided".to_string())),
        }
    }
}

pub async fn handle<S: UserStore>(ctx: &Context<'_, S>) -> Result<Value, HandlerError> {
    let input = Input::decode(ctx.raw_input())?;

    let user = ctx
        .store()
        .user_by_id(input.id)
        .await
        .map_err(|e| HandlerError::from_store(e, "Database query error"))?
        .ok_or_else(|| HandlerError::NotFound("User not found".to_string()))?;

    serde_json::to_value(&user).map_err(|e| HandlerError::Encode(e.to_string()))
}
