//! Handler: delete a user by id on `user.delete.service`.

use serde_json::{json, Value};

use crate::service::{Context, HandlerError};
use crate::store::UserStore;

pub const SUBJECT: &str = "user.delete.service";

#[derive(Debug)]
pub struct Input {
    pub id: i64,
}

impl Input {
    pub fn decode(value: &Value) -> Result<Self, HandlerError> {
        match value.get("id").and_then(Value::as_i64) {
            Some(id) => Ok(Self { id }),
            None => Err(HandlerError::Validation(
                "User ID is not provided".to_string(),
            )),
        }
    }
}

pub async fn handle<S: UserStore>(ctx: &Context<'_, S>) -> Result<Value, HandlerError> {
    let input = Input::decode(ctx.raw_input())?;

    let affected = ctx
        .store()
        .delete_user(input.id)
        .await
        .map_err(|e| HandlerError::from_store(e, "Database deletion error"))?;

    if affected == 0 {
        return Err(HandlerError::NotFound(format!(
            "no user found with id {}",
            input.id
        )));
    }

    Ok(json!({ "message": "User deleted successfully" }))
}
