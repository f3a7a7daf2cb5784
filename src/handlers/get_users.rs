//! Handler: fetch every user on `users.get.service`.

use serde_json::Value;

use crate::service::{Context, HandlerError};
use crate::store::UserStore;

pub const SUBJECT: &str = "users.get.service";

/// Takes no input; whatever payload arrives is ignored. The reply is a
/// top-level JSON array in the store's natural scan order.
pub async fn handle<S: UserStore>(ctx: &Context<'_, S>) -> Result<Value, HandlerError> {
    let users = ctx
        .store()
        .all_users()
        .await
        .map_err(|e| HandlerError::from_store(e, "Database query error"))?;

    serde_json::to_value(&users).map_err(|e| HandlerError::Encode(e.to_string()))
}
