//! service — request dispatch, error mapping, and the serving loop.
//!
//! Build a service by registering operation handlers on a [`Service`],
//! then bind it to a bus subscription with [`serve`]. Each handler
//! receives a [`Context`] with the decoded input and the store adapter.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use userbus::service::{serve, Service};
//! use userbus::handlers::add_user;
//!
//! let service = Arc::new(userbus::register_operations!(
//!     Service::new(store),
//!     add_user,
//! ));
//!
//! let handle = serve(service, bus.subscribe(add_user::SUBJECT));
//! // ... later
//! let stats = handle.stop().await;
//! ```
//!
//! ## Handler Convention
//!
//! Each handler file follows this convention:
//!
//! ```ignore
//! // src/handlers/add_user.rs
//!
//! pub const SUBJECT: &str = "users.add.service";
//!
//! pub struct Input { pub username: String }
//!
//! impl Input {
//!     pub fn decode(value: &Value) -> Result<Self, HandlerError> { ... }
//! }
//!
//! pub async fn handle<S: UserStore>(
//!     ctx: &Context<'_, S>,
//! ) -> Result<Value, HandlerError> {
//!     let input = Input::decode(ctx.raw_input())?;
//!     // ...
//! }
//! ```

mod context;
mod dispatch;
mod error;
mod service;

pub use context::Context;
pub use dispatch::{serve, DispatchStats, ServiceHandle};
pub use error::HandlerError;
pub use service::{Operation, Service};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `SUBJECT: &str` — the subject the handler serves
/// - `handle(ctx) -> Result<Value, HandlerError>` — the operation
///
/// # Example
/// ```ignore
/// let service = userbus::register_operations!(
///     Service::new(store),
///     handlers::add_user,
///     handlers::get_user,
/// );
/// ```
#[macro_export]
macro_rules! register_operations {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .operation(
                $($seg)::+::SUBJECT,
                |ctx| ::std::boxed::Box::pin($($seg)::+::handle(ctx)),
            )
        )+
    };
}
